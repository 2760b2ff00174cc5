//! Test directionality

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Tail of the statistical test
///
/// Determines which side(s) of the null distribution count as evidence
/// against the null hypothesis, and therefore which critical value the
/// power calculation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
    /// One-sided test against the lower tail
    Left,
    /// One-sided test against the upper tail
    Right,
    /// Two-sided test
    Both,
}

impl Tail {
    /// Get the name of the tail mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    /// Whether this is a two-sided test
    pub fn is_two_sided(&self) -> bool {
        matches!(self, Self::Both)
    }

    /// Probability at which the standard normal quantile function yields
    /// the critical value: `1 - alpha` for one-sided tests, `1 - alpha/2`
    /// for two-sided tests.
    pub fn critical_probability(&self, alpha: f64) -> f64 {
        match self {
            Self::Left | Self::Right => 1.0 - alpha,
            Self::Both => 1.0 - alpha / 2.0,
        }
    }
}

impl Default for Tail {
    fn default() -> Self {
        Self::Right
    }
}

impl FromStr for Tail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            other => Err(Error::invalid_tail(other)),
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tails() {
        assert_eq!("left".parse::<Tail>().unwrap(), Tail::Left);
        assert_eq!("right".parse::<Tail>().unwrap(), Tail::Right);
        assert_eq!("both".parse::<Tail>().unwrap(), Tail::Both);
    }

    #[test]
    fn test_parse_invalid_tail() {
        let err = "bottom".parse::<Tail>().unwrap_err();
        match err {
            Error::InvalidParameter(msg) => {
                assert!(msg.contains("bottom"));
            }
            _ => panic!("Wrong error type"),
        }

        // Case-sensitive, like the reference
        assert!("Right".parse::<Tail>().is_err());
        assert!("".parse::<Tail>().is_err());
    }

    #[test]
    fn test_critical_probability() {
        assert_eq!(Tail::Right.critical_probability(0.05), 0.95);
        assert_eq!(Tail::Left.critical_probability(0.05), 0.95);
        assert_eq!(Tail::Both.critical_probability(0.05), 0.975);
    }

    #[test]
    fn test_display_roundtrip() {
        for tail in [Tail::Left, Tail::Right, Tail::Both] {
            assert_eq!(tail.to_string().parse::<Tail>().unwrap(), tail);
        }
    }

    #[test]
    fn test_default_is_right() {
        assert_eq!(Tail::default(), Tail::Right);
    }
}
