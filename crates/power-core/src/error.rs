//! Error types for power analysis
//!
//! Provides a unified error type for all pearson-power crates.

use thiserror::Error;

/// Core error type for power analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an unrecognized tail value
    pub fn invalid_tail(value: &str) -> Self {
        Self::InvalidParameter(format!("{value} is not a valid value for tail"))
    }
}
