//! Core types for Pearson correlation power analysis
//!
//! This crate provides the shared pieces used across the pearson-power
//! workspace: the error type, a `Result` alias, and the [`Tail`] type that
//! captures test directionality.
//!
//! # Example
//!
//! ```rust
//! use power_core::Tail;
//!
//! let tail: Tail = "both".parse().unwrap();
//! assert!(tail.is_two_sided());
//! assert!("bottom".parse::<Tail>().is_err());
//! ```

mod error;
mod tail;

// Re-exports
pub use error::{Error, Result};
pub use tail::Tail;
