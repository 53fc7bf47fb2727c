//! Error types for binomial proportion statistics
//!
//! Provides the error type shared by all proportion crates.

use std::fmt::Display;
use thiserror::Error;

/// Core error type for proportion interval operations
///
/// Every operation is a pure computation over its arguments, so the only
/// way to fail is to be handed arguments outside the method's domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument lies outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidArgument(format!(
            "Confidence level {level} must lie strictly between 0 and 1"
        ))
    }

    /// Create an error for a non-positive trial count
    pub fn invalid_trials(trials: impl Display) -> Self {
        Self::InvalidArgument(format!("Trials {trials} must be positive"))
    }

    /// Create an error for a success count outside [0, trials]
    pub fn invalid_successes(successes: impl Display, trials: impl Display) -> Self {
        Self::InvalidArgument(format!(
            "Successes {successes} must be in [0, {trials}]"
        ))
    }
}
