//! Core types for binomial proportion statistics
//!
//! This crate holds the pieces shared by the proportion crates:
//!
//! - [`Error`] / [`Result`]: the single error type returned by every
//!   validating entry point
//! - [`math::distributions::normal`]: standard normal CDF, quantile
//!   function and two-sided critical values
//!
//! # Example
//!
//! ```rust
//! use proportion_core::math::distributions::normal;
//!
//! let z = normal::two_sided_critical_value(0.95).unwrap();
//! assert!((z - 1.959963985).abs() < 1e-9);
//! ```

pub mod error;
pub mod math;

// Re-export core types
pub use error::{Error, Result};
pub use math::distributions::normal;
