//! Confidence intervals for a binomial proportion
//!
//! This crate computes the Wilson score interval for an observed count of
//! successes out of a number of trials.
//!
//! # Overview
//!
//! The Wilson interval is obtained by inverting the score test of the normal
//! approximation to the binomial, rather than placing a symmetric margin
//! around the observed proportion. It stays inside [0, 1] and behaves well
//! for proportions near 0 or 1, where the symmetric interval is least
//! reliable.
//!
//! # Examples
//!
//! ## One-off interval
//!
//! ```rust
//! use proportion_confidence::compute_wilson_interval;
//!
//! let result = compute_wilson_interval(73, 76, 0.95).unwrap();
//! println!("{}", result);
//! assert!(result.lower_bound <= result.proportion);
//! assert!(result.proportion <= result.upper_bound);
//! ```
//!
//! ## Reusing a configured estimator
//!
//! ```rust
//! use proportion_confidence::{ConfidenceLevel, WilsonScoreCI};
//!
//! let wilson = WilsonScoreCI::with_level(ConfidenceLevel::NINETY_NINE);
//! for trials in [10, 100, 1000] {
//!     let ci = wilson.interval(trials / 2, trials).unwrap();
//!     println!("n = {trials}: [{:.6}, {:.6}]", ci.lower_bound, ci.upper_bound);
//! }
//! ```

pub mod api;
mod traits;
mod types;
mod wilson;

// Re-exports
pub use api::{scaled_series, wilson_scaled_series, ScaledInterval, DEFAULT_SCALE_FACTORS};
pub use proportion_core::{Error, Result};
pub use traits::ProportionConfidenceInterval;
pub use types::{ConfidenceInterval, ConfidenceLevel, WilsonResult};
pub use wilson::{compute_wilson_interval, compute_wilson_interval_95, WilsonScoreCI};

/// Wilson estimator at `confidence_level`, shorthand for [`WilsonScoreCI::new`]
///
/// # Errors
/// [`Error::InvalidArgument`] if `confidence_level` is not strictly inside (0, 1).
pub fn wilson(confidence_level: f64) -> Result<WilsonScoreCI> {
    WilsonScoreCI::new(confidence_level)
}
