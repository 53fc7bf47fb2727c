//! Binomial proportion statistics
//!
//! Umbrella crate re-exporting the proportion workspace:
//!
//! - [`proportion_core`]: error type and standard normal distribution functions
//! - [`proportion_confidence`]: Wilson score confidence intervals
//!
//! ```rust
//! use proportion_stats::compute_wilson_interval;
//!
//! let result = compute_wilson_interval(0, 25, 0.95).unwrap();
//! assert_eq!(result.lower_bound, 0.0);
//! ```

pub use proportion_confidence;
pub use proportion_core;

pub use proportion_confidence::{
    compute_wilson_interval, compute_wilson_interval_95, scaled_series, wilson, wilson_scaled_series,
    ConfidenceInterval, ConfidenceLevel, ProportionConfidenceInterval, ScaledInterval,
    WilsonResult, WilsonScoreCI, DEFAULT_SCALE_FACTORS,
};
pub use proportion_core::{Error, Result};
