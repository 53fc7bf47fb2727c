//! Core traits for proportion confidence interval estimation
//!
//! Consumers that only need "an interval for x out of n" depend on
//! [`ProportionConfidenceInterval`] rather than on a concrete estimator, so
//! the configured estimator can be built once and passed around.

use crate::types::WilsonResult;
use proportion_core::Result;

/// Confidence interval estimator for a binomial proportion
pub trait ProportionConfidenceInterval {
    /// Calculate the confidence interval for `successes` out of `trials`
    ///
    /// # Arguments
    /// * `successes` - Observed successes
    /// * `trials` - Number of trials, positive and at least `successes`
    fn interval(&self, successes: u64, trials: u64) -> Result<WilsonResult>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;

    /// Calculate intervals for several `(successes, trials)` pairs
    ///
    /// Stops at the first invalid pair.
    fn intervals(&self, counts: &[(u64, u64)]) -> Result<Vec<WilsonResult>> {
        counts
            .iter()
            .map(|&(successes, trials)| self.interval(successes, trials))
            .collect()
    }
}
