//! Wilson score confidence intervals for a binomial proportion

use crate::{ConfidenceLevel, ProportionConfidenceInterval, WilsonResult};
use proportion_core::{normal, Error, Result};
use tracing::trace;

/// Rounding residue tolerated at the unit-interval boundaries, relative to the
/// magnitude of the terms being cancelled.
///
/// For any `0 < x < n` the cancelled difference is at least a few thousandths
/// of its operands, so only the `x = 0` and `x = n` cases ever fall inside it.
const ROUNDING_SLACK: f64 = 16.0 * f64::EPSILON;

/// Wilson score interval estimator
///
/// Inverts the score test of the normal approximation to the binomial. The
/// bounds are evaluated with numerator and denominator scaled by the number of
/// trials, which keeps round-off small near proportions of 0 and 1 where the
/// textbook `p ± λ√(pq/n)` arrangement is most exposed.
///
/// The critical value is resolved once at construction so the estimator can be
/// reused across many `(successes, trials)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonScoreCI {
    /// Confidence level
    level: ConfidenceLevel,
    /// Two-sided standard normal critical value λ
    critical_value: f64,
}

impl WilsonScoreCI {
    /// Create a new Wilson estimator for the given confidence level
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `confidence_level` is not strictly inside (0, 1).
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self::with_level(ConfidenceLevel::new(confidence_level)?))
    }

    /// Create a new Wilson estimator from a validated confidence level
    pub fn with_level(level: ConfidenceLevel) -> Self {
        Self {
            level,
            critical_value: normal::isf(level.tail_probability()),
        }
    }

    /// The validated confidence level
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Two-sided critical value λ
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Wilson interval for `successes` out of `trials`
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `trials` is zero or `successes > trials`.
    pub fn interval(&self, successes: u64, trials: u64) -> Result<WilsonResult> {
        if trials == 0 {
            return Err(Error::invalid_trials(0));
        }
        if successes > trials {
            return Err(Error::invalid_successes(successes, trials));
        }

        let (lower_bound, upper_bound) = self.bounds(successes, trials);
        let proportion = successes as f64 / trials as f64;

        trace!(
            successes,
            trials,
            lambda = self.critical_value,
            lower_bound,
            upper_bound,
            "wilson interval"
        );

        Ok(WilsonResult {
            successes,
            trials,
            confidence_level: self.level.value(),
            proportion,
            lower_bound,
            upper_bound,
        })
    }

    fn bounds(&self, successes: u64, trials: u64) -> (f64, f64) {
        let x = successes as f64;
        let n = trials as f64;
        let proportion = x / n;
        let nt = self.critical_value * self.critical_value;

        let center = x + nt / 2.0;
        let radical = (x * (n - x) + n * (nt / 4.0)) * nt / n;
        let delta = radical.sqrt();
        let denom = n + nt;

        // Complement of `center` within `denom`; mirrors the success side.
        let failure_center = (n - x) + nt / 2.0;

        let lower_numerator = center - delta;
        let lower = if lower_numerator <= ROUNDING_SLACK * center {
            0.0
        } else {
            lower_numerator / denom
        };

        let upper = if failure_center - delta <= ROUNDING_SLACK * failure_center {
            1.0
        } else {
            (center + delta) / denom
        };

        // Past 2^53 the counts are no longer exact in f64 and the closed form
        // can drift across the point estimate or the unit interval.
        (lower.clamp(0.0, proportion), upper.clamp(proportion, 1.0))
    }
}

impl Default for WilsonScoreCI {
    fn default() -> Self {
        Self::with_level(ConfidenceLevel::default())
    }
}

impl ProportionConfidenceInterval for WilsonScoreCI {
    fn interval(&self, successes: u64, trials: u64) -> Result<WilsonResult> {
        WilsonScoreCI::interval(self, successes, trials)
    }

    fn confidence_level(&self) -> f64 {
        self.level.value()
    }
}

/// Compute the Wilson score interval for `successes` out of `trials`
///
/// Counts are taken as signed integers so that negative values are
/// reported as errors rather than being unrepresentable.
///
/// # Errors
/// [`Error::InvalidArgument`] when `trials <= 0`, `successes < 0`,
/// `successes > trials`, or `confidence_level` lies outside (0, 1).
///
/// # Example
/// ```rust
/// use proportion_confidence::compute_wilson_interval;
///
/// let result = compute_wilson_interval(73, 76, 0.95).unwrap();
/// assert!((result.proportion - 0.960526).abs() < 1e-6);
/// assert!(result.lower_bound < result.proportion);
/// assert!(result.proportion < result.upper_bound);
/// ```
pub fn compute_wilson_interval(
    successes: i64,
    trials: i64,
    confidence_level: f64,
) -> Result<WilsonResult> {
    if trials <= 0 {
        return Err(Error::invalid_trials(trials));
    }
    if successes < 0 || successes > trials {
        return Err(Error::invalid_successes(successes, trials));
    }

    let estimator = WilsonScoreCI::new(confidence_level)?;
    // Both counts were checked non-negative above.
    estimator.interval(successes as u64, trials as u64)
}

/// [`compute_wilson_interval`] at the default 95% confidence level
pub fn compute_wilson_interval_95(successes: i64, trials: i64) -> Result<WilsonResult> {
    compute_wilson_interval(successes, trials, ConfidenceLevel::default().value())
}
