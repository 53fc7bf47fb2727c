//! High-level API for interval-width studies
//!
//! Reporting code typically holds the observed proportion fixed and asks how
//! the interval tightens as the same ratio is observed over more trials. This
//! module runs that loop.

use crate::{ProportionConfidenceInterval, WilsonResult, WilsonScoreCI};
use proportion_core::{Error, Result};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default multipliers applied to the base counts
pub const DEFAULT_SCALE_FACTORS: [u64; 7] = [1, 2, 4, 8, 16, 32, 48];

/// Interval for the base counts multiplied by `factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledInterval {
    /// Multiplier applied to both successes and trials
    pub factor: u64,
    /// Interval for the scaled counts
    pub result: WilsonResult,
}

impl ScaledInterval {
    /// Width of the scaled interval
    pub fn width(&self) -> f64 {
        self.result.width()
    }
}

/// Compute intervals for `(k·successes, k·trials)` for every `k` in `factors`
///
/// The output follows the order of `factors`.
///
/// # Errors
/// [`Error::InvalidArgument`] for a zero factor, for scaled counts that
/// overflow `u64`, or for base counts the estimator rejects.
///
/// # Example
/// ```rust
/// use proportion_confidence::{scaled_series, WilsonScoreCI, DEFAULT_SCALE_FACTORS};
///
/// let series = scaled_series(73, 76, &WilsonScoreCI::default(), &DEFAULT_SCALE_FACTORS).unwrap();
/// assert_eq!(series.len(), DEFAULT_SCALE_FACTORS.len());
/// assert!(series[0].width() > series[series.len() - 1].width());
/// ```
pub fn scaled_series<E>(
    successes: u64,
    trials: u64,
    estimator: &E,
    factors: &[u64],
) -> Result<Vec<ScaledInterval>>
where
    E: ProportionConfidenceInterval + Sync,
{
    debug!(
        "Computing {} scaled intervals for {}/{}",
        factors.len(),
        successes,
        trials
    );

    let scale = |&factor: &u64| -> Result<ScaledInterval> {
        if factor == 0 {
            return Err(Error::InvalidArgument(
                "Scale factor must be positive".to_string(),
            ));
        }
        let overflow = || {
            Error::InvalidArgument(format!(
                "Scaling {successes}/{trials} by {factor} overflows"
            ))
        };
        let scaled_successes = successes.checked_mul(factor).ok_or_else(overflow)?;
        let scaled_trials = trials.checked_mul(factor).ok_or_else(overflow)?;

        Ok(ScaledInterval {
            factor,
            result: estimator.interval(scaled_successes, scaled_trials)?,
        })
    };

    #[cfg(feature = "parallel")]
    let series = factors.par_iter().map(scale).collect();
    #[cfg(not(feature = "parallel"))]
    let series = factors.iter().map(scale).collect();

    series
}

/// [`scaled_series`] with a Wilson estimator and [`DEFAULT_SCALE_FACTORS`]
pub fn wilson_scaled_series(
    successes: u64,
    trials: u64,
    confidence_level: f64,
) -> Result<Vec<ScaledInterval>> {
    let estimator = WilsonScoreCI::new(confidence_level)?;
    scaled_series(successes, trials, &estimator, &DEFAULT_SCALE_FACTORS)
}
