//! Common types for proportion confidence intervals

use proportion_core::{Error, Result};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.6}, {:.6}], estimate: {:.6}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `level` is not strictly inside (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Cumulative probability whose normal quantile is the two-sided
    /// critical value, `(1 + level) / 2`
    pub fn upper_tail_quantile_probability(&self) -> f64 {
        0.5 * (1.0 + self.0)
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Wilson score interval for an observed binomial proportion
///
/// Produced by [`crate::compute_wilson_interval`] or
/// [`crate::WilsonScoreCI`]. Holds the inputs alongside the point estimate
/// and the bounds, with `0 <= lower_bound <= proportion <= upper_bound <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonResult {
    /// Observed successes (x)
    pub successes: u64,
    /// Number of trials (n)
    pub trials: u64,
    /// Confidence level the bounds were computed at
    pub confidence_level: f64,
    /// Point estimate x / n
    pub proportion: f64,
    /// Lower bound of the interval
    pub lower_bound: f64,
    /// Upper bound of the interval
    pub upper_bound: f64,
}

impl WilsonResult {
    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Half-width of the interval
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a proportion lies within the bounds
    pub fn contains(&self, proportion: f64) -> bool {
        proportion >= self.lower_bound && proportion <= self.upper_bound
    }

    /// View as a general confidence interval around the proportion
    pub fn interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.lower_bound,
            self.upper_bound,
            self.proportion,
            self.confidence_level,
        )
    }
}

impl From<WilsonResult> for ConfidenceInterval {
    fn from(result: WilsonResult) -> Self {
        result.interval()
    }
}

impl fmt::Display for WilsonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}: proportion {:.6}, {:.1}% CI [{:.6}, {:.6}]",
            self.successes,
            self.trials,
            self.proportion,
            self.confidence_level * 100.0,
            self.lower_bound,
            self.upper_bound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(0.2, 0.8, 0.5, 0.95);

        assert!((ci.width() - 0.6).abs() < 1e-12);
        assert!((ci.margin_of_error() - 0.3).abs() < 1e-12);
        assert!(ci.contains(0.5));
        assert!(!ci.contains(0.1));
        assert!(!ci.contains(0.9));
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::new(0.2, 0.6, 0.4, 0.95);
        let ci2 = ConfidenceInterval::new(0.4, 0.8, 0.6, 0.95);
        let ci3 = ConfidenceInterval::new(0.7, 0.9, 0.8, 0.95);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
        assert!((level.upper_tail_quantile_probability() - 0.975).abs() < 1e-12);
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::NINETY_FIVE);
        assert_eq!(f64::from(ConfidenceLevel::NINETY_NINE), 0.99);
    }

    #[test]
    fn test_invalid_confidence_level() {
        for &level in &[0.0, 1.0, 1.5, -0.2, f64::NAN] {
            assert!(matches!(
                ConfidenceLevel::new(level),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(ConfidenceLevel::try_from(1.0).is_err());
        assert!(ConfidenceLevel::try_from(0.5).is_ok());
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::new(0.25, 0.75, 0.5, 0.95);
        let display = format!("{}", ci);
        assert_eq!(display, "95.0% CI: [0.250000, 0.750000], estimate: 0.500000");
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_FIVE), "95.0%");
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_NINE), "99.0%");
    }

    #[test]
    fn test_wilson_result_accessors() {
        let result = WilsonResult {
            successes: 5,
            trials: 10,
            confidence_level: 0.95,
            proportion: 0.5,
            lower_bound: 0.25,
            upper_bound: 0.75,
        };

        assert!((result.width() - 0.5).abs() < 1e-12);
        assert!((result.margin_of_error() - 0.25).abs() < 1e-12);
        assert!(result.contains(0.5));
        assert!(!result.contains(0.8));

        let ci: ConfidenceInterval = result.into();
        assert_eq!(ci.estimate, 0.5);
        assert_eq!(ci.lower, 0.25);
        assert_eq!(ci.upper, 0.75);
    }

    #[test]
    fn test_wilson_result_display() {
        let result = WilsonResult {
            successes: 73,
            trials: 76,
            confidence_level: 0.95,
            proportion: 73.0 / 76.0,
            lower_bound: 0.25,
            upper_bound: 0.999_999_9,
        };
        assert_eq!(
            format!("{}", result),
            "73/76: proportion 0.960526, 95.0% CI [0.250000, 1.000000]"
        );
    }
}
