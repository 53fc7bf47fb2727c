//! Mathematical utilities for proportion statistics
//!
//! This module provides the normal distribution functions needed to turn a
//! confidence level into a critical value.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::{Error, Result};
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of the standard normal distribution
        ///
        /// Evaluated as `erfc(-x / √2) / 2`, which keeps full relative precision
        /// in the lower tail.
        pub fn cdf(x: f64) -> f64 {
            0.5 * erfc(-x / SQRT_2)
        }

        /// Inverse cumulative distribution function (quantile function) of the
        /// standard normal distribution
        ///
        /// Computed as `-√2 · erfc⁻¹(2p)`. `statrs` evaluates `erfc⁻¹` with the
        /// Boost rational approximations, which are accurate to roughly machine
        /// precision over the whole open unit interval.
        ///
        /// Returns `-∞` for `p <= 0`, `+∞` for `p >= 1` and NaN for NaN.
        pub fn ppf(p: f64) -> f64 {
            if p.is_nan() {
                return f64::NAN;
            }
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for ppf (percent point function) that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

        /// Inverse survival function: the point with upper-tail mass `q`
        ///
        /// Computed as `√2 · erfc⁻¹(2q)` straight from the tail mass. Unlike
        /// `ppf(1 - q)` this never rounds a tiny `q` away, so it stays finite
        /// for every `q` in (0, 1).
        ///
        /// Returns `+∞` for `q <= 0`, `-∞` for `q >= 1` and NaN for NaN.
        pub fn isf(q: f64) -> f64 {
            if q.is_nan() {
                return f64::NAN;
            }
            if q <= 0.0 {
                return f64::INFINITY;
            }
            if q >= 1.0 {
                return f64::NEG_INFINITY;
            }
            SQRT_2 * erfc_inv(2.0 * q)
        }

        /// Two-tailed critical value for a confidence level
        ///
        /// Returns `λ = Φ⁻¹((1 + level) / 2)`, the point leaving `(1 - level) / 2`
        /// of the mass in the upper tail. Evaluated from the tail mass, so levels
        /// as close to 1 as `f64` allows still give a finite value.
        ///
        /// # Errors
        /// [`Error::InvalidArgument`] if `level` is not strictly inside (0, 1).
        pub fn two_sided_critical_value(level: f64) -> Result<f64> {
            if !(level > 0.0 && level < 1.0) {
                return Err(Error::invalid_confidence_level(level));
            }
            Ok(isf(0.5 * (1.0 - level)))
        }

    }
}
