//! Shared utilities for integration tests

pub use approx::assert_abs_diff_eq;

/// Tolerance used when comparing mirrored bounds
pub const SYMMETRY_EPSILON: f64 = 1e-9;

/// Confidence levels commonly reported alongside Wilson intervals
pub fn common_levels() -> Vec<f64> {
    // The last entry is the largest f64 below 1
    vec![0.5, 0.8, 0.9, 0.95, 0.99, 0.999, 0.999999, 1.0 - f64::EPSILON / 2.0]
}

/// Trial counts covering tiny samples through very large ones
pub fn trial_counts() -> Vec<u64> {
    vec![1, 2, 3, 5, 10, 76, 100, 1_000, 12_345, 1_000_000, 1_000_000_000]
}
