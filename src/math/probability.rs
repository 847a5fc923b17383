//! Probability helpers shared by roulette selection, kernel tables and the move selector

use num_traits::Float;

/// Tolerance used when checking that a probability table sums to one
pub const PROBABILITY_TOLERANCE: f64 = 1e-5;

/// Geometric distribution probability mass `P(X = k) = (1 - p)^(k - 1) * p`
///
/// `k` is 1-based: rank 1 receives `p`, rank 2 receives `(1 - p) * p`, and so on.
pub fn geometric_distribution<T: Float>(k: u32, p: T) -> T {
    if k == 0 {
        return T::zero();
    }
    (T::one() - p).powi(k as i32 - 1) * p
}

/// Check two floats for equality within [`PROBABILITY_TOLERANCE`]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= PROBABILITY_TOLERANCE
}

/// Accumulate weights left to right
///
/// Roulette selection relies on the same accumulation order so the final
/// running sum matches this total bit for bit.
pub fn sequential_sum(weights: &[f64]) -> f64 {
    weights.iter().fold(0.0, |acc, &w| acc + w)
}

/// Whether the weights form a probability distribution within tolerance
pub fn sums_to_one(weights: &[f64]) -> bool {
    approx_equal(sequential_sum(weights), 1.0)
}

/// Scale weights in place so they sum to one
///
/// Leaves the slice untouched when the sum is not strictly positive.
pub fn normalize(weights: &mut [f64]) {
    let sum = sequential_sum(weights);
    if sum <= 0.0 {
        return;
    }
    for weight in weights.iter_mut() {
        *weight /= sum;
    }
}
