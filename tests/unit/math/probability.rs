//! Tests for probability helpers

#[cfg(test)]
mod tests {
    use walkgen::math::probability::{
        PROBABILITY_TOLERANCE, approx_equal, geometric_distribution, normalize, sequential_sum,
        sums_to_one,
    };

    // Tests geometric masses for the first ranks
    // Verified by using k instead of k - 1 as the exponent
    #[test]
    fn test_geometric_distribution() {
        assert!((geometric_distribution(1, 0.5_f64) - 0.5).abs() < 1e-12);
        assert!((geometric_distribution(2, 0.5_f64) - 0.25).abs() < 1e-12);
        assert!((geometric_distribution(3, 0.25_f64) - 0.140_625).abs() < 1e-12);
        assert!(geometric_distribution(0, 0.5_f64).abs() < f64::EPSILON);
        assert!((geometric_distribution(2, 0.5_f32) - 0.25).abs() < 1e-6);
    }

    // Tests tolerance of the sum check
    #[test]
    fn test_sums_to_one() {
        assert!(sums_to_one(&[0.2, 0.3, 0.5]));
        assert!(sums_to_one(&[0.1; 10]));
        assert!(!sums_to_one(&[0.5, 0.49]));
        assert!(!sums_to_one(&[]));
        assert!(approx_equal(1.0, 1.0 + PROBABILITY_TOLERANCE / 2.0));
        assert!(!approx_equal(1.0, 1.0 + PROBABILITY_TOLERANCE * 2.0));
    }

    // Tests normalisation scales to one and ignores empty mass
    #[test]
    fn test_normalize() {
        let mut weights = [1.0, 3.0];
        normalize(&mut weights);
        let [first, second] = weights;
        assert!((first - 0.25).abs() < 1e-12);
        assert!((second - 0.75).abs() < 1e-12);
        assert!((sequential_sum(&weights) - 1.0).abs() < 1e-12);

        let mut zeros = [0.0, 0.0];
        normalize(&mut zeros);
        assert_eq!(zeros, [0.0, 0.0]);
    }
}
