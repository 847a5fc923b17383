//! Seeded random source for reproducible stochastic choices
//!
//! Every draw made during a run goes through one `RandomSource`, so a map is a
//! pure function of its seed, its configuration and the order of draws.

use crate::io::error::{GenerationError, Result};
use crate::math::probability::{approx_equal, sequential_sum};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic random number source
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Returns true with probability `probability`
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.next_unit() <= probability
    }

    /// Fitness-proportionate selection over options whose weights sum to one
    ///
    /// Walks the options accumulating weight and returns the first one whose
    /// running sum reaches the draw. The draw is scaled by the accumulated
    /// total so a table accepted within tolerance always selects an option.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `options` and `weights` differ in length
    /// - the weights do not sum to one within tolerance
    /// - no option is reached (only possible with NaN weights)
    pub fn roulette_select<T: Copy>(&mut self, options: &[T], weights: &[f64]) -> Result<T> {
        if options.len() != weights.len() {
            return Err(GenerationError::LengthMismatch {
                options: options.len(),
                weights: weights.len(),
            });
        }

        let total = sequential_sum(weights);
        if !approx_equal(total, 1.0) {
            return Err(GenerationError::ProbabilitySum {
                table: "roulette weights".to_string(),
                sum: total,
            });
        }

        let draw = self.next_unit() * total;
        let mut running = 0.0;
        for (option, &weight) in options.iter().zip(weights) {
            running += weight;
            if running >= draw {
                return Ok(*option);
            }
        }

        Err(GenerationError::NoOptionSelected {
            options: options.len(),
            draw,
        })
    }

    /// Uniform choice from a fixed list
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `options` is empty
    pub fn random_choice<T: Copy>(&mut self, options: &[T]) -> Result<T> {
        if options.is_empty() {
            return Err(crate::io::error::invalid_parameter(
                "options",
                &"[]",
                &"random choice needs at least one option",
            ));
        }
        let index = self.rng.random_range(0..options.len());
        options
            .get(index)
            .copied()
            .ok_or(GenerationError::NoOptionSelected {
                options: options.len(),
                draw: index as f64,
            })
    }
}
