//! Inner and outer carve kernels with stochastic shape mutation
//!
//! The inner kernel clears cells to empty space; the outer kernel marks a
//! freeze margin over solid cells around it. Sizes and circularities are drawn
//! from a static probability table that is validated once at construction.

use crate::algorithm::random::RandomSource;
use crate::io::error::{GenerationError, Result};
use crate::math::probability::{sequential_sum, sums_to_one};
use crate::spatial::Kernel;
use log::debug;
use serde::{Deserialize, Serialize};

/// Selection probability of a kernel size and its circularity table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelSizeConfig {
    /// Odd side length
    pub size: usize,
    /// Probability of selecting this size when the size mutates
    pub size_probability: f64,
    /// Circularity options available at this size
    pub circularity_probabilities: Vec<KernelCircularityConfig>,
}

/// One circularity option with its selection probability
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelCircularityConfig {
    /// Blend between square (0) and inscribed circle (1)
    pub circularity: f64,
    /// Probability of selecting this circularity
    pub probability: f64,
}

/// Per-step mutation probabilities
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelMutation {
    /// Chance that the size is redrawn
    pub size_change_probability: f64,
    /// Chance that the circularity is redrawn
    pub circularity_change_probability: f64,
    /// Chance that a redrawn outer size gets a margin of two
    pub outer_size_margin_probability: f64,
    /// Chance that a redrawn outer circularity follows the inner one
    pub outer_circularity_probability: f64,
}

/// Current shape parameters of both kernels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelShape {
    /// Inner side length
    pub size: usize,
    /// Inner circularity
    pub circularity: f64,
    /// Outer side length
    pub outer_size: usize,
    /// Outer circularity
    pub outer_circularity: f64,
}

/// Owns both kernels and regenerates them when their shape changes
#[derive(Clone, Debug)]
pub struct KernelGenerator {
    table: Vec<KernelSizeConfig>,
    mutation: KernelMutation,
    shape: KernelShape,
    inner: Kernel,
    outer: Kernel,
}

impl KernelGenerator {
    /// Validate the table and build the initial kernels
    ///
    /// Both kernels start with the given size and circularity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the size probabilities or any circularity table do not sum to one
    /// - a table size or the initial size is even or zero
    pub fn new(
        table: Vec<KernelSizeConfig>,
        mutation: KernelMutation,
        size: usize,
        circularity: f64,
    ) -> Result<Self> {
        validate_table(&table)?;

        let shape = KernelShape {
            size,
            circularity,
            outer_size: size,
            outer_circularity: circularity,
        };
        let inner = Kernel::build(size, circularity)?;
        let outer = Kernel::build(size, circularity)?;

        Ok(Self {
            table,
            mutation,
            shape,
            inner,
            outer,
        })
    }

    /// Kernel that clears cells
    pub const fn inner(&self) -> &Kernel {
        &self.inner
    }

    /// Kernel that marks the freeze margin
    pub const fn outer(&self) -> &Kernel {
        &self.outer
    }

    /// Current shape parameters
    pub const fn shape(&self) -> KernelShape {
        self.shape
    }

    /// Randomly redraw size and circularity
    ///
    /// Returns whether either kernel changed.
    ///
    /// # Errors
    ///
    /// Returns `MissingKernelSize` if the circularity is redrawn while the
    /// current size has no table entry, which happens after a forced shape.
    pub fn mutate(&mut self, rng: &mut RandomSource) -> Result<bool> {
        let update_size = rng.random_bool(self.mutation.size_change_probability);
        let update_circularity = rng.random_bool(self.mutation.circularity_change_probability);

        if update_size {
            let sizes: Vec<usize> = self.table.iter().map(|entry| entry.size).collect();
            let weights: Vec<f64> = self
                .table
                .iter()
                .map(|entry| entry.size_probability)
                .collect();
            self.shape.size = rng.roulette_select(&sizes, &weights)?;
            self.shape.outer_size = if rng.random_bool(self.mutation.outer_size_margin_probability)
            {
                self.shape.size + 2
            } else {
                self.shape.size
            };
        }

        if update_circularity {
            let size = self.shape.size;
            let entry = self
                .table
                .iter()
                .find(|entry| entry.size == size)
                .ok_or(GenerationError::MissingKernelSize { size })?;
            let circularities: Vec<f64> = entry
                .circularity_probabilities
                .iter()
                .map(|option| option.circularity)
                .collect();
            let weights: Vec<f64> = entry
                .circularity_probabilities
                .iter()
                .map(|option| option.probability)
                .collect();
            self.shape.circularity = rng.roulette_select(&circularities, &weights)?;
            self.shape.outer_circularity =
                if rng.random_bool(self.mutation.outer_circularity_probability) {
                    self.shape.circularity
                } else {
                    0.0
                };
        }

        let changed = update_size || update_circularity;
        if changed {
            self.rebuild()?;
        }
        Ok(changed)
    }

    /// Override both kernels, bypassing the probability table
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernelSize` if either size is even or zero
    pub fn force_shape(
        &mut self,
        size: usize,
        circularity: f64,
        outer_size: usize,
        outer_circularity: f64,
    ) -> Result<()> {
        self.shape = KernelShape {
            size,
            circularity,
            outer_size,
            outer_circularity,
        };
        self.rebuild()
    }

    fn rebuild(&mut self) -> Result<()> {
        self.inner = Kernel::build(self.shape.size, self.shape.circularity)?;
        self.outer = Kernel::build(self.shape.outer_size, self.shape.outer_circularity)?;
        debug!(
            "kernel shape: size {} circularity {:.2}, outer size {} circularity {:.2}",
            self.shape.size,
            self.shape.circularity,
            self.shape.outer_size,
            self.shape.outer_circularity
        );
        Ok(())
    }
}

/// Check that a kernel table is a valid pair of nested distributions
///
/// # Errors
///
/// Returns `ProbabilitySum` for the first table whose probabilities do not
/// sum to one, or `InvalidKernelSize` for an even or zero size.
pub fn validate_table(table: &[KernelSizeConfig]) -> Result<()> {
    let size_weights: Vec<f64> = table.iter().map(|entry| entry.size_probability).collect();
    if !sums_to_one(&size_weights) {
        return Err(GenerationError::ProbabilitySum {
            table: "kernel size probabilities".to_string(),
            sum: sequential_sum(&size_weights),
        });
    }

    for entry in table {
        if entry.size == 0 || entry.size % 2 == 0 {
            return Err(GenerationError::InvalidKernelSize { size: entry.size });
        }

        let weights: Vec<f64> = entry
            .circularity_probabilities
            .iter()
            .map(|option| option.probability)
            .collect();
        if !sums_to_one(&weights) {
            return Err(GenerationError::ProbabilitySum {
                table: format!("circularity probabilities for size {}", entry.size),
                sum: sequential_sum(&weights),
            });
        }
    }

    Ok(())
}
