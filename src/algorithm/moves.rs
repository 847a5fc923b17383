//! Distance-biased move distribution for the walker
//!
//! Candidate moves are ranked by the distance they leave to the target and
//! weighted with a geometric distribution over that rank, so closer moves get
//! geometrically more mass. This is a local heuristic, not a path search.

use crate::algorithm::random::RandomSource;
use crate::io::error::{GenerationError, Result};
use crate::math::probability::{geometric_distribution, normalize, sequential_sum, sums_to_one};
use crate::spatial::{Direction, Position};

/// The four legal unit moves paired with normalised probabilities
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveArray {
    moves: [Direction; 4],
    probabilities: [f64; 4],
}

impl MoveArray {
    /// Candidate moves, sorted closest first
    pub const fn moves(&self) -> &[Direction; 4] {
        &self.moves
    }

    /// Probability of each move in [`Self::moves`] order
    pub const fn probabilities(&self) -> &[f64; 4] {
        &self.probabilities
    }

    /// Probability assigned to a move
    pub fn probability_of(&self, direction: Direction) -> f64 {
        self.moves
            .iter()
            .zip(self.probabilities)
            .find_map(|(&candidate, p)| (candidate == direction).then_some(p))
            .unwrap_or(0.0)
    }

    /// Sum of all probabilities
    pub fn sum(&self) -> f64 {
        sequential_sum(&self.probabilities)
    }

    /// Draw one move by roulette selection
    ///
    /// # Errors
    ///
    /// Returns `ProbabilitySum` if the distribution does not sum to one, or a
    /// selection error from the random source
    pub fn pick(&self, rng: &mut RandomSource) -> Result<Direction> {
        if !sums_to_one(&self.probabilities) {
            return Err(GenerationError::ProbabilitySum {
                table: "move probabilities".to_string(),
                sum: self.sum(),
            });
        }
        rng.roulette_select(&self.moves, &self.probabilities)
    }
}

/// Rank moves by resulting distance to `target` and weight them geometrically
///
/// `best_move_probability` is the geometric parameter `p`; the closest move
/// receives `p`, the next `(1 - p) * p`, and so on, before normalisation.
/// Ties keep [`Direction::ALL`] order.
pub fn distance_probabilities(
    walker: Position,
    target: Position,
    best_move_probability: f64,
) -> MoveArray {
    let mut ranked: Vec<(Direction, f64)> = Direction::ALL
        .iter()
        .map(|&direction| (direction, (walker + direction).euclidean_distance(target)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut moves = Direction::ALL;
    let mut probabilities = [0.0; 4];
    for (rank, ((direction, _), (slot, probability))) in ranked
        .iter()
        .zip(moves.iter_mut().zip(probabilities.iter_mut()))
        .enumerate()
    {
        *slot = *direction;
        *probability = geometric_distribution(rank as u32 + 1, best_move_probability);
    }
    normalize(&mut probabilities);

    MoveArray {
        moves,
        probabilities,
    }
}

/// The single move leaving the smallest distance to `target`
///
/// Ties keep [`Direction::ALL`] order.
pub fn best_move(walker: Position, target: Position) -> Direction {
    Direction::ALL
        .iter()
        .copied()
        .min_by(|&a, &b| {
            (walker + a)
                .euclidean_distance(target)
                .total_cmp(&(walker + b).euclidean_distance(target))
        })
        .unwrap_or(Direction::Up)
}
