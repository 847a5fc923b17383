//! Two-pass raster distance transforms over a scalar field
//!
//! The field holds `0.0` at seed cells and `f64::INFINITY` elsewhere. A forward
//! pass (top to bottom, left to right) relaxes every cell against the causal
//! half of a propagation kernel, then a backward pass does the same against
//! the other half. Infinity plus any step cost stays infinity.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Metric approximated by the transform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceTransformMethod {
    /// Adjacent steps cost 1, diagonal steps 2
    Cityblock,
    /// Adjacent steps cost 1, diagonal steps 4/3
    #[default]
    ChamferScaled,
    /// Adjacent steps cost 1, diagonal steps 1.41
    QuasiEuclidean,
    /// True Euclidean cost for every offset in a 9x9 window
    Euclidean,
}

/// Half-width of the window used by [`DistanceTransformMethod::Euclidean`]
pub const EUCLIDEAN_WINDOW_RADIUS: i32 = 4;

/// A single propagation step: column offset, row offset, cost
type Step = (i32, i32, f64);

impl DistanceTransformMethod {
    /// Every propagation step of this metric, both halves
    fn steps(self) -> Vec<Step> {
        let (adjacent, diagonal) = match self {
            Self::Cityblock => (1.0, 2.0),
            Self::ChamferScaled => (1.0, 4.0 / 3.0),
            Self::QuasiEuclidean => (1.0, 1.41),
            Self::Euclidean => return euclidean_window(EUCLIDEAN_WINDOW_RADIUS),
        };

        let mut steps = Vec::with_capacity(8);
        for dy in -1..=1_i32 {
            for dx in -1..=1_i32 {
                match (dx.abs(), dy.abs()) {
                    (0, 0) => {}
                    (1, 1) => steps.push((dx, dy, diagonal)),
                    _ => steps.push((dx, dy, adjacent)),
                }
            }
        }
        steps
    }
}

fn euclidean_window(radius: i32) -> Vec<Step> {
    let mut steps = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            steps.push((dx, dy, f64::from(dx).hypot(f64::from(dy))));
        }
    }
    steps
}

/// Offsets already visited when scanning forward in raster order
const fn is_causal(dx: i32, dy: i32) -> bool {
    dy < 0 || (dy == 0 && dx < 0)
}

/// Seed a field from a per-cell predicate: `0.0` where it holds, infinity elsewhere
pub fn seed_field(
    width: usize,
    height: usize,
    is_seed: impl Fn(usize, usize) -> bool,
) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(y, x)| {
        if is_seed(x, y) { 0.0 } else { f64::INFINITY }
    })
}

/// Run the transform in place on a seeded field indexed `[y, x]`
pub fn distance_transform(field: &mut Array2<f64>, method: DistanceTransformMethod) {
    let (height, width) = field.dim();
    let (forward, backward): (Vec<Step>, Vec<Step>) = method
        .steps()
        .into_iter()
        .partition(|&(dx, dy, _)| is_causal(dx, dy));

    for y in 0..height {
        for x in 0..width {
            relax(field, x, y, &forward);
        }
    }

    for y in (0..height).rev() {
        for x in (0..width).rev() {
            relax(field, x, y, &backward);
        }
    }
}

fn relax(field: &mut Array2<f64>, x: usize, y: usize, steps: &[Step]) {
    let current = match field.get([y, x]) {
        Some(&value) if value > 0.0 => value,
        _ => return,
    };

    let (height, width) = field.dim();
    let mut best = current;
    for &(dx, dy, cost) in steps {
        let nx = x as i64 + i64::from(dx);
        let ny = y as i64 + i64::from(dy);
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        if let Some(&neighbor) = field.get([ny as usize, nx as usize]) {
            let candidate = neighbor + cost;
            if candidate < best {
                best = candidate;
            }
        }
    }

    if best < current {
        if let Some(cell) = field.get_mut([y, x]) {
            *cell = best;
        }
    }
}
