//! Boolean carve masks blending from a filled square to an inscribed circle

use crate::io::error::{GenerationError, Result};
use bitvec::prelude::*;
use std::fmt;

/// Square boolean stamp of odd side length
///
/// Cells are stored row-major in a bit vector; `true` marks cells the stamp
/// applies to. The centre cell sits at `((size - 1) / 2, (size - 1) / 2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    bits: BitVec,
    size: usize,
}

impl Kernel {
    /// Build the mask for a side length and circularity
    ///
    /// The radius is interpolated between the inscribed circle (`circularity`
    /// 1, tightest circle) and the circumscribed circle (`circularity` 0, full
    /// square). A cell is set when its centre lies within that radius.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernelSize` if `size` is zero or even
    pub fn build(size: usize, circularity: f64) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(GenerationError::InvalidKernelSize { size });
        }

        let center = (size - 1) as f64 / 2.0;
        let min_radius = center;
        let max_radius = center * std::f64::consts::SQRT_2;
        let radius = circularity.mul_add(min_radius, (1.0 - circularity) * max_radius);

        let mut bits = bitvec![0; size * size];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 - center;
                let dy = y as f64 - center;
                let distance = dx.mul_add(dx, dy * dy).sqrt();
                if distance <= radius {
                    bits.set(y * size + x, true);
                }
            }
        }

        Ok(Self { bits, size })
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Offset from the centre to the first row and column
    pub const fn radius(&self) -> i32 {
        ((self.size - 1) / 2) as i32
    }

    /// Whether the stamp applies at a kernel-local cell
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.bits.get(y * self.size + x).as_deref() == Some(&true)
    }

    /// Number of set cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Offsets `(dx, dy)` from the centre of every set cell
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size;
        let radius = self.radius();
        self.bits.iter_ones().map(move |index| {
            let x = (index % size) as i32;
            let y = (index / size) as i32;
            (x - radius, y - radius)
        })
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
