//! Fixed-size tile grid with kernel stamping and area predicates
//!
//! Cells are stored row-major in an `Array2` indexed `[y, x]`. Every write is
//! bounds-checked; writes outside the map are dropped so stamps near the
//! border apply only their in-bounds part.

use crate::spatial::{BlockType, Kernel, Position};
use ndarray::Array2;

/// The map being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    grid: Array2<BlockType>,
    width: usize,
    height: usize,
}

impl Map {
    /// Create a map filled with the default tag
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, BlockType::default())
    }

    /// Create a map filled with the given tag
    pub fn new_filled(width: usize, height: usize, fill: BlockType) -> Self {
        Self {
            grid: Array2::from_elem((height, width), fill),
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether a coordinate lies inside the map
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Whether an inclusive rectangle lies entirely inside the map
    pub const fn rect_in_bounds(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.in_bounds(x1, y1) && self.in_bounds(x2, y2)
    }

    /// Tag at a coordinate, `None` outside the map
    pub fn get(&self, x: i32, y: i32) -> Option<BlockType> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.grid.get([y as usize, x as usize]).copied()
    }

    /// Tag at a position, `None` outside the map
    pub fn get_at(&self, position: Position) -> Option<BlockType> {
        self.get(position.x, position.y)
    }

    /// Overwrite a single cell, returning whether it was inside the map
    pub fn set(&mut self, x: i32, y: i32, block: BlockType) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.grid
            .get_mut([y as usize, x as usize])
            .map(|cell| *cell = block)
            .is_some()
    }

    /// Stamp a kernel centred on `position`, overwriting every covered cell
    pub fn stamp_inner(&mut self, position: Position, kernel: &Kernel, block: BlockType) {
        for (dx, dy) in kernel.offsets() {
            self.set(position.x + dx, position.y + dy, block);
        }
    }

    /// Stamp a kernel centred on `position`, overwriting only cells tagged `guard`
    pub fn stamp_outer(
        &mut self,
        position: Position,
        kernel: &Kernel,
        block: BlockType,
        guard: BlockType,
    ) {
        for (dx, dy) in kernel.offsets() {
            let x = position.x + dx;
            let y = position.y + dy;
            if self.get(x, y) == Some(guard) {
                self.set(x, y, block);
            }
        }
    }

    /// Whether any in-bounds cell of the inclusive rectangle satisfies `predicate`
    pub fn area_matches(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        predicate: impl Fn(BlockType) -> bool,
    ) -> bool {
        let x_start = x1.max(0);
        let y_start = y1.max(0);
        let x_end = x2.min(self.width as i32 - 1);
        let y_end = y2.min(self.height as i32 - 1);

        for y in y_start..=y_end {
            for x in x_start..=x_end {
                if self.get(x, y).is_some_and(&predicate) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the inclusive rectangle contains at least one cell of `block`
    pub fn area_has_type(&self, x1: i32, y1: i32, x2: i32, y2: i32, block: BlockType) -> bool {
        self.area_matches(x1, y1, x2, y2, |cell| cell == block)
    }

    /// Whether the inclusive rectangle contains any non-empty cell
    pub fn area_has_any(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.area_matches(x1, y1, x2, y2, BlockType::is_any)
    }

    /// Number of cells holding `block`
    pub fn count(&self, block: BlockType) -> usize {
        self.grid.iter().filter(|&&cell| cell == block).count()
    }

    /// Read-only view of the underlying row-major grid
    pub const fn cells(&self) -> &Array2<BlockType> {
        &self.grid
    }

    /// Point-in-time copy handed to renderers and exporters
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            grid: self.grid.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Immutable copy of a map taken between steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSnapshot {
    grid: Array2<BlockType>,
    width: usize,
    height: usize,
}

impl MapSnapshot {
    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tag at a cell, `None` outside the snapshot
    pub fn cell_at(&self, x: usize, y: usize) -> Option<BlockType> {
        self.grid.get([y, x]).copied()
    }

    /// Iterate cells as `(x, y, tag)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, BlockType)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((y, x), &block)| (x, y, block))
    }
}

impl From<&Map> for MapSnapshot {
    fn from(map: &Map) -> Self {
        map.snapshot()
    }
}
