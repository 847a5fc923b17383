//! Spatial data structures for the generated map
//!
//! This module contains:
//! - Cell tags and their groupings
//! - Grid coordinates and walker moves
//! - Boolean carve kernels
//! - The map grid with stamping and area predicates

/// Cell tags, grouping predicates and external tile ids
pub mod block;
/// Boolean stamp masks
pub mod kernel;
/// Map grid and immutable snapshots
pub mod map;
/// Grid coordinates and unit moves
pub mod position;

pub use block::BlockType;
pub use kernel::Kernel;
pub use map::{Map, MapSnapshot};
pub use position::{Direction, Position};
