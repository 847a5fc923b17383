//! Procedural platformer map generation with a biased random walk
//!
//! A single walker carves through solid rock towards an ordered list of
//! waypoints, stamping a mutating kernel at every step. Once the last waypoint
//! is reached a finishing pass fills space far from the path with walls,
//! lines the path with freeze, and adds start/finish rooms and platforms.

#![forbid(unsafe_code)]

/// Walker, kernels, move selection and the run executor
pub mod algorithm;
/// Configuration, errors, CLI and export
pub mod io;
/// Distance transforms and probability helpers
pub mod math;
/// Map grid, cell tags, kernels and coordinates
pub mod spatial;

pub use io::error::{GenerationError, Result};
