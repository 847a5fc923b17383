//! Mathematical utilities for the generator

/// Raster distance transforms used to place obstacles
pub mod distance;
/// Probability distributions and weight normalisation
pub mod probability;
