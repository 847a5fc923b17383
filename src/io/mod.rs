/// Command-line interface and batch processing
pub mod cli;
/// Generation constants and run configuration
pub mod configuration;
/// Error types and result handling
pub mod error;
/// Tile-layer map directory export
pub mod export;
/// PNG rendering of map snapshots
pub mod image;
/// Progress bar management for batch runs
pub mod progress;
/// Snapshot capture and GIF export
pub mod visualization;
