//! Generation constants and the JSON run configuration

use crate::algorithm::finishing::FinishingConfig;
use crate::algorithm::kernel_generator::{
    KernelCircularityConfig, KernelMutation, KernelSizeConfig, validate_table,
};
use crate::algorithm::walker::{TunnelConfig, WalkerParams};
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::math::distance::DistanceTransformMethod;
use crate::spatial::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum walker steps before the walk is cut short
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Default path-index spacing between two platforms
pub const DEFAULT_PLATFORM_MIN_DISTANCE: usize = 200;

// Finishing geometry
/// Half-size of the start and finish room interiors
pub const ROOM_RADIUS: i32 = 3;
/// Rows above a platform candidate that must be clear
pub const PLATFORM_SAFE_TOP: i32 = 4;
/// Columns right of a platform candidate that must be clear
pub const PLATFORM_SAFE_RIGHT: i32 = 4;
/// Rows below a platform candidate that must be clear; the platform lands on the last one
pub const PLATFORM_SAFE_DOWN: i32 = 2;
/// Columns left of a platform candidate that must be clear
pub const PLATFORM_SAFE_LEFT: i32 = 4;
/// Platforms span this many cells either side of their centre
pub const PLATFORM_HALF_WIDTH: i32 = 2;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Default directory for generated files
pub const DEFAULT_OUTPUT_DIR: &str = "generated";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Walker steps between two captured GIF frames
pub const VISUALIZATION_CAPTURE_INTERVAL: usize = 25;
/// Pixels per map cell in exported images
pub const IMAGE_SCALE: u32 = 4;

/// Every parameter of a generation run
///
/// Keys are camelCase in JSON; missing keys take their [`Default`] value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Name used for output files
    pub name: String,
    /// Seed of the run's random source
    pub seed: u64,
    /// Map columns
    pub map_width: usize,
    /// Map rows
    pub map_height: usize,
    /// Walker steps after which the walk stops even if unfinished
    pub max_iterations: usize,
    /// Walker start
    pub init_position: Position,
    /// Ordered targets of the walk
    pub waypoints: Vec<Position>,
    /// Manhattan distance at which a waypoint counts as reached
    pub waypoint_reached_distance: u32,
    /// Geometric parameter of the move distribution
    pub best_move_probability: f64,
    /// Initial side length of both kernels
    pub init_kernel_size: usize,
    /// Initial circularity of both kernels
    pub init_kernel_circularity: f64,
    /// Chance per mutation that the kernel size is redrawn
    #[serde(rename = "kernelSizeChangeProb")]
    pub kernel_size_change_probability: f64,
    /// Chance per mutation that the kernel circularity is redrawn
    #[serde(rename = "kernelCircularityChangeProb")]
    pub kernel_circularity_change_probability: f64,
    /// Chance that a redrawn outer size gets a margin of two
    #[serde(rename = "kernelOuterSizeMarginProb")]
    pub kernel_outer_size_margin_probability: f64,
    /// Chance that a redrawn outer circularity follows the inner one
    #[serde(rename = "kernelOuterCircularityProb")]
    pub kernel_outer_circularity_probability: f64,
    /// Size and circularity probability tables
    pub kernel_config: Vec<KernelSizeConfig>,
    /// Whether tunnels can start
    pub enable_tunnel_mode: bool,
    /// Chance per goal-seeking step of starting a tunnel
    pub tunnel_probability: f64,
    /// Tunnel lengths sampled uniformly
    pub tunnel_lengths: Vec<usize>,
    /// Tunnel widths sampled uniformly
    pub tunnel_widths: Vec<usize>,
    /// Metric of the obstacle distance transform
    pub distance_transform_method: DistanceTransformMethod,
    /// Distance from solid cells at which open cells become walls
    pub distance_threshold: f64,
    /// Chance that an open cell seeds the distance transform
    pub pre_distance_noise: f64,
    /// Spacing of an extra seed lattice, `0` to disable
    pub grid_distance: usize,
    /// Whether platforms are placed along the path
    pub generate_platforms: bool,
    /// Path-index spacing between two platforms
    pub platform_min_distance: usize,
    /// Half-size of the start and finish room interiors
    pub room_radius: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let size = 100;
        let margin = 5;
        let far = size as i32 - 1 - margin;

        Self {
            name: "default".to_string(),
            seed: DEFAULT_SEED,
            map_width: size,
            map_height: size,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            init_position: Position::new(margin, margin),
            waypoints: vec![
                Position::new(far, margin),
                Position::new(far, far),
                Position::new(margin, far),
                Position::new(size as i32 / 2, size as i32 / 2),
            ],
            waypoint_reached_distance: 3,
            best_move_probability: 0.5,
            init_kernel_size: 3,
            init_kernel_circularity: 0.0,
            kernel_size_change_probability: 0.1,
            kernel_circularity_change_probability: 0.2,
            kernel_outer_size_margin_probability: 0.5,
            kernel_outer_circularity_probability: 0.5,
            kernel_config: default_kernel_table(),
            enable_tunnel_mode: true,
            tunnel_probability: 0.01,
            tunnel_lengths: vec![5, 10, 15],
            tunnel_widths: vec![3, 5],
            distance_transform_method: DistanceTransformMethod::default(),
            distance_threshold: 6.0,
            pre_distance_noise: 0.0,
            grid_distance: 0,
            generate_platforms: true,
            platform_min_distance: DEFAULT_PLATFORM_MIN_DISTANCE,
            room_radius: ROOM_RADIUS,
        }
    }
}

/// Kernel sizes 1, 3, 5 and 7 with a mix of square and round shapes
fn default_kernel_table() -> Vec<KernelSizeConfig> {
    let circularities = |options: &[(f64, f64)]| -> Vec<KernelCircularityConfig> {
        options
            .iter()
            .map(|&(circularity, probability)| KernelCircularityConfig {
                circularity,
                probability,
            })
            .collect()
    };

    vec![
        KernelSizeConfig {
            size: 1,
            size_probability: 0.1,
            circularity_probabilities: circularities(&[(0.0, 1.0)]),
        },
        KernelSizeConfig {
            size: 3,
            size_probability: 0.4,
            circularity_probabilities: circularities(&[(0.0, 0.5), (1.0, 0.5)]),
        },
        KernelSizeConfig {
            size: 5,
            size_probability: 0.3,
            circularity_probabilities: circularities(&[(0.0, 0.3), (0.5, 0.4), (1.0, 0.3)]),
        },
        KernelSizeConfig {
            size: 7,
            size_probability: 0.2,
            circularity_probabilities: circularities(&[(0.5, 0.5), (1.0, 0.5)]),
        },
    ]
}

impl GenerationConfig {
    /// Read a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(file_system_error(path, "read config"))?;
        serde_json::from_str(&text).map_err(|source| GenerationError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the configuration as pretty-printed JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file system operation fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let text =
            serde_json::to_string_pretty(self).map_err(|source| GenerationError::Serialization {
                operation: "generation config",
                source,
            })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
        }
        std::fs::write(path, text).map_err(file_system_error(path, "write config"))
    }

    /// Check every parameter before a run starts
    ///
    /// # Errors
    ///
    /// Returns the first problem found:
    /// - `InvalidParameter` for out-of-range values, empty waypoints or empty tunnel sets
    /// - `ProbabilitySum` or `InvalidKernelSize` for a malformed kernel table
    /// - `MissingKernelSize` if the initial size or a tunnel width has no table entry
    pub fn validate(&self) -> Result<()> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(invalid_parameter(
                "mapWidth/mapHeight",
                &format!("{}x{}", self.map_width, self.map_height),
                &"map dimensions must be positive",
            ));
        }
        if i32::try_from(self.map_width.max(self.map_height)).is_err() {
            return Err(invalid_parameter(
                "mapWidth/mapHeight",
                &format!("{}x{}", self.map_width, self.map_height),
                &"map dimensions must fit in a signed 32-bit coordinate",
            ));
        }
        if self.waypoints.is_empty() {
            return Err(invalid_parameter(
                "waypoints",
                &"[]",
                &"at least one waypoint is required",
            ));
        }
        let best = self.best_move_probability;
        if best.is_nan() || best <= 0.0 || best > 1.0 {
            return Err(invalid_parameter(
                "bestMoveProbability",
                &self.best_move_probability,
                &"must be in (0, 1]",
            ));
        }

        for (parameter, value) in [
            ("kernelSizeChangeProb", self.kernel_size_change_probability),
            (
                "kernelCircularityChangeProb",
                self.kernel_circularity_change_probability,
            ),
            (
                "kernelOuterSizeMarginProb",
                self.kernel_outer_size_margin_probability,
            ),
            (
                "kernelOuterCircularityProb",
                self.kernel_outer_circularity_probability,
            ),
            ("tunnelProbability", self.tunnel_probability),
            ("preDistanceNoise", self.pre_distance_noise),
            ("initKernelCircularity", self.init_kernel_circularity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(parameter, &value, &"must be in [0, 1]"));
            }
        }

        if self.distance_threshold.is_nan() || self.distance_threshold <= 0.0 {
            return Err(invalid_parameter(
                "distanceThreshold",
                &self.distance_threshold,
                &"must be positive",
            ));
        }
        if self.room_radius < 0 {
            return Err(invalid_parameter(
                "roomRadius",
                &self.room_radius,
                &"must not be negative",
            ));
        }

        validate_table(&self.kernel_config)?;
        self.require_table_size(self.init_kernel_size)?;

        if self.enable_tunnel_mode {
            if self.tunnel_lengths.is_empty() || self.tunnel_lengths.contains(&0) {
                return Err(invalid_parameter(
                    "tunnelLengths",
                    &format!("{:?}", self.tunnel_lengths),
                    &"must be a non-empty list of positive lengths",
                ));
            }
            if self.tunnel_widths.is_empty() {
                return Err(invalid_parameter(
                    "tunnelWidths",
                    &"[]",
                    &"must not be empty when tunnel mode is enabled",
                ));
            }
            // Circularity mutation after a tunnel looks up the forced width
            for &width in &self.tunnel_widths {
                self.require_table_size(width)?;
            }
        }

        Ok(())
    }

    fn require_table_size(&self, size: usize) -> Result<()> {
        if size == 0 || size % 2 == 0 {
            return Err(GenerationError::InvalidKernelSize { size });
        }
        if self.kernel_config.iter().any(|entry| entry.size == size) {
            Ok(())
        } else {
            Err(GenerationError::MissingKernelSize { size })
        }
    }

    /// Mutation probabilities handed to the kernel generator
    pub const fn kernel_mutation(&self) -> KernelMutation {
        KernelMutation {
            size_change_probability: self.kernel_size_change_probability,
            circularity_change_probability: self.kernel_circularity_change_probability,
            outer_size_margin_probability: self.kernel_outer_size_margin_probability,
            outer_circularity_probability: self.kernel_outer_circularity_probability,
        }
    }

    /// Per-step parameters handed to the walker
    pub fn walker_params(&self) -> WalkerParams {
        WalkerParams {
            best_move_probability: self.best_move_probability,
            waypoint_reached_distance: self.waypoint_reached_distance,
            tunnel: TunnelConfig {
                enabled: self.enable_tunnel_mode,
                probability: self.tunnel_probability,
                lengths: self.tunnel_lengths.clone(),
                widths: self.tunnel_widths.clone(),
            },
        }
    }

    /// Settings of the finishing pass
    pub const fn finishing(&self) -> FinishingConfig {
        FinishingConfig {
            method: self.distance_transform_method,
            distance_threshold: self.distance_threshold,
            pre_distance_noise: self.pre_distance_noise,
            grid_distance: self.grid_distance,
            generate_platforms: self.generate_platforms,
            platform_min_distance: self.platform_min_distance,
            room_radius: self.room_radius,
        }
    }
}
