//! Generation run: owns the map and drives the walker until the finishing pass

use crate::algorithm::finishing::{FinishingReport, finish_map};
use crate::algorithm::kernel_generator::KernelGenerator;
use crate::algorithm::random::RandomSource;
use crate::algorithm::walker::{Walker, WalkerParams, WaypointProgress};
use crate::io::configuration::{GIF_FRAME_DELAY_MS, GenerationConfig};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{BlockType, Map, MapSnapshot};
use log::{info, warn};
use std::path::Path;

/// Summary of a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Walker steps taken
    pub iterations: usize,
    /// Whether the last waypoint was reached before the iteration cap
    pub reached: bool,
    /// Counts from the finishing pass
    pub finishing: FinishingReport,
}

/// A single generation run
///
/// Everything a run touches is owned here and threaded through explicitly;
/// there is no shared state between runs.
pub struct MapGenerator {
    config: GenerationConfig,
    params: WalkerParams,
    map: Map,
    rng: RandomSource,
    kernels: KernelGenerator,
    walker: Walker,
    iteration: usize,
    finished: bool,
    visualization: Option<VisualizationCapture>,
}

impl MapGenerator {
    /// Validate the configuration and set up a fresh run
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found by
    /// [`GenerationConfig::validate`]
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;

        let kernels = KernelGenerator::new(
            config.kernel_config.clone(),
            config.kernel_mutation(),
            config.init_kernel_size,
            config.init_kernel_circularity,
        )?;
        let walker = Walker::new(config.init_position, config.waypoints.clone())?;

        Ok(Self {
            params: config.walker_params(),
            map: Map::new(config.map_width, config.map_height),
            rng: RandomSource::new(config.seed),
            kernels,
            walker,
            iteration: 0,
            finished: false,
            visualization: None,
            config,
        })
    }

    /// Configuration of this run
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Current map
    pub const fn map(&self) -> &Map {
        &self.map
    }

    /// Point-in-time copy of the map for renderers
    pub fn snapshot(&self) -> MapSnapshot {
        self.map.snapshot()
    }

    /// Walker state
    pub const fn walker(&self) -> &Walker {
        &self.walker
    }

    /// Current kernels
    pub const fn kernels(&self) -> &KernelGenerator {
        &self.kernels
    }

    /// Walker steps taken so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Whether the finishing pass has run
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record a snapshot every `interval` steps for GIF export
    pub fn enable_visualization(&mut self, interval: usize) {
        let mut capture = VisualizationCapture::new(interval);
        capture.record_final(&self.map);
        self.visualization = Some(capture);
    }

    /// Export the recorded snapshots as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &Path, scale: u32) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(invalid_parameter(
                    "visualization",
                    &"disabled",
                    &"visualization was not enabled for this run",
                ))
            },
            |capture| capture.export_gif(output_path, GIF_FRAME_DELAY_MS, scale),
        )
    }

    /// Advance the walker by one step and carve around its new position
    ///
    /// The outer kernel marks a freeze margin over solid rock, then the inner
    /// kernel clears the cells to empty space. Returns whether the walker
    /// still has waypoints left.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` once the walker has reached its last
    /// waypoint or the finishing pass has run, or any selection or kernel
    /// error raised during the step
    pub fn step(&mut self) -> Result<bool> {
        if self.finished {
            return Err(GenerationError::AlreadyFinished {
                iteration: self.iteration,
            });
        }

        let direction = self
            .walker
            .next_move(&mut self.rng, &mut self.kernels, &self.params)?;
        let progress = self
            .walker
            .advance(direction, self.params.waypoint_reached_distance)?;
        self.iteration += 1;

        let position = self.walker.position();
        self.map.stamp_outer(
            position,
            self.kernels.outer(),
            BlockType::MarginFreeze,
            BlockType::Hookable,
        );
        self.map
            .stamp_inner(position, self.kernels.inner(), BlockType::Empty);

        if let Some(ref mut capture) = self.visualization {
            capture.record_step(self.iteration, &self.map);
        }

        Ok(progress != WaypointProgress::Finished)
    }

    /// Run the finishing pass over the carved map
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` if the pass has already run
    pub fn finish(&mut self) -> Result<FinishingReport> {
        if self.finished {
            return Err(GenerationError::AlreadyFinished {
                iteration: self.iteration,
            });
        }

        let report = finish_map(
            &mut self.map,
            &mut self.rng,
            self.walker.path(),
            &self.config.finishing(),
        );
        self.finished = true;

        if let Some(ref mut capture) = self.visualization {
            capture.record_final(&self.map);
        }
        Ok(report)
    }

    /// Step until the last waypoint or the iteration cap, then finish the map
    ///
    /// `on_step` is called after every step with the iteration count.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` if the run already completed, or any error
    /// raised by a step
    pub fn run_with(&mut self, mut on_step: impl FnMut(usize)) -> Result<GenerationOutcome> {
        if self.finished {
            return Err(GenerationError::AlreadyFinished {
                iteration: self.iteration,
            });
        }

        let mut reached = self.walker.is_finished();
        while !reached && self.iteration < self.config.max_iterations {
            reached = !self.step()?;
            on_step(self.iteration);
        }

        if !reached {
            warn!(
                "'{}' hit the iteration cap of {} at waypoint {}",
                self.config.name,
                self.config.max_iterations,
                self.walker.waypoint_index()
            );
        }

        let finishing = self.finish()?;
        info!(
            "'{}' generated in {} steps (seed {})",
            self.config.name, self.iteration, self.config.seed
        );

        Ok(GenerationOutcome {
            iterations: self.iteration,
            reached,
            finishing,
        })
    }

    /// Step until the last waypoint or the iteration cap, then finish the map
    ///
    /// # Errors
    ///
    /// See [`Self::run_with`]
    pub fn run(&mut self) -> Result<GenerationOutcome> {
        self.run_with(|_| {})
    }
}
