//! Walker state machine: goal-seeking and tunnel modes over ordered waypoints

use crate::algorithm::kernel_generator::KernelGenerator;
use crate::algorithm::moves::{best_move, distance_probabilities};
use crate::algorithm::random::RandomSource;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Direction, Position};
use log::debug;

/// How the next move is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkerMode {
    /// Sample a move biased towards the current waypoint
    DistanceProbability,
    /// Repeat a locked direction with a forced square kernel
    Tunnel {
        /// Locked steps left before returning to goal-seeking
        remaining: usize,
        /// Direction repeated every step
        direction: Direction,
    },
}

/// Tunnel mode settings
#[derive(Clone, Debug, PartialEq)]
pub struct TunnelConfig {
    /// Whether tunnels can start at all
    pub enabled: bool,
    /// Chance per goal-seeking step of entering a tunnel
    pub probability: f64,
    /// Tunnel lengths sampled uniformly
    pub lengths: Vec<usize>,
    /// Odd tunnel widths sampled uniformly
    pub widths: Vec<usize>,
}

/// Parameters consumed on every step
#[derive(Clone, Debug, PartialEq)]
pub struct WalkerParams {
    /// Geometric parameter of the move distribution
    pub best_move_probability: f64,
    /// Manhattan distance at which a waypoint counts as reached
    pub waypoint_reached_distance: u32,
    /// Tunnel mode settings
    pub tunnel: TunnelConfig,
}

/// Result of checking the current waypoint after a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaypointProgress {
    /// Current waypoint not reached yet
    Pending,
    /// Reached a waypoint and moved on to the next one
    Advanced {
        /// Index of the new current waypoint
        index: usize,
    },
    /// Reached the last waypoint
    Finished,
}

/// The single carving agent
#[derive(Clone, Debug)]
pub struct Walker {
    position: Position,
    waypoints: Vec<Position>,
    waypoint_index: usize,
    mode: WalkerMode,
    finished: bool,
    path: Vec<Position>,
}

impl Walker {
    /// Place a walker at `start` heading for the first waypoint
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `waypoints` is empty
    pub fn new(start: Position, waypoints: Vec<Position>) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(invalid_parameter(
                "waypoints",
                &"[]",
                &"at least one waypoint is required",
            ));
        }

        Ok(Self {
            position: start,
            waypoints,
            waypoint_index: 0,
            mode: WalkerMode::DistanceProbability,
            finished: false,
            path: vec![start],
        })
    }

    /// Current position
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current mode
    pub const fn mode(&self) -> WalkerMode {
        self.mode
    }

    /// Index of the waypoint currently targeted
    pub const fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    /// Whether the last waypoint has been reached
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every position visited, starting with the initial one
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Waypoint currently targeted
    pub fn target(&self) -> Position {
        self.waypoints
            .get(self.waypoint_index)
            .or_else(|| self.waypoints.last())
            .copied()
            .unwrap_or(self.position)
    }

    /// Choose the next move according to the current mode
    ///
    /// Goal-seeking samples a move, mutates the kernels and may enter a
    /// tunnel. Tunnel mode counts down and returns its locked direction,
    /// mutating the kernels as soon as the countdown ends.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` after the last waypoint was reached, or any
    /// selection or kernel error raised while choosing
    pub fn next_move(
        &mut self,
        rng: &mut RandomSource,
        kernels: &mut KernelGenerator,
        params: &WalkerParams,
    ) -> Result<Direction> {
        if self.finished {
            return Err(GenerationError::AlreadyFinished {
                iteration: self.path.len() - 1,
            });
        }

        match self.mode {
            WalkerMode::DistanceProbability => self.seek_target(rng, kernels, params),
            WalkerMode::Tunnel {
                remaining,
                direction,
            } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    debug!("tunnel ended at {:?}", self.position);
                    self.mode = WalkerMode::DistanceProbability;
                    kernels.mutate(rng)?;
                } else {
                    self.mode = WalkerMode::Tunnel {
                        remaining,
                        direction,
                    };
                }
                Ok(direction)
            }
        }
    }

    fn seek_target(
        &mut self,
        rng: &mut RandomSource,
        kernels: &mut KernelGenerator,
        params: &WalkerParams,
    ) -> Result<Direction> {
        let target = self.target();
        let picked = distance_probabilities(self.position, target, params.best_move_probability)
            .pick(rng)?;
        kernels.mutate(rng)?;

        let tunnel = &params.tunnel;
        if tunnel.enabled && rng.random_bool(tunnel.probability) {
            let length = rng.random_choice(&tunnel.lengths)?;
            let width = rng.random_choice(&tunnel.widths)?;
            kernels.force_shape(width, 0.0, width, 0.0)?;
            let direction = best_move(self.position, target);
            debug!(
                "tunnel started at {:?}: {length} steps {direction:?}, width {width}",
                self.position
            );
            self.mode = WalkerMode::Tunnel {
                remaining: length,
                direction,
            };
        }

        Ok(picked)
    }

    /// Apply a move, record it in the path and check the current waypoint
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` after the last waypoint was reached
    pub fn advance(&mut self, direction: Direction, reached_distance: u32) -> Result<WaypointProgress> {
        if self.finished {
            return Err(GenerationError::AlreadyFinished {
                iteration: self.path.len() - 1,
            });
        }

        self.position = self.position + direction;
        self.path.push(self.position);
        Ok(self.check_waypoint(reached_distance))
    }

    fn check_waypoint(&mut self, reached_distance: u32) -> WaypointProgress {
        if self.position.manhattan_distance(self.target()) > reached_distance {
            return WaypointProgress::Pending;
        }

        if self.waypoint_index + 1 < self.waypoints.len() {
            self.waypoint_index += 1;
            debug!(
                "waypoint reached at {:?}, heading for waypoint {}",
                self.position, self.waypoint_index
            );
            WaypointProgress::Advanced {
                index: self.waypoint_index,
            }
        } else {
            self.finished = true;
            WaypointProgress::Finished
        }
    }
}
