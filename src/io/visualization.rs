//! Snapshot capture and GIF generation for watching a map being carved

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::io::image::render_snapshot;
use crate::spatial::{Map, MapSnapshot};
use image::Frame;
use std::path::Path;

/// Records map snapshots between steps
///
/// A snapshot is taken every `interval` walker steps. The finished map is
/// recorded separately so the animation always ends on the final result.
pub struct VisualizationCapture {
    frames: Vec<MapSnapshot>,
    interval: usize,
}

impl VisualizationCapture {
    /// Capture every `interval` steps, at least every step
    pub fn new(interval: usize) -> Self {
        Self {
            frames: Vec::new(),
            interval: interval.max(1),
        }
    }

    /// Offer the map after a step; kept only on capture iterations
    pub fn record_step(&mut self, iteration: usize, map: &Map) {
        if iteration % self.interval == 0 {
            self.frames.push(map.snapshot());
        }
    }

    /// Always keep the given map as the next frame
    pub fn record_final(&mut self, map: &Map) {
        self.frames.push(map.snapshot());
    }

    /// Every captured frame in order
    pub fn frames(&self) -> &[MapSnapshot] {
        &self.frames
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Frames requested faster than viewers can show them are dropped so the
    /// apparent speed is kept: a 5 ms delay against a 50 ms viewer minimum
    /// keeps every 10th frame. The last frame is always shown and held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32, scale: u32) -> Result<()> {
        let Some(last) = self.frames.last() else {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"no frames captured for visualization",
            ));
        };

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let last_index = self.frames.len() - 1;
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .filter(|&(index, _)| index % skip_factor == 0 && index != last_index)
            .map(|(_, snapshot)| to_frame(snapshot, scale, effective_delay_ms))
            .collect();

        // Final frame displays longer for better visibility
        frames.push(to_frame(last, scale, effective_delay_ms * 25));

        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)
                .map_err(file_system_error(parent, "create directory"))?;
        }

        let file =
            std::fs::File::create(output_path).map_err(file_system_error(output_path, "create file"))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })
    }
}

fn to_frame(snapshot: &MapSnapshot, scale: u32, delay_ms: u32) -> Frame {
    Frame::from_parts(
        render_snapshot(snapshot, scale),
        0,
        0,
        image::Delay::from_numer_denom_ms(delay_ms, 1),
    )
}
