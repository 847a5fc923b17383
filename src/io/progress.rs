//! Multi-map progress tracking with automatic batching for large runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch generation
///
/// Shows one bar per map for small batches and adds a single batch bar once
/// more maps are queued than can be shown individually. Only the most recent
/// maps keep a visible bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    /// Stores (`name`, `current_iter`, `max_iter`) for rolling window display
    map_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            map_states: Vec::new(),
        }
    }

    /// Create bars for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..map_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of per-map bars
    pub fn visible_bars(&self) -> usize {
        self.map_bars.len()
    }

    /// Whether a batch bar is shown
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Configure a bar for a new map
    pub fn start_map(&mut self, index: usize, name: &str, max_iterations: usize) {
        if index >= self.map_states.len() {
            self.map_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.map_states.get_mut(index) {
            *state = (name.to_string(), 0, max_iterations);
        }
        self.update_bars();
    }

    /// Report the current step of a map
    pub fn update_iteration(&mut self, index: usize, iteration: usize) {
        if let Some(state) = self.map_states.get_mut(index) {
            state.1 = iteration;
        }
        self.update_bars();
    }

    /// Mark a map as completed
    pub fn complete_map(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.map_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .map_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (name, current, max)) in self.map_bars.iter().zip(visible) {
            bar.set_length(*max as u64);
            bar.set_position(*current as u64);
            let max_width = max.to_string().len();
            bar.set_message(format!("{current:>max_width$}/{max}"));
            bar.set_prefix(name.clone());
        }

        for bar in self.map_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
