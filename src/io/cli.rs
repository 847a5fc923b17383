//! Command-line interface for batch map generation

use crate::algorithm::executor::MapGenerator;
use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR, GenerationConfig, IMAGE_SCALE, OUTPUT_SUFFIX,
    VISUALIZATION_CAPTURE_INTERVAL,
};
use crate::io::error::Result;
use crate::io::export::export_map_dir;
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "walkgen")]
#[command(
    author,
    version,
    about = "Generate platformer maps with a biased random walk"
)]
/// Command-line arguments for the map generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON generation config; the built-in preset is used when omitted
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the config's random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the config's maximum walker steps
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Number of maps to generate with consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Directory receiving generated files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Also export every map as a MapDir tile layer
    #[arg(short, long)]
    pub export: bool,

    /// Write the effective configuration to this path and exit
    #[arg(short, long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log run summaries
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Load the config file or the preset and apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn resolve_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(iterations) = self.iterations {
            config.max_iterations = iterations;
        }
        Ok(config)
    }
}

/// Runs a batch of generations with progress tracking and writes their outputs
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested map
    ///
    /// # Errors
    ///
    /// Returns the first configuration, generation or export error
    pub fn process(&mut self) -> Result<()> {
        let base = self.cli.resolve_config()?;

        if let Some(path) = &self.cli.write_config {
            base.save(path)?;
            info!("wrote config to {}", path.display());
            return Ok(());
        }

        let configs: Vec<GenerationConfig> = (0..self.cli.count)
            .map(|offset| Self::config_for(&base, offset, self.cli.count))
            .collect();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(configs.len());
        }

        for (index, config) in configs.into_iter().enumerate() {
            self.process_map(config, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// The configuration of the `offset`-th map of a batch
    ///
    /// Seeds are consecutive and names carry the seed once there is more than
    /// one map.
    pub fn config_for(base: &GenerationConfig, offset: usize, count: usize) -> GenerationConfig {
        let mut config = base.clone();
        config.seed = base.seed.wrapping_add(offset as u64);
        if count > 1 {
            config.name = format!("{}_{}", base.name, config.seed);
        }
        config
    }

    fn process_map(&mut self, config: GenerationConfig, index: usize) -> Result<()> {
        let name = config.name.clone();
        let max_iterations = config.max_iterations;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(index, &name, max_iterations);
        }

        let mut generator = MapGenerator::new(config)?;
        if self.cli.visualize {
            generator.enable_visualization(VISUALIZATION_CAPTURE_INTERVAL);
        }

        let progress = &mut self.progress_manager;
        let outcome = generator.run_with(|iteration| {
            if let Some(pm) = progress.as_mut() {
                pm.update_iteration(index, iteration);
            }
        })?;

        let snapshot = generator.snapshot();
        export_map_as_png(
            &snapshot,
            &Self::output_path(&self.cli.output, &name, "png"),
            IMAGE_SCALE,
        )?;

        if self.cli.visualize {
            generator.export_visualization(
                &Self::visualization_path(&self.cli.output, &name),
                IMAGE_SCALE,
            )?;
        }

        if self.cli.export {
            export_map_dir(&snapshot, &name, &self.cli.output)?;
        }

        info!(
            "'{name}': {} steps, reached {}, {} platforms",
            outcome.iterations, outcome.reached, outcome.finishing.platforms
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(index);
        }

        Ok(())
    }

    /// Path of the rendered map image
    pub fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
        dir.join(format!("{name}{OUTPUT_SUFFIX}.{extension}"))
    }

    /// Path of the generation animation
    pub fn visualization_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}_visualization.gif"))
    }
}
