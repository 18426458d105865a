//! Command-line entry point: one avatar per invocation, written to a fixed path

use crate::composition::pipeline::{AvatarConfig, compose};
use crate::io::configuration::OUTPUT_FILE;
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::palette::Palette;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "identiglyph")]
#[command(
    author,
    version,
    about = "Generate a random identicon-style avatar as composite.png"
)]
/// Command-line arguments for the avatar generator
///
/// Generation takes no options; only `--help` and `--version` are accepted.
pub struct Cli {}

/// Runs a single generation pass and writes the result
#[derive(Debug)]
pub struct AvatarGenerator {
    config: AvatarConfig,
    palette: Palette,
    output_path: PathBuf,
}

impl Default for AvatarGenerator {
    fn default() -> Self {
        Self::new(AvatarConfig::default(), PathBuf::from(OUTPUT_FILE))
    }
}

impl AvatarGenerator {
    /// Create a generator writing to `output_path`
    pub fn new(config: AvatarConfig, output_path: PathBuf) -> Self {
        Self {
            config,
            palette: Palette::accents(),
            output_path,
        }
    }

    /// Create the generator the command line runs
    pub fn from_cli(_cli: &Cli) -> Self {
        Self::default()
    }

    /// Destination file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Generate with a fresh seed from OS entropy
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation or export fails
    pub fn run(&self) -> Result<u64> {
        let seed = rand::random::<u64>();
        self.run_with_seed(seed)?;
        Ok(seed)
    }

    /// Generate deterministically from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or the PNG cannot
    /// be encoded or written
    pub fn run_with_seed(&self, seed: u64) -> Result<()> {
        let start_time = Instant::now();
        self.config.validate()?;
        log::info!("Generating avatar with seed {seed}");

        let mut rng = StdRng::seed_from_u64(seed);
        let composition = compose(&self.config, &self.palette, &mut rng);
        let canvas = composition.render();
        export_canvas_as_png(&canvas, &self.output_path)?;

        log::debug!(
            "Rendered {} operations in {:?}",
            composition.operations.len(),
            start_time.elapsed()
        );
        Ok(())
    }
}
