//! CLI entry point for the avatar generator

use clap::Parser;
use identiglyph::io::cli::{AvatarGenerator, Cli};

fn main() -> identiglyph::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let generator = AvatarGenerator::from_cli(&cli);
    generator.run().map(|_| ()).inspect_err(|e| {
        log::error!("{e}");
    })
}
