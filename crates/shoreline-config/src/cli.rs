//! Command-line arguments for the shoreline demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "shoreline", about = "Waterside terrain decoration demo")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chunks generated in each direction from the origin.
    #[arg(long)]
    pub chunk_radius: Option<u32>,

    /// Path to a JSON content pack.
    #[arg(long)]
    pub content_pack: Option<PathBuf>,

    /// Path to a JSON biome weights file.
    #[arg(long)]
    pub biome_weights: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(radius) = args.chunk_radius {
            self.world.chunk_radius = radius;
        }
        if let Some(ref path) = args.content_pack {
            self.content.pack_path = Some(path.clone());
        }
        if let Some(ref path) = args.biome_weights {
            self.content.biome_weights_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
