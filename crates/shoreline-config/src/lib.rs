//! Configuration for shoreline world generation.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Unknown or missing fields fall back to defaults so older
//! files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, ContentConfig, DebugConfig, WorldConfig, default_config_dir};
pub use error::ConfigError;
