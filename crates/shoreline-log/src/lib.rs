//! Tracing subscriber setup for shoreline binaries.
//!
//! Library crates only emit `tracing` events; this crate decides where they
//! go. Console output is always on, and a JSON log file can be enabled from
//! the config for runs worth inspecting afterwards.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use shoreline_config::Config;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log written into the log directory.
pub const LOG_FILE: &str = "shoreline.log";

const DEFAULT_DIRECTIVES: &str = "info";

/// Filter directives taken from the config, or the default when unset.
pub fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Create an `EnvFilter` with the default directives.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVES)
}

/// Creates `log_dir` and opens a fresh log file inside it.
///
/// Returns `None` if either step fails; file logging is best effort.
pub fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_dir.join(LOG_FILE)).ok()
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the config's `debug.log_level`. When the config
/// enables `debug.log_to_file` and `log_dir` is given, events are also written
/// as JSON lines to [`LOG_FILE`] in that directory.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
///
/// ```no_run
/// use shoreline_config::Config;
/// use shoreline_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, Some(&config)).expect("subscriber already set");
/// ```
pub fn init_logging(log_dir: Option<&Path>, config: Option<&Config>) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let to_file = config.is_some_and(|c| c.debug.log_to_file);
    if to_file
        && let Some(log_dir) = log_dir
        && let Some(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        return subscriber.with(file_layer).try_init();
    }

    subscriber.try_init()
}
