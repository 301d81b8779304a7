//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Directory used when no `--config` path is given.
///
/// Falls back to the working directory on platforms without a user config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoreline")
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World shape and seed.
    pub world: WorldConfig,
    /// Content pack and biome weight files.
    pub content: ContentConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed; every chunk derives its randomness from it.
    pub seed: u64,
    /// Chunks generated in each direction from the origin chunk.
    pub chunk_radius: u32,
    /// Lowest Y of the world (inclusive).
    pub min_y: i32,
    /// Highest Y of the world (exclusive).
    pub max_y: i32,
    /// Mean ground height.
    pub ground_level: i32,
    /// Columns below this height are flooded up to it.
    pub water_level: i32,
    /// First-octave amplitude of the ground heightmap, in voxels.
    pub height_amplitude: f64,
    /// First-octave frequency of the ground heightmap.
    pub terrain_frequency: f64,
}

/// Where decoration content comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// JSON content pack. `None` uses the built-in pack.
    pub pack_path: Option<PathBuf>,
    /// JSON biome weight overrides applied after the pack is loaded.
    pub biome_weights_path: Option<PathBuf>,
    /// Voxel names a feature may replace when its record omits `replaced_states`.
    pub default_replaced_states: Vec<String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to a file in the config directory.
    pub log_to_file: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            chunk_radius: 2,
            min_y: 0,
            max_y: 128,
            ground_level: 64,
            water_level: 63,
            height_amplitude: 6.0,
            terrain_frequency: 0.02,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            pack_path: None,
            biome_weights_path: None,
            default_replaced_states: vec!["grass".to_string(), "dirt".to_string()],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let write_error = |source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let ron_str = ron::ser::to_string_pretty(
            &Config::default(),
            ron::ser::PrettyConfig::new().depth_limit(3),
        )
        .unwrap();
        assert!(ron_str.contains("seed: 42"));
        assert!(ron_str.contains("water_level: 63"));
        assert!(ron_str.contains("\"grass\""));
    }

    #[test]
    fn test_default_replaced_states() {
        let content = ContentConfig::default();
        assert_eq!(content.default_replaced_states, vec!["grass", "dirt"]);
        assert!(content.pack_path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.content.pack_path = Some(PathBuf::from("packs/marsh.json"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(world: (seed: 7))").unwrap();
        assert_eq!(config.world.seed, 7);
        assert_eq!(config.world.chunk_radius, 2);
        assert_eq!(config.content, ContentConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = 1234;
        config.world.chunk_radius = 5;
        config.content.default_replaced_states = vec!["sand".to_string()];

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_ron_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        match Config::load_or_create(dir.path()) {
            Err(ConfigError::ParseError { path, .. }) => {
                assert_eq!(path, dir.path().join(CONFIG_FILE));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// shoreline\n(\n  // nothing set\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
