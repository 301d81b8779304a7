//! Plain data records for feature configuration.
//!
//! Records hold voxel *names*; resolving them against a
//! [`VoxelTypeRegistry`] produces the immutable configs that placement uses,
//! so placement code never sees text or I/O.

use serde::{Deserialize, Serialize};
use shoreline_voxel::{BlockState, VoxelTypeRegistry};

use super::FeatureConfig;
use super::waterside::{MAX_AMOUNT, MAX_RADIUS, MIN_RADIUS, WatersideConfig};
use crate::error::ConfigurationError;

/// Serialized form of [`WatersideConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatersideRecord {
    pub amount_per_chunk: i32,
    pub max_radius: i32,
    /// Name of the voxel written over matches.
    pub state: String,
    /// Names of replaceable voxels. Falls back to the configured defaults when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_states: Option<Vec<String>>,
}

/// Serialized form of [`FeatureConfig`], tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureRecord {
    Waterside(WatersideRecord),
}

fn resolve_state(registry: &VoxelTypeRegistry, name: &str) -> Result<BlockState, ConfigurationError> {
    registry
        .state_by_name(name)
        .ok_or_else(|| ConfigurationError::UnknownVoxel(name.to_string()))
}

fn state_name(registry: &VoxelTypeRegistry, state: BlockState) -> Result<String, ConfigurationError> {
    registry
        .name_of(state)
        .map(str::to_string)
        .ok_or_else(|| ConfigurationError::UnknownVoxel(format!("#{}", state.id().0)))
}

impl WatersideRecord {
    /// Validates the record and resolves its voxel names.
    ///
    /// `default_replaced` is used when the record omits `replaced_states`.
    pub fn resolve(
        &self,
        registry: &VoxelTypeRegistry,
        default_replaced: &[String],
    ) -> Result<WatersideConfig, ConfigurationError> {
        let amount = u32::try_from(self.amount_per_chunk)
            .map_err(|_| ConfigurationError::NegativeAmount(i64::from(self.amount_per_chunk)))?;
        let max_radius =
            u32::try_from(self.max_radius).map_err(|_| ConfigurationError::RadiusTooSmall {
                max_radius: i64::from(self.max_radius),
                min: MIN_RADIUS,
            })?;

        let state = resolve_state(registry, &self.state)?;
        let names = self.replaced_states.as_deref().unwrap_or(default_replaced);
        let replaced = names
            .iter()
            .map(|name| resolve_state(registry, name))
            .collect::<Result<Vec<_>, _>>()?;

        WatersideConfig::new(amount, max_radius, state, replaced)
    }

    /// Writes a config back out. Replaced states come out sorted by name.
    pub fn from_config(
        config: &WatersideConfig,
        registry: &VoxelTypeRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut replaced = config
            .replaced_states()
            .iter()
            .map(|&state| state_name(registry, state))
            .collect::<Result<Vec<_>, _>>()?;
        replaced.sort();

        let amount_per_chunk = i32::try_from(config.amount_per_chunk()).map_err(|_| {
            ConfigurationError::AmountTooLarge {
                amount: u64::from(config.amount_per_chunk()),
                max: MAX_AMOUNT,
            }
        })?;
        let max_radius = i32::try_from(config.max_radius()).map_err(|_| {
            ConfigurationError::RadiusTooLarge {
                max_radius: i64::from(config.max_radius()),
                max: MAX_RADIUS,
            }
        })?;

        Ok(Self {
            amount_per_chunk,
            max_radius,
            state: state_name(registry, config.state())?,
            replaced_states: Some(replaced),
        })
    }
}

impl FeatureRecord {
    /// Resolves the record into a placeable feature.
    pub fn resolve(
        &self,
        registry: &VoxelTypeRegistry,
        default_replaced: &[String],
    ) -> Result<FeatureConfig, ConfigurationError> {
        match self {
            FeatureRecord::Waterside(record) => record
                .resolve(registry, default_replaced)
                .map(FeatureConfig::Waterside),
        }
    }

    /// Writes a feature back out as a record.
    pub fn from_config(
        config: &FeatureConfig,
        registry: &VoxelTypeRegistry,
    ) -> Result<Self, ConfigurationError> {
        match config {
            FeatureConfig::Waterside(config) => {
                WatersideRecord::from_config(config, registry).map(FeatureRecord::Waterside)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        vec!["grass".to_string(), "dirt".to_string()]
    }

    fn record(amount: i32, max_radius: i32) -> WatersideRecord {
        WatersideRecord {
            amount_per_chunk: amount,
            max_radius,
            state: "sand".to_string(),
            replaced_states: None,
        }
    }

    #[test]
    fn test_missing_replaced_states_uses_defaults() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        let config = record(4, 7).resolve(&registry, &defaults()).unwrap();

        assert_eq!(config.amount_per_chunk(), 4);
        assert_eq!(config.max_radius(), 7);
        assert_eq!(config.state(), registry.state_by_name("sand").unwrap());
        assert_eq!(config.replaced_states().len(), 2);
        assert!(config.replaces(registry.state_by_name("grass").unwrap()));
        assert!(config.replaces(registry.state_by_name("dirt").unwrap()));
        assert!(!config.replaces(registry.state_by_name("stone").unwrap()));
    }

    #[test]
    fn test_explicit_replaced_states_override_defaults() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        let mut rec = record(2, 5);
        rec.replaced_states = Some(vec!["gravel".to_string()]);
        let config = rec.resolve(&registry, &defaults()).unwrap();

        assert_eq!(config.replaced_states().len(), 1);
        assert!(config.replaces(registry.state_by_name("gravel").unwrap()));
        assert!(!config.replaces(registry.state_by_name("grass").unwrap()));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        assert_eq!(
            record(-1, 5).resolve(&registry, &defaults()),
            Err(ConfigurationError::NegativeAmount(-1))
        );
    }

    #[test]
    fn test_small_or_negative_radius_rejected() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        for max_radius in [-4, 0, 2] {
            assert!(matches!(
                record(1, max_radius).resolve(&registry, &defaults()),
                Err(ConfigurationError::RadiusTooSmall { .. })
            ));
        }
    }

    #[test]
    fn test_unknown_voxel_names_rejected() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        let mut rec = record(1, 5);
        rec.state = "marble".to_string();
        assert_eq!(
            rec.resolve(&registry, &defaults()),
            Err(ConfigurationError::UnknownVoxel("marble".to_string()))
        );

        let rec = record(1, 5);
        assert_eq!(
            rec.resolve(&registry, &["peat".to_string()]),
            Err(ConfigurationError::UnknownVoxel("peat".to_string()))
        );
    }

    #[test]
    fn test_tagged_json_shape() {
        let json = r#"{
            "type": "waterside",
            "amount_per_chunk": 3,
            "max_radius": 6,
            "state": "clay",
            "replaced_states": ["dirt"]
        }"#;
        let parsed: FeatureRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            FeatureRecord::Waterside(WatersideRecord {
                amount_per_chunk: 3,
                max_radius: 6,
                state: "clay".to_string(),
                replaced_states: Some(vec!["dirt".to_string()]),
            })
        );
    }

    #[test]
    fn test_written_record_lists_sorted_names() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        let config = record(4, 7).resolve(&registry, &defaults()).unwrap();
        let written = FeatureRecord::from_config(&FeatureConfig::Waterside(config), &registry)
            .unwrap();

        let FeatureRecord::Waterside(written) = written;
        assert_eq!(written.state, "sand");
        assert_eq!(
            written.replaced_states,
            Some(vec!["dirt".to_string(), "grass".to_string()])
        );
        let json = serde_json::to_value(FeatureRecord::Waterside(written)).unwrap();
        assert_eq!(json["type"], "waterside");
        assert_eq!(json["max_radius"], 7);
    }

    #[test]
    fn test_largest_amount_survives_write_and_resolve() {
        let registry = VoxelTypeRegistry::with_default_blocks();
        let sand = registry.state_by_name("sand").unwrap();
        let grass = registry.state_by_name("grass").unwrap();
        let config = WatersideConfig::new(MAX_AMOUNT, 5, sand, [grass]).unwrap();

        let written = WatersideRecord::from_config(&config, &registry).unwrap();
        assert_eq!(written.amount_per_chunk, i32::MAX);

        let resolved = written.resolve(&registry, &defaults()).unwrap();
        assert_eq!(resolved, config);
    }
}
