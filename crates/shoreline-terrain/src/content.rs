//! Content packs: biome definitions and their decoration features as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shoreline_voxel::VoxelTypeRegistry;

use crate::biome::{BiomeDef, BiomeRegistry, BiomeRegistryError};
use crate::error::ConfigurationError;
use crate::feature::{FeatureRecord, WatersideRecord};

/// Errors raised while loading or resolving content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Failed to read a content file from disk.
    #[error("failed to read content: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse JSON content.
    #[error("failed to parse content: {0}")]
    Parse(#[source] serde_json::Error),

    /// A biome carried an invalid feature or surface.
    #[error("invalid biome '{biome}': {source}")]
    Configuration {
        biome: String,
        #[source]
        source: ConfigurationError,
    },

    #[error(transparent)]
    Registry(#[from] BiomeRegistryError),
}

fn default_weight() -> u32 {
    10
}

/// Serialized form of a biome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeRecord {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// Voxel name for the surface layer.
    pub surface: String,
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

/// A set of biomes shipped together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    pub biomes: Vec<BiomeRecord>,
}

impl ContentPack {
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(ContentError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(ContentError::Read)?;
        let pack = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), biomes = pack.biomes.len(), "loaded content pack");
        Ok(pack)
    }

    /// The pack bundled with the crate: a few shore biomes and a plain one.
    pub fn builtin() -> Self {
        let waterside = |amount, max_radius, state: &str, replaced: Option<&[&str]>| {
            FeatureRecord::Waterside(WatersideRecord {
                amount_per_chunk: amount,
                max_radius,
                state: state.to_string(),
                replaced_states: replaced.map(|names| names.iter().map(|n| n.to_string()).collect()),
            })
        };

        Self {
            biomes: vec![
                BiomeRecord {
                    name: "grassland".into(),
                    weight: 10,
                    surface: "grass".into(),
                    features: Vec::new(),
                },
                BiomeRecord {
                    name: "sandy_shore".into(),
                    weight: 8,
                    surface: "grass".into(),
                    features: vec![waterside(4, 7, "sand", None)],
                },
                BiomeRecord {
                    name: "clay_marsh".into(),
                    weight: 5,
                    surface: "grass".into(),
                    features: vec![
                        waterside(2, 5, "clay", Some(&["dirt"][..])),
                        waterside(1, 4, "gravel", None),
                    ],
                },
            ],
        }
    }

    /// Resolves every biome against the voxel registry.
    ///
    /// `default_replaced` fills in features that omit `replaced_states`.
    pub fn build_registry(
        &self,
        voxels: &VoxelTypeRegistry,
        default_replaced: &[String],
    ) -> Result<BiomeRegistry, ContentError> {
        let mut registry = BiomeRegistry::new();
        for record in &self.biomes {
            let invalid = |source| ContentError::Configuration {
                biome: record.name.clone(),
                source,
            };

            let surface = voxels
                .state_by_name(&record.surface)
                .ok_or_else(|| invalid(ConfigurationError::UnknownVoxel(record.surface.clone())))?;
            let features = record
                .features
                .iter()
                .map(|feature| feature.resolve(voxels, default_replaced))
                .collect::<Result<Vec<_>, _>>()
                .map_err(invalid)?;

            tracing::debug!(
                biome = %record.name,
                weight = record.weight,
                features = features.len(),
                "registered biome"
            );
            registry.register(BiomeDef {
                name: record.name.clone(),
                weight: record.weight,
                surface,
                features,
            })?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureConfig;

    fn defaults() -> Vec<String> {
        vec!["grass".into(), "dirt".into()]
    }

    #[test]
    fn test_builtin_pack_resolves() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let registry = ContentPack::builtin()
            .build_registry(&voxels, &defaults())
            .unwrap();
        assert_eq!(registry.len(), 3);

        let marsh = registry.get(registry.lookup_by_name("clay_marsh").unwrap());
        assert_eq!(marsh.features.len(), 2);
        let FeatureConfig::Waterside(clay) = &marsh.features[0];
        assert_eq!(clay.state(), voxels.state_by_name("clay").unwrap());
        assert_eq!(clay.replaced_states().len(), 1);
        let FeatureConfig::Waterside(gravel) = &marsh.features[1];
        assert_eq!(gravel.replaced_states().len(), 2);
    }

    #[test]
    fn test_parse_pack_with_default_weight() {
        let json = r#"{
            "biomes": [
                { "name": "bayou", "surface": "grass", "features": [
                    { "type": "waterside", "amount_per_chunk": 1, "max_radius": 3, "state": "sand" }
                ] }
            ]
        }"#;
        let pack = ContentPack::from_json_str(json).unwrap();
        assert_eq!(pack.biomes[0].weight, 10);
        assert_eq!(pack.biomes[0].features.len(), 1);
    }

    #[test]
    fn test_invalid_feature_names_biome() {
        let json = r#"{
            "biomes": [
                { "name": "broken", "surface": "grass", "features": [
                    { "type": "waterside", "amount_per_chunk": 1, "max_radius": 2, "state": "sand" }
                ] }
            ]
        }"#;
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let err = ContentPack::from_json_str(json)
            .unwrap()
            .build_registry(&voxels, &defaults())
            .unwrap_err();
        match err {
            ContentError::Configuration { biome, source } => {
                assert_eq!(biome, "broken");
                assert!(matches!(source, ConfigurationError::RadiusTooSmall { .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_unknown_surface_rejected() {
        let pack = ContentPack {
            biomes: vec![BiomeRecord {
                name: "moon".into(),
                weight: 1,
                surface: "regolith".into(),
                features: Vec::new(),
            }],
        };
        let voxels = VoxelTypeRegistry::with_default_blocks();
        assert!(matches!(
            pack.build_registry(&voxels, &defaults()),
            Err(ContentError::Configuration { .. })
        ));
    }

    #[test]
    fn test_duplicate_biomes_rejected() {
        let mut pack = ContentPack::builtin();
        pack.biomes.push(pack.biomes[0].clone());
        let voxels = VoxelTypeRegistry::with_default_blocks();
        assert!(matches!(
            pack.build_registry(&voxels, &defaults()),
            Err(ContentError::Registry(BiomeRegistryError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            ContentPack::from_json_str("{ biomes: ["),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_load_written_pack() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack.json");
        std::fs::write(&path, serde_json::to_string_pretty(&ContentPack::builtin()).unwrap())
            .unwrap();
        assert_eq!(ContentPack::load(&path).unwrap(), ContentPack::builtin());
    }

    #[test]
    fn test_sample_pack_resolves() {
        let pack = ContentPack::from_json_str(include_str!("../../../content/marsh_pack.json")).unwrap();
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let mut registry = pack.build_registry(&voxels, &defaults()).unwrap();
        assert_eq!(registry.len(), 3);

        let weights = crate::BiomeWeights::from_json_str(include_str!("../../../content/biome_weights.json")).unwrap();
        assert_eq!(weights.apply_to(&mut registry), 3);
        assert_eq!(registry.get(registry.lookup_by_name("sandy_shore").unwrap()).weight, 10);
    }
}
