//! Biome weight tables loaded from a user-editable JSON file.
//!
//! The table overrides the weights a content pack ships with, so players can
//! tune or disable biomes without editing the pack itself.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::BiomeRegistry;
use crate::content::ContentError;

/// Weight of a top-level biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedBiomeEntry {
    pub weight: u32,
}

/// Weight and rarity of a sub-biome inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubBiomeEntry {
    pub weight: u32,
    pub rarity: f32,
}

/// All weight overrides, keyed by biome name in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeWeights {
    #[serde(rename = "standard_weights")]
    pub standard: BTreeMap<String, WeightedBiomeEntry>,
    #[serde(rename = "sub_biome_weights")]
    pub sub_biomes: BTreeMap<String, SubBiomeEntry>,
    #[serde(rename = "vanilla_biome_weights")]
    pub vanilla: BTreeMap<String, WeightedBiomeEntry>,
}

impl BiomeWeights {
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(ContentError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(ContentError::Read)?;
        let weights = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            standard = weights.standard.len(),
            sub_biomes = weights.sub_biomes.len(),
            vanilla = weights.vanilla.len(),
            "loaded biome weights"
        );
        Ok(weights)
    }

    /// Applies standard and vanilla weights to matching biomes.
    ///
    /// Names with no registered biome are skipped with a warning. Returns
    /// the number of biomes updated.
    pub fn apply_to(&self, registry: &mut BiomeRegistry) -> usize {
        let mut applied = 0;
        for (name, entry) in self.standard.iter().chain(&self.vanilla) {
            if registry.set_weight(name, entry.weight) {
                applied += 1;
            } else {
                tracing::warn!(biome = %name, "weight given for unknown biome");
            }
        }
        applied
    }
}
