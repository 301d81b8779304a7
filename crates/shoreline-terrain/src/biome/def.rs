//! Biome definition: describes the properties of a single biome type.

use shoreline_voxel::BlockState;

use crate::feature::FeatureConfig;

/// Full descriptor for a biome type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeDef {
    /// Human-readable biome name (e.g., "marsh").
    pub name: String,
    /// Relative generation weight. Zero disables the biome.
    pub weight: u32,
    /// Voxel placed on the terrain surface above the water line.
    pub surface: BlockState,
    /// Decoration features run, in order, for every chunk of this biome.
    pub features: Vec<FeatureConfig>,
}
