//! Biome system: definitions, registry with weighted selection, and weight tables.

mod def;
mod registry;
mod weights;

pub use def::BiomeDef;
pub use registry::{BiomeId, BiomeRegistry, BiomeRegistryError};
pub use weights::{BiomeWeights, SubBiomeEntry, WeightedBiomeEntry};
