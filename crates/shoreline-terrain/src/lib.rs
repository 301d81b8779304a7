//! Terrain decoration: waterside feature placement, biome tables, and the chunk decorator.

mod content;
mod decorator;
mod error;
mod ground;
mod random;
mod seed;

pub mod biome;
pub mod feature;

pub use biome::{
    BiomeDef, BiomeId, BiomeRegistry, BiomeRegistryError, BiomeWeights, SubBiomeEntry,
    WeightedBiomeEntry,
};
pub use content::{BiomeRecord, ContentError, ContentPack};
pub use decorator::{ChunkDecorator, DecorationStats};
pub use error::ConfigurationError;
pub use feature::{FeatureConfig, FeatureRecord, WatersideConfig, WatersideRecord};
pub use ground::{GroundParams, GroundShaper};
pub use random::RandomSource;
pub use seed::{RngStream, chunk_rng, derive_chunk_seed};
