//! Decoration features and their data-driven configuration.

mod record;
pub mod waterside;

use shoreline_voxel::{VoxelGrid, VoxelPos};

use crate::random::RandomSource;

pub use record::{FeatureRecord, WatersideRecord};
pub use waterside::WatersideConfig;

/// A decoration feature together with its per-kind parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureConfig {
    /// Replaces shore voxels around open water.
    Waterside(WatersideConfig),
}

impl FeatureConfig {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureConfig::Waterside(_) => "waterside",
        }
    }

    /// Runs the feature over the chunk column at `chunk_origin`.
    ///
    /// Returns the number of anchors that produced a patch; zero means the
    /// grid was left untouched.
    pub fn apply<G, R>(&self, grid: &mut G, rng: &mut R, chunk_origin: VoxelPos) -> u32
    where
        G: VoxelGrid + ?Sized,
        R: RandomSource + ?Sized,
    {
        match self {
            FeatureConfig::Waterside(config) => waterside::scatter(grid, rng, chunk_origin, config),
        }
    }
}
