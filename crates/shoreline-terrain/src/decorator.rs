//! Per-chunk decoration driver.

use std::ops::AddAssign;

use shoreline_voxel::{ChunkColumn, VoxelGrid};

use crate::biome::{BiomeId, BiomeRegistry};
use crate::seed::{RngStream, chunk_rng};

/// Counters accumulated while decorating chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationStats {
    /// Chunks whose biome features were run.
    pub chunks: u32,
    /// Feature invocations across all chunks.
    pub features_run: u32,
    /// Anchors that produced a patch.
    pub anchors_placed: u32,
}

impl AddAssign for DecorationStats {
    fn add_assign(&mut self, other: Self) {
        self.chunks += other.chunks;
        self.features_run += other.features_run;
        self.anchors_placed += other.anchors_placed;
    }
}

/// Chooses biomes and runs their features, one chunk column at a time.
///
/// All randomness is derived from the world seed and the column address, so
/// decorating the same column twice on a fresh grid gives identical output.
pub struct ChunkDecorator<'a> {
    world_seed: u64,
    biomes: &'a BiomeRegistry,
}

impl<'a> ChunkDecorator<'a> {
    pub fn new(world_seed: u64, biomes: &'a BiomeRegistry) -> Self {
        Self { world_seed, biomes }
    }

    /// Biome for a column, or `None` when every biome weight is zero.
    pub fn biome_at(&self, column: ChunkColumn) -> Option<BiomeId> {
        let mut rng = chunk_rng(self.world_seed, column, RngStream::Biome);
        self.biomes.pick(&mut rng)
    }

    /// Runs every feature of `biome` over `column`, in declaration order.
    ///
    /// Features share one decoration stream, so reordering them changes
    /// where later features land.
    pub fn decorate<G: VoxelGrid + ?Sized>(
        &self,
        grid: &mut G,
        column: ChunkColumn,
        biome: BiomeId,
    ) -> DecorationStats {
        let def = self.biomes.get(biome);
        let origin = column.origin();
        let mut rng = chunk_rng(self.world_seed, column, RngStream::Decoration);
        let mut stats = DecorationStats {
            chunks: 1,
            ..Default::default()
        };

        for feature in &def.features {
            let placed = feature.apply(grid, &mut rng, origin);
            tracing::trace!(
                chunk_x = column.x,
                chunk_z = column.z,
                biome = %def.name,
                feature = feature.kind(),
                placed,
                "feature applied"
            );
            stats.features_run += 1;
            stats.anchors_placed += placed;
        }

        stats
    }
}
