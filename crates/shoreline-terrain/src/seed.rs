//! Deterministic per-chunk seeding.
//!
//! Every chunk column gets its own RNG derived from the world seed, the
//! column address and the purpose of the stream, so biome choice and
//! decoration never share draws and regenerate identically on any thread.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoreline_voxel::ChunkColumn;

/// Independent random streams drawn for one chunk column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RngStream {
    /// Biome selection.
    Biome,
    /// Feature decoration.
    Decoration,
}

/// Derive a u64 seed for a chunk column from the world seed.
pub fn derive_chunk_seed(world_seed: u64, column: ChunkColumn, stream: RngStream) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    column.x.hash(&mut hasher);
    column.z.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}

/// Derive a deterministic RNG for a chunk column.
pub fn chunk_rng(world_seed: u64, column: ChunkColumn, stream: RngStream) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_chunk_seed(world_seed, column, stream))
}
