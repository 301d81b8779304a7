//! Integer grid coordinates and horizontal chunk columns.

use serde::{Deserialize, Serialize};

/// Horizontal width of a chunk column in voxels.
pub const CHUNK_WIDTH: i32 = 16;

/// A voxel position in grid coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Address of a 16×16 chunk column (the unit of generation work).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkColumn {
    pub x: i32,
    pub z: i32,
}

impl ChunkColumn {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The column containing the given voxel.
    pub fn containing(pos: VoxelPos) -> Self {
        Self::new(pos.x.div_euclid(CHUNK_WIDTH), pos.z.div_euclid(CHUNK_WIDTH))
    }

    /// Grid-aligned origin of the column at `y = 0`.
    pub const fn origin(self) -> VoxelPos {
        VoxelPos::new(self.x * CHUNK_WIDTH, 0, self.z * CHUNK_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_chunk_aligned() {
        assert_eq!(ChunkColumn::new(2, -3).origin(), VoxelPos::new(32, 0, -48));
    }

    #[test]
    fn test_containing_handles_negative_coordinates() {
        assert_eq!(
            ChunkColumn::containing(VoxelPos::new(-1, 70, 15)),
            ChunkColumn::new(-1, 0)
        );
        assert_eq!(
            ChunkColumn::containing(VoxelPos::new(-16, 0, 16)),
            ChunkColumn::new(-1, 1)
        );
    }
}
