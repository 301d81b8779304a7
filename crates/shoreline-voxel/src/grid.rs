//! The grid collaborator that decoration features read from and write to.

use crate::pos::VoxelPos;
use crate::registry::BlockState;

/// Point access to a voxel grid.
///
/// Bounds handling and the side effects of a write (neighbour updates, dirty
/// tracking, ...) belong to the implementation. Decoration code never checks
/// coordinates itself.
pub trait VoxelGrid {
    /// Returns the highest position in column `(x, z)` whose voxel is solid or liquid.
    fn top_solid_or_liquid(&self, x: i32, z: i32) -> VoxelPos;

    /// Reads one voxel.
    fn voxel(&self, pos: VoxelPos) -> BlockState;

    /// Writes one voxel.
    fn set_voxel(&mut self, pos: VoxelPos, state: BlockState);
}

impl<G: VoxelGrid + ?Sized> VoxelGrid for &mut G {
    fn top_solid_or_liquid(&self, x: i32, z: i32) -> VoxelPos {
        (**self).top_solid_or_liquid(x, z)
    }

    fn voxel(&self, pos: VoxelPos) -> BlockState {
        (**self).voxel(pos)
    }

    fn set_voxel(&mut self, pos: VoxelPos, state: BlockState) {
        (**self).set_voxel(pos, state)
    }
}
