//! In-memory voxel world backed by sparse 16³ sections.
//!
//! Sections are allocated on first non-air write, keyed by section coordinate
//! in an [`FxHashMap`](rustc_hash::FxHashMap). Unwritten space reads as air.
//! The world has a fixed vertical range; reads outside it return air and
//! writes outside it are dropped with a warning.

use rustc_hash::FxHashMap;

use crate::grid::VoxelGrid;
use crate::pos::VoxelPos;
use crate::registry::BlockState;

/// Side length of a storage section in voxels.
pub const SECTION_SIZE: i32 = 16;

/// Number of voxels in one section (16³).
const SECTION_VOLUME: usize = (SECTION_SIZE * SECTION_SIZE * SECTION_SIZE) as usize;

/// Section-grid coordinate.
type SectionKey = (i32, i32, i32);

/// Errors raised when creating a [`VoxelWorld`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The vertical range holds no voxels.
    #[error("empty vertical range {min_y}..{max_y}")]
    EmptyRange { min_y: i32, max_y: i32 },
}

/// Sparse voxel storage covering `min_y..max_y` vertically and unbounded horizontally.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    sections: FxHashMap<SectionKey, Box<[BlockState]>>,
    min_y: i32,
    max_y: i32,
    /// Incremented on every write that changes a voxel.
    version: u64,
}

impl VoxelWorld {
    /// Creates an empty world spanning `min_y..max_y`.
    ///
    /// # Panics
    ///
    /// Panics if `min_y >= max_y`.
    pub fn new(min_y: i32, max_y: i32) -> Self {
        assert!(min_y < max_y, "empty vertical range {min_y}..{max_y}");
        Self {
            sections: FxHashMap::default(),
            min_y,
            max_y,
            version: 0,
        }
    }

    /// Creates an empty world, or fails if `min_y >= max_y`.
    pub fn try_new(min_y: i32, max_y: i32) -> Result<Self, WorldError> {
        if min_y >= max_y {
            return Err(WorldError::EmptyRange { min_y, max_y });
        }
        Ok(Self::new(min_y, max_y))
    }

    /// Lowest valid Y coordinate (inclusive).
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Upper Y bound (exclusive).
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of writes that changed a voxel so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of allocated sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if `pos.y` lies inside the vertical range.
    pub fn in_bounds(&self, pos: VoxelPos) -> bool {
        (self.min_y..self.max_y).contains(&pos.y)
    }

    /// Fills `from_y..to_y` of column `(x, z)` with `state`, clamped to the world.
    pub fn fill_column(&mut self, x: i32, z: i32, from_y: i32, to_y: i32, state: BlockState) {
        for y in from_y.max(self.min_y)..to_y.min(self.max_y) {
            self.set_voxel(VoxelPos::new(x, y, z), state);
        }
    }

    /// Counts voxels equal to `state` in allocated sections.
    ///
    /// Air in unallocated space is not counted.
    pub fn count_matching(&self, state: BlockState) -> usize {
        self.sections
            .values()
            .map(|voxels| voxels.iter().filter(|&&v| v == state).count())
            .sum()
    }

    fn split(pos: VoxelPos) -> (SectionKey, usize) {
        let key = (
            pos.x.div_euclid(SECTION_SIZE),
            pos.y.div_euclid(SECTION_SIZE),
            pos.z.div_euclid(SECTION_SIZE),
        );
        let lx = pos.x.rem_euclid(SECTION_SIZE) as usize;
        let ly = pos.y.rem_euclid(SECTION_SIZE) as usize;
        let lz = pos.z.rem_euclid(SECTION_SIZE) as usize;
        let size = SECTION_SIZE as usize;
        (key, (ly * size + lz) * size + lx)
    }
}

impl VoxelGrid for VoxelWorld {
    fn top_solid_or_liquid(&self, x: i32, z: i32) -> VoxelPos {
        (self.min_y..self.max_y)
            .rev()
            .map(|y| VoxelPos::new(x, y, z))
            .find(|&pos| {
                let material = self.voxel(pos).material();
                material.is_solid() || material.is_liquid()
            })
            .unwrap_or(VoxelPos::new(x, self.min_y, z))
    }

    fn voxel(&self, pos: VoxelPos) -> BlockState {
        if !self.in_bounds(pos) {
            return BlockState::AIR;
        }
        let (key, index) = Self::split(pos);
        self.sections
            .get(&key)
            .map_or(BlockState::AIR, |voxels| voxels[index])
    }

    fn set_voxel(&mut self, pos: VoxelPos, state: BlockState) {
        if !self.in_bounds(pos) {
            tracing::warn!(
                "VoxelWorld::set_voxel out of bounds: ({}, {}, {})",
                pos.x,
                pos.y,
                pos.z
            );
            return;
        }
        let (key, index) = Self::split(pos);
        match self.sections.get_mut(&key) {
            Some(voxels) if voxels[index] == state => return,
            Some(voxels) => voxels[index] = state,
            // Unallocated space already reads as air.
            None if state == BlockState::AIR => return,
            None => {
                let mut voxels = vec![BlockState::AIR; SECTION_VOLUME].into_boxed_slice();
                voxels[index] = state;
                self.sections.insert(key, voxels);
            }
        }
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Material, VoxelTypeId};

    const STONE: BlockState = BlockState::new(VoxelTypeId(1), Material::Solid);
    const WATER: BlockState = BlockState::new(VoxelTypeId(2), Material::Water);
    const TALL_GRASS: BlockState = BlockState::new(VoxelTypeId(3), Material::Plant);

    #[test]
    fn test_try_new_rejects_empty_range() {
        assert_eq!(
            VoxelWorld::try_new(64, 64).unwrap_err(),
            WorldError::EmptyRange { min_y: 64, max_y: 64 }
        );
        assert!(VoxelWorld::try_new(10, -10).is_err());
        assert_eq!(VoxelWorld::try_new(-1, 0).unwrap().max_y(), 0);
    }

    #[test]
    fn test_unwritten_space_is_air() {
        let world = VoxelWorld::new(0, 128);
        assert_eq!(world.voxel(VoxelPos::new(5, 60, -7)), BlockState::AIR);
        assert_eq!(world.section_count(), 0);
    }

    #[test]
    fn test_set_then_get_negative_coordinates() {
        let mut world = VoxelWorld::new(-64, 64);
        let pos = VoxelPos::new(-17, -3, -1);
        world.set_voxel(pos, STONE);
        assert_eq!(world.voxel(pos), STONE);
        assert_eq!(world.voxel(VoxelPos::new(-16, -3, -1)), BlockState::AIR);
        assert_eq!(world.version(), 1);
    }

    #[test]
    fn test_out_of_bounds_write_is_dropped() {
        let mut world = VoxelWorld::new(0, 16);
        world.set_voxel(VoxelPos::new(0, 16, 0), STONE);
        world.set_voxel(VoxelPos::new(0, -1, 0), STONE);
        assert_eq!(world.section_count(), 0);
        assert_eq!(world.version(), 0);
        assert_eq!(world.voxel(VoxelPos::new(0, 16, 0)), BlockState::AIR);
    }

    #[test]
    fn test_air_write_does_not_allocate() {
        let mut world = VoxelWorld::new(0, 16);
        world.set_voxel(VoxelPos::new(3, 3, 3), BlockState::AIR);
        assert_eq!(world.section_count(), 0);
        assert_eq!(world.version(), 0);
    }

    #[test]
    fn test_unchanged_write_keeps_version() {
        let mut world = VoxelWorld::new(0, 16);
        let pos = VoxelPos::new(1, 1, 1);
        world.set_voxel(pos, STONE);
        world.set_voxel(pos, STONE);
        assert_eq!(world.version(), 1);
        world.set_voxel(pos, WATER);
        assert_eq!(world.version(), 2);
    }

    #[test]
    fn test_top_solid_or_liquid_finds_water_surface() {
        let mut world = VoxelWorld::new(0, 64);
        world.fill_column(4, 4, 0, 8, STONE);
        world.fill_column(4, 4, 8, 11, WATER);
        assert_eq!(world.top_solid_or_liquid(4, 4), VoxelPos::new(4, 10, 4));
    }

    #[test]
    fn test_top_solid_or_liquid_skips_plants() {
        let mut world = VoxelWorld::new(0, 64);
        world.fill_column(0, 0, 0, 5, STONE);
        world.set_voxel(VoxelPos::new(0, 5, 0), TALL_GRASS);
        assert_eq!(world.top_solid_or_liquid(0, 0), VoxelPos::new(0, 4, 0));
    }

    #[test]
    fn test_top_solid_or_liquid_empty_column_returns_floor() {
        let world = VoxelWorld::new(-8, 64);
        assert_eq!(world.top_solid_or_liquid(9, 9), VoxelPos::new(9, -8, 9));
    }

    #[test]
    fn test_fill_column_clamps_to_world() {
        let mut world = VoxelWorld::new(0, 10);
        world.fill_column(1, 1, -5, 50, STONE);
        assert_eq!(world.count_matching(STONE), 10);
    }
}
