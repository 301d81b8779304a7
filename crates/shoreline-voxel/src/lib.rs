//! Voxel types, material classification, and grid access for world decoration.

pub mod grid;
pub mod pos;
pub mod registry;
pub mod world;

pub use grid::VoxelGrid;
pub use pos::{CHUNK_WIDTH, ChunkColumn, VoxelPos};
pub use registry::{
    BlockState, Material, RegistryError, VoxelTypeDef, VoxelTypeId, VoxelTypeRegistry,
};
pub use world::{SECTION_SIZE, VoxelWorld, WorldError};
