//! Voxel type registry: maps compact [`VoxelTypeId`] values to [`VoxelTypeDef`] metadata
//! and hands out the [`BlockState`] values that grids store.
//!
//! The registry is built once before generation starts. Air is always ID 0 so
//! that an unwritten grid cell reads as empty space.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact identifier for a voxel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelTypeId(pub u16);

impl VoxelTypeId {
    /// The reserved air type.
    pub const AIR: Self = Self(0);
}

/// Coarse classification of a voxel type, distinct from its identity.
///
/// Two different types (say grass and dirt) share [`Material::Solid`], while
/// decoration features match on exact [`BlockState`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Empty space.
    Air,
    /// Still or flowing water.
    Water,
    /// Lava.
    Lava,
    /// Anything entities stand on: stone, dirt, sand, ...
    Solid,
    /// Non-blocking vegetation such as tall grass.
    Plant,
}

impl Material {
    /// Returns `true` for water and lava.
    pub fn is_liquid(self) -> bool {
        matches!(self, Material::Water | Material::Lava)
    }

    /// Returns `true` if the material blocks movement.
    pub fn is_solid(self) -> bool {
        matches!(self, Material::Solid)
    }
}

/// A voxel value as stored in a grid: the type identity plus its material.
///
/// Equality and hashing cover the whole value. States are normally obtained
/// from [`VoxelTypeRegistry::state`] so that the material always agrees with
/// the registered definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    id: VoxelTypeId,
    material: Material,
}

impl BlockState {
    /// The air state (ID 0).
    pub const AIR: Self = Self {
        id: VoxelTypeId::AIR,
        material: Material::Air,
    };

    /// Creates a state from raw parts.
    pub const fn new(id: VoxelTypeId, material: Material) -> Self {
        Self { id, material }
    }

    /// The voxel type this state belongs to.
    pub fn id(&self) -> VoxelTypeId {
        self.id
    }

    /// The material classification of this state.
    pub fn material(&self) -> Material {
        self.material
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::AIR
    }
}

/// Full descriptor for a voxel type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelTypeDef {
    /// Human-readable name (e.g. "stone", "grass", "water").
    pub name: String,
    /// Material classification.
    pub material: Material,
}

impl VoxelTypeDef {
    /// Shorthand constructor.
    pub fn new(name: impl Into<String>, material: Material) -> Self {
        Self {
            name: name.into(),
            material,
        }
    }
}

/// Errors that can occur during voxel type registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type with the same name has already been registered.
    #[error("duplicate voxel type name: {0}")]
    DuplicateName(String),
    /// All 65 535 user-defined slots have been consumed.
    #[error("voxel type registry is full (max 65536 types)")]
    RegistryFull,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The block set registered by [`VoxelTypeRegistry::with_default_blocks`].
const DEFAULT_BLOCKS: &[(&str, Material)] = &[
    ("stone", Material::Solid),
    ("dirt", Material::Solid),
    ("grass", Material::Solid),
    ("sand", Material::Solid),
    ("gravel", Material::Solid),
    ("clay", Material::Solid),
    ("tall_grass", Material::Plant),
    ("water", Material::Water),
    ("lava", Material::Lava),
];

/// Maps [`VoxelTypeId`] → [`VoxelTypeDef`] with O(1) lookup by index and
/// O(1) reverse lookup by name.
pub struct VoxelTypeRegistry {
    /// Dense array where `index == VoxelTypeId.0`.
    types: Vec<VoxelTypeDef>,
    name_to_id: FxHashMap<String, VoxelTypeId>,
}

impl VoxelTypeRegistry {
    /// Creates a new registry with Air pre-registered as ID 0.
    pub fn new() -> Self {
        let mut name_to_id = FxHashMap::default();
        name_to_id.insert("air".to_string(), VoxelTypeId::AIR);

        Self {
            types: vec![VoxelTypeDef::new("air", Material::Air)],
            name_to_id,
        }
    }

    /// Creates a registry holding air plus the stock terrain blocks
    /// (stone, dirt, grass, sand, gravel, clay, tall grass, water, lava).
    pub fn with_default_blocks() -> Self {
        let mut registry = Self::new();
        for &(name, material) in DEFAULT_BLOCKS {
            // Names in the table are distinct and far below the slot limit.
            let _ = registry.register(VoxelTypeDef::new(name, material));
        }
        registry
    }

    /// Registers a new voxel type and returns its assigned ID.
    ///
    /// IDs are assigned sequentially starting from 1 (0 is Air).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a type with the same name
    /// already exists, or [`RegistryError::RegistryFull`] if all slots are used.
    pub fn register(&mut self, def: VoxelTypeDef) -> Result<VoxelTypeId, RegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        if self.types.len() > u16::MAX as usize {
            return Err(RegistryError::RegistryFull);
        }

        let id = VoxelTypeId(self.types.len() as u16);
        tracing::debug!(name = %def.name, id = id.0, material = ?def.material, "registered voxel type");
        self.name_to_id.insert(def.name.clone(), id);
        self.types.push(def);
        Ok(id)
    }

    /// Returns the definition for a given ID, or `None` if it was never registered.
    pub fn get(&self, id: VoxelTypeId) -> Option<&VoxelTypeDef> {
        self.types.get(id.0 as usize)
    }

    /// Returns the ID for a named voxel type, or `None` if not found.
    pub fn lookup_by_name(&self, name: &str) -> Option<VoxelTypeId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the grid state for a registered ID.
    pub fn state(&self, id: VoxelTypeId) -> Option<BlockState> {
        self.get(id).map(|def| BlockState::new(id, def.material))
    }

    /// Returns the grid state for a named voxel type.
    pub fn state_by_name(&self, name: &str) -> Option<BlockState> {
        self.lookup_by_name(name).and_then(|id| self.state(id))
    }

    /// Returns the registered name of a state's type.
    pub fn name_of(&self, state: BlockState) -> Option<&str> {
        self.get(state.id()).map(|def| def.name.as_str())
    }

    /// Returns the total number of registered types (including Air).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only Air is registered.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= 1
    }
}

impl Default for VoxelTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
