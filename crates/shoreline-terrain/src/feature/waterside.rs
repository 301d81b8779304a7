//! Waterside decoration: swaps shore voxels in a disk around open water.
//!
//! Each chunk samples a few anchor columns, takes the topmost solid-or-liquid
//! voxel there, and if it is water replaces every matching voxel within a
//! random radius and a five-voxel vertical band (for example grass and dirt
//! turning into sand around a pond).

use hashbrown::HashSet;
use shoreline_voxel::{BlockState, Material, VoxelGrid, VoxelPos};

use crate::error::ConfigurationError;
use crate::random::RandomSource;

/// Smallest radius a patch can have.
pub const MIN_RADIUS: u32 = 2;

/// Upper limit for `max_radius`.
pub const MAX_RADIUS: u32 = 4096;

/// Upper limit for `amount_per_chunk`, the largest value a record can hold.
pub const MAX_AMOUNT: u32 = i32::MAX as u32;

/// Half-height of the vertical band scanned around the anchor.
pub const HEIGHT_RADIUS: i32 = 2;

/// Anchors are drawn from a 16-wide span starting this far from the chunk origin.
const ANCHOR_OFFSET: i32 = 8;
const ANCHOR_SPAN: u32 = 16;

/// Parameters of the waterside feature. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatersideConfig {
    amount_per_chunk: u32,
    max_radius: u32,
    state: BlockState,
    replaced_states: HashSet<BlockState>,
}

impl WatersideConfig {
    /// Builds a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::RadiusTooSmall`] if `max_radius <= 2`,
    /// [`ConfigurationError::RadiusTooLarge`] above [`MAX_RADIUS`], and
    /// [`ConfigurationError::AmountTooLarge`] above [`MAX_AMOUNT`].
    pub fn new(
        amount_per_chunk: u32,
        max_radius: u32,
        state: BlockState,
        replaced_states: impl IntoIterator<Item = BlockState>,
    ) -> Result<Self, ConfigurationError> {
        if max_radius <= MIN_RADIUS {
            return Err(ConfigurationError::RadiusTooSmall {
                max_radius: i64::from(max_radius),
                min: MIN_RADIUS,
            });
        }
        if max_radius > MAX_RADIUS {
            return Err(ConfigurationError::RadiusTooLarge {
                max_radius: i64::from(max_radius),
                max: MAX_RADIUS,
            });
        }
        if amount_per_chunk > MAX_AMOUNT {
            return Err(ConfigurationError::AmountTooLarge {
                amount: u64::from(amount_per_chunk),
                max: MAX_AMOUNT,
            });
        }
        Ok(Self {
            amount_per_chunk,
            max_radius,
            state,
            replaced_states: replaced_states.into_iter().collect(),
        })
    }

    /// Number of anchors sampled per chunk.
    pub fn amount_per_chunk(&self) -> u32 {
        self.amount_per_chunk
    }

    /// Exclusive upper bound of the patch radius.
    pub fn max_radius(&self) -> u32 {
        self.max_radius
    }

    /// State written over matching voxels.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// States that may be overwritten.
    pub fn replaced_states(&self) -> &HashSet<BlockState> {
        &self.replaced_states
    }

    /// Exact-value membership test against the replaceable set.
    pub fn replaces(&self, state: BlockState) -> bool {
        self.replaced_states.contains(&state)
    }
}

/// Runs one chunk's worth of waterside placement.
///
/// Draws `amount_per_chunk` anchors at offsets `8..=23` from `chunk_origin`
/// on both horizontal axes, which reaches into the neighbouring chunks.
/// Returns how many anchors landed on water.
pub fn scatter<G, R>(grid: &mut G, rng: &mut R, chunk_origin: VoxelPos, config: &WatersideConfig) -> u32
where
    G: VoxelGrid + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut placed = 0;
    for _ in 0..config.amount_per_chunk {
        let x = rng.next_int(ANCHOR_SPAN) as i32 + ANCHOR_OFFSET;
        let z = rng.next_int(ANCHOR_SPAN) as i32 + ANCHOR_OFFSET;

        let surface = grid.top_solid_or_liquid(chunk_origin.x + x, chunk_origin.z + z);
        if place_one(grid, rng, surface, config) {
            placed += 1;
        }
    }
    placed
}

/// Places a single patch anchored at `pos`.
///
/// Returns `false` without drawing from `rng` or touching the grid when the
/// anchor is not water. Otherwise draws the radius once, rewrites every
/// replaceable voxel in the disk × band volume and returns `true`.
pub fn place_one<G, R>(grid: &mut G, rng: &mut R, pos: VoxelPos, config: &WatersideConfig) -> bool
where
    G: VoxelGrid + ?Sized,
    R: RandomSource + ?Sized,
{
    if grid.voxel(pos).material() != Material::Water {
        return false;
    }

    let radius = (rng.next_int(config.max_radius - MIN_RADIUS) + MIN_RADIUS) as i32;
    let mut replaced = 0u32;

    for (x, z) in disk_columns(pos.x, pos.z, radius) {
        for y in pos.y - HEIGHT_RADIUS..=pos.y + HEIGHT_RADIUS {
            let target = VoxelPos::new(x, y, z);
            if config.replaces(grid.voxel(target)) {
                grid.set_voxel(target, config.state);
                replaced += 1;
            }
        }
    }

    tracing::trace!(?pos, radius, replaced, "placed waterside patch");
    true
}

/// Columns `(x, z)` of the bounding square around the center that pass the
/// disk test `dx² + dz² <= radius²`, x-major.
pub fn disk_columns(center_x: i32, center_z: i32, radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let radius_sq = i64::from(radius) * i64::from(radius);
    (center_x - radius..=center_x + radius).flat_map(move |x| {
        (center_z - radius..=center_z + radius).filter_map(move |z| {
            let dx = i64::from(x - center_x);
            let dz = i64::from(z - center_z);
            (dx * dx + dz * dz <= radius_sq).then_some((x, z))
        })
    })
}
