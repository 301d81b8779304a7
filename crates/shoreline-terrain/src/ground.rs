//! Base terrain for decoration: an fBm heightmap filled with stone, dirt,
//! a biome surface layer, and water up to a fixed level.
//!
//! Low spots below the water level become ponds and lakes, which is where
//! waterside features find their anchors.

use noise::{NoiseFn, Simplex};
use shoreline_voxel::{BlockState, CHUNK_WIDTH, ChunkColumn, VoxelGrid, VoxelPos, VoxelTypeRegistry};

use crate::error::ConfigurationError;

/// Heightmap and layering parameters.
#[derive(Clone, Debug)]
pub struct GroundParams {
    /// World seed for deterministic generation.
    pub seed: u64,
    /// Lowest Y written (bedrock floor).
    pub floor_y: i32,
    /// Upper Y bound (exclusive); terrain and water are clipped below it.
    pub ceiling_y: i32,
    /// Mean surface height.
    pub base_height: i32,
    /// Amplitude of the first octave, in voxels.
    pub amplitude: f64,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Columns whose surface lies below this Y are flooded up to it.
    pub water_level: i32,
    /// Thickness of the dirt layer under the surface.
    pub dirt_depth: i32,
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            seed: 0,
            floor_y: 0,
            ceiling_y: 256,
            base_height: 64,
            amplitude: 6.0,
            base_frequency: 0.02,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            water_level: 63,
            dirt_depth: 3,
        }
    }
}

/// Fills chunk columns with layered terrain.
pub struct GroundShaper {
    noise: Simplex,
    params: GroundParams,
    stone: BlockState,
    dirt: BlockState,
    water: BlockState,
}

impl GroundShaper {
    /// Creates a shaper, resolving `stone`, `dirt` and `water` in the registry.
    pub fn new(params: GroundParams, voxels: &VoxelTypeRegistry) -> Result<Self, ConfigurationError> {
        let resolve = |name: &str| {
            voxels
                .state_by_name(name)
                .ok_or_else(|| ConfigurationError::UnknownVoxel(name.to_string()))
        };
        Ok(Self {
            noise: Simplex::new(params.seed as u32),
            stone: resolve("stone")?,
            dirt: resolve("dirt")?,
            water: resolve("water")?,
            params,
        })
    }

    /// Surface height of column `(x, z)`.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = self.params.amplitude;

        for _ in 0..self.params.octaves {
            total += self.noise.get([f64::from(x) * frequency, f64::from(z) * frequency]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        self.params.base_height + total.round() as i32
    }

    /// Writes terrain for every column of a chunk.
    ///
    /// Dry columns get `surface` on top; flooded columns get dirt under the
    /// water instead. Every write stays inside `floor_y..ceiling_y`. Returns
    /// the number of flooded columns.
    pub fn shape<G: VoxelGrid + ?Sized>(&self, grid: &mut G, column: ChunkColumn, surface: BlockState) -> u32 {
        let top_y = self.params.ceiling_y - 1;
        if top_y < self.params.floor_y {
            return 0;
        }
        let water_top = self.params.water_level.min(top_y);
        let origin = column.origin();
        let mut flooded = 0;

        for dx in 0..CHUNK_WIDTH {
            for dz in 0..CHUNK_WIDTH {
                let (x, z) = (origin.x + dx, origin.z + dz);
                let height = self.height_at(x, z).clamp(self.params.floor_y, top_y);
                let dirt_from = height - self.params.dirt_depth;

                for y in self.params.floor_y..height {
                    let state = if y < dirt_from { self.stone } else { self.dirt };
                    grid.set_voxel(VoxelPos::new(x, y, z), state);
                }

                let under_water = height < self.params.water_level;
                let top = if under_water { self.dirt } else { surface };
                grid.set_voxel(VoxelPos::new(x, height, z), top);

                if under_water {
                    for y in height + 1..=water_top {
                        grid.set_voxel(VoxelPos::new(x, y, z), self.water);
                    }
                    flooded += 1;
                }
            }
        }

        flooded
    }
}
