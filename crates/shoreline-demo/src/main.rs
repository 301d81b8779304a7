//! Demo binary that generates a small decorated world and logs what happened.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p shoreline-demo -- --seed 7 --chunk-radius 3`.

use clap::Parser;
use shoreline_config::{CliArgs, Config, ContentConfig, WorldConfig, default_config_dir};
use shoreline_terrain::feature::waterside;
use shoreline_terrain::{
    BiomeRegistry, BiomeWeights, ChunkDecorator, ConfigurationError, ContentError, ContentPack,
    DecorationStats, GroundParams, GroundShaper, RngStream, WatersideConfig, chunk_rng,
};
use shoreline_voxel::{ChunkColumn, VoxelGrid, VoxelPos, VoxelTypeRegistry, VoxelWorld, WorldError};
use tracing::info;

/// Reasons the configured world cannot be generated.
#[derive(Debug, thiserror::Error)]
enum GenerateError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("invalid world range: {0}")]
    World(#[from] WorldError),

    #[error("chunk_radius {0} is out of range")]
    ChunkRadius(u32),
}

/// Loads the content pack named in the config (or the built-in one), applies
/// weight overrides, and resolves it into a biome registry.
fn load_biomes(content: &ContentConfig, voxels: &VoxelTypeRegistry) -> Result<BiomeRegistry, ContentError> {
    let pack = match &content.pack_path {
        Some(path) => ContentPack::load(path)?,
        None => {
            info!("No content pack configured, using built-in biomes");
            ContentPack::builtin()
        }
    };

    let mut biomes = pack.build_registry(voxels, &content.default_replaced_states)?;

    if let Some(path) = &content.biome_weights_path {
        let applied = BiomeWeights::load(path)?.apply_to(&mut biomes);
        info!("Applied {applied} biome weight overrides");
    }

    for (id, biome) in biomes.iter() {
        info!(
            "  Biome {}: {} (weight={}, features={})",
            id.0,
            biome.name,
            biome.weight,
            biome.features.len()
        );
    }
    Ok(biomes)
}

fn ground_params(world: &WorldConfig) -> GroundParams {
    GroundParams {
        seed: world.seed,
        floor_y: world.min_y,
        ceiling_y: world.max_y,
        base_height: world.ground_level,
        amplitude: world.height_amplitude,
        base_frequency: world.terrain_frequency,
        water_level: world.water_level,
        ..Default::default()
    }
}

/// Shapes and decorates every chunk within `chunk_radius` of the origin.
///
/// All chunks are shaped before any is decorated, since patches near a chunk
/// edge spill into its neighbours.
fn generate_world(
    world_config: &WorldConfig,
    voxels: &VoxelTypeRegistry,
    biomes: &BiomeRegistry,
) -> Result<(VoxelWorld, DecorationStats), GenerateError> {
    let mut world = VoxelWorld::try_new(world_config.min_y, world_config.max_y)?;
    let r = i32::try_from(world_config.chunk_radius)
        .map_err(|_| GenerateError::ChunkRadius(world_config.chunk_radius))?;
    let shaper = GroundShaper::new(ground_params(world_config), voxels)?;
    let fallback_surface = voxels
        .state_by_name("grass")
        .ok_or_else(|| ConfigurationError::UnknownVoxel("grass".to_string()))?;
    let decorator = ChunkDecorator::new(world_config.seed, biomes);

    let mut plan = Vec::new();
    let mut flooded = 0;
    for cx in -r..=r {
        for cz in -r..=r {
            let column = ChunkColumn::new(cx, cz);
            let biome = decorator.biome_at(column);
            let surface = biome.map_or(fallback_surface, |id| biomes.get(id).surface);
            flooded += shaper.shape(&mut world, column, surface);
            plan.push((column, biome));
        }
    }
    info!(
        "Shaped {} chunks ({} flooded columns, {} sections)",
        plan.len(),
        flooded,
        world.section_count()
    );

    let mut stats = DecorationStats::default();
    for (column, biome) in plan {
        match biome {
            Some(biome) => stats += decorator.decorate(&mut world, column, biome),
            None => tracing::warn!(chunk_x = column.x, chunk_z = column.z, "no biome with non-zero weight"),
        }
    }
    Ok((world, stats))
}

/// Places a single patch beside a hand-built pond.
fn demonstrate_single_pond(voxels: &VoxelTypeRegistry, seed: u64) -> Result<usize, ConfigurationError> {
    info!("Starting single pond demonstration");

    let resolve = |name: &str| {
        voxels
            .state_by_name(name)
            .ok_or_else(|| ConfigurationError::UnknownVoxel(name.to_string()))
    };
    let (grass, water, sand) = (resolve("grass")?, resolve("water")?, resolve("sand")?);

    let mut world = VoxelWorld::new(0, 32);
    for x in -4..=4 {
        for z in -4..=4 {
            world.fill_column(x, z, 0, 11, grass);
        }
    }
    world.set_voxel(VoxelPos::new(0, 10, 0), water);

    let config = WatersideConfig::new(1, 3, sand, [grass])?;
    let anchor = world.top_solid_or_liquid(0, 0);
    let mut rng = chunk_rng(seed, ChunkColumn::containing(anchor), RngStream::Decoration);
    let placed = waterside::place_one(&mut world, &mut rng, anchor, &config);

    let sand_count = world.count_matching(sand);
    info!("  Anchor {:?}: placed={}, sand voxels={}", anchor, placed, sand_count);
    info!("Single pond demonstration completed successfully");
    Ok(sand_count)
}

fn report(world: &VoxelWorld, voxels: &VoxelTypeRegistry, stats: &DecorationStats) {
    info!(
        "Decorated {} chunks: {} features run, {} anchors placed",
        stats.chunks, stats.features_run, stats.anchors_placed
    );
    for name in ["sand", "clay", "gravel", "water"] {
        if let Some(state) = voxels.state_by_name(name) {
            info!("  {name}: {} voxels", world.count_matching(state));
        }
    }
    info!("World version after generation: {}", world.version());
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Err(e) = shoreline_log::init_logging(Some(&log_dir), Some(&config)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!(
        "Shoreline demo: seed={}, chunk_radius={}, water_level={}",
        config.world.seed, config.world.chunk_radius, config.world.water_level
    );

    let voxels = VoxelTypeRegistry::with_default_blocks();
    info!("Voxel registry: {} types", voxels.len());

    if let Err(e) = demonstrate_single_pond(&voxels, config.world.seed) {
        tracing::error!("Single pond demonstration failed: {e}");
    }

    let biomes = match load_biomes(&config.content, &voxels) {
        Ok(biomes) => biomes,
        Err(e) => {
            tracing::error!("Failed to load content: {e}");
            std::process::exit(1);
        }
    };

    match generate_world(&config.world, &voxels, &biomes) {
        Ok((world, stats)) => report(&world, &voxels, &stats),
        Err(e) => {
            tracing::error!("World generation failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> WorldConfig {
        WorldConfig {
            chunk_radius: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_pond_places_sand() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        // max_radius 3 forces radius 2: 13 columns of grass at y 8..=10,
        // less the water anchor itself.
        assert_eq!(demonstrate_single_pond(&voxels, 3).unwrap(), 13 * 3 - 1);
    }

    #[test]
    fn test_generate_world_is_deterministic() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let biomes = load_biomes(&ContentConfig::default(), &voxels).unwrap();
        let (a, stats_a) = generate_world(&small_world(), &voxels, &biomes).unwrap();
        let (b, stats_b) = generate_world(&small_world(), &voxels, &biomes).unwrap();
        assert_eq!(stats_a, stats_b);
        assert_eq!(stats_a.chunks, 9);
        let sand = voxels.state_by_name("sand").unwrap();
        assert_eq!(a.count_matching(sand), b.count_matching(sand));
    }

    #[test]
    fn test_empty_world_range_is_error() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let biomes = load_biomes(&ContentConfig::default(), &voxels).unwrap();
        let world_config = WorldConfig {
            min_y: 64,
            max_y: 64,
            ..small_world()
        };
        assert!(matches!(
            generate_world(&world_config, &voxels, &biomes),
            Err(GenerateError::World(WorldError::EmptyRange { min_y: 64, max_y: 64 }))
        ));
    }

    #[test]
    fn test_oversized_chunk_radius_is_error() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let biomes = load_biomes(&ContentConfig::default(), &voxels).unwrap();
        let world_config = WorldConfig {
            chunk_radius: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            generate_world(&world_config, &voxels, &biomes),
            Err(GenerateError::ChunkRadius(u32::MAX))
        ));
    }

    #[test]
    fn test_missing_pack_is_read_error() {
        let voxels = VoxelTypeRegistry::with_default_blocks();
        let content = ContentConfig {
            pack_path: Some("/nonexistent/shoreline/pack.json".into()),
            ..Default::default()
        };
        assert!(matches!(load_biomes(&content, &voxels), Err(ContentError::Read(_))));
    }
}
