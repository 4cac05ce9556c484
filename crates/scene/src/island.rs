use glam::{Quat, Vec3};

use skerry_assets::{LoadSlot, placeholder};
use skerry_collision::{Aabb, Collider, ColliderSet, HeightField, Sphere};
use skerry_common::{Color, IslandConfig, Transform};

use crate::graph::{Lamp, Prop, SceneGraph, Vehicle, WaterSurface};

/// Analytic terrain height at (x, z): layered sine noise faded out
/// radially so the island sinks below the water toward its edge.
pub fn terrain_height(cfg: &IslandConfig, x: f32, z: f32) -> f32 {
    let noise1 = (x * 0.15 + z * 0.1).sin() * 2.0;
    let noise2 = (z * 0.15 + x * 0.05).cos() * 1.5;
    let noise3 = (x * 0.3 + z * 0.25).sin() * 0.5;
    let dist = (x * x + z * z).sqrt();
    let scale = (1.0 - dist / (cfg.island_size * 0.9)).max(0.0);
    ((noise1 + noise2 + noise3) * scale).max(cfg.water_level - 0.5)
}

/// Load slots for the island's external models. Each slot starts on its
/// placeholder; fulfilling one upgrades the geometry used for prop
/// display and collider sizing on the next rebuild.
#[derive(Debug)]
pub struct IslandAssets {
    pub boat: LoadSlot,
    pub palm: LoadSlot,
    pub fan_palm: LoadSlot,
    pub house: LoadSlot,
    pub slum_house: LoadSlot,
}

impl Default for IslandAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl IslandAssets {
    pub fn new() -> Self {
        Self {
            boat: LoadSlot::new("boat", placeholder::boat()),
            palm: LoadSlot::new("palm", placeholder::palm_tree()),
            fan_palm: LoadSlot::new("fan_palm", placeholder::palm_tree()),
            house: LoadSlot::new("house", placeholder::house()),
            slum_house: LoadSlot::new("slum_house", placeholder::slum_house()),
        }
    }
}

/// The fully constructed island: the scene graph the animator and
/// renderer share, plus the static collider set the player probes.
#[derive(Debug)]
pub struct IslandScene {
    pub graph: SceneGraph,
    pub colliders: ColliderSet,
    pub config: IslandConfig,
}

/// Terrain grid resolution. 101 samples over the double-size plane keeps
/// bilinear error under the probe snap tolerance.
const TERRAIN_SAMPLES: usize = 101;
const ROCK_COUNT: usize = 15;

/// Build the island scene. Deterministic for a given `seed`; rock
/// placement is the only randomized part.
pub fn build_island(cfg: IslandConfig, seed: u64, assets: &IslandAssets) -> IslandScene {
    let mut graph = SceneGraph::new();
    let mut colliders = ColliderSet::new();
    let size = cfg.island_size;
    let water = cfg.water_level;

    // Terrain. The plane extends to twice the island size so the shore
    // slopes under the water rather than ending at a cliff.
    colliders.register(Collider::HeightField(HeightField::from_fn(
        size,
        TERRAIN_SAMPLES,
        |x, z| terrain_height(&cfg, x, z),
    )));
    graph.add_prop(Prop {
        name: "terrain".into(),
        model: "terrain".into(),
        transform: Transform::default(),
    });

    // Rocks scattered around the island.
    let mut rng = seed;
    let mut rand01 = || {
        rng = splitmix64(rng);
        (rng >> 40) as f32 / (1u64 << 24) as f32
    };
    for i in 0..ROCK_COUNT {
        let radius = rand01() * 1.5 + 0.5;
        let angle = rand01() * std::f32::consts::PI * 3.0;
        let dist = rand01() * (size * 0.7) + size * 0.1;
        let y = (water + radius * 0.3).max(rand01() * 0.2 + water);
        let center = Vec3::new(angle.cos() * dist, y, angle.sin() * dist);
        colliders.register(Collider::Sphere(Sphere { center, radius }));
        graph.add_prop(Prop {
            name: format!("rock_{i}"),
            model: "rock".into(),
            transform: Transform {
                position: center,
                rotation: Quat::IDENTITY,
                scale: Vec3::splat(radius),
            },
        });
    }

    // Pier deck jutting east from the shore. Posts and railings are
    // visual detail only; the deck box is what the player stands on.
    let pier_center = Vec3::new(size * 0.4, water + 0.3, 0.0);
    colliders.register(Collider::Aabb(Aabb::from_center_size(
        pier_center,
        Vec3::new(1.5, 0.1, 11.0),
    )));
    graph.add_prop(Prop {
        name: "pier".into(),
        model: "pier".into(),
        transform: Transform::from_position(pier_center),
    });

    // Palm trees at fixed shoreline spots.
    let palms = [
        (Vec3::new(size * 0.59, water - 0.1, size * 0.1), 0.38),
        (Vec3::new(-size * 0.6, water - 0.1, size * 0.1), 0.9),
        (Vec3::new(-size * 0.1, water - 0.1, size * 0.2), 1.0),
        (Vec3::new(-size * 0.5, water - 0.5, size * 0.1), 2.2),
    ];
    place_trees(&mut graph, &mut colliders, &assets.palm, "palm", &palms);

    let fan_palms = [
        (Vec3::new(-size * 0.2, water - 0.15, -size * 0.6), 1.9),
        (Vec3::new(size * 0.45, water - 0.1, -size * 0.2), 1.0),
        (Vec3::new(size * 0.5, water - 0.1, size * 0.1), 0.1),
    ];
    place_trees(&mut graph, &mut colliders, &assets.fan_palm, "fan_palm", &fan_palms);

    // House, with the lamp hung just above it.
    let house_pos = Vec3::new(size * 0.4, water + 1.0, 0.0);
    let house_model = assets.house.resolve();
    colliders.register(Collider::Aabb(Aabb::from_center_size(
        house_pos,
        Vec3::from(house_model.footprint),
    )));
    graph.add_prop(Prop {
        name: "house".into(),
        model: house_model.name.clone(),
        transform: Transform {
            position: house_pos,
            rotation: face_spawn(&cfg, house_pos),
            scale: Vec3::ONE,
        },
    });
    graph.lamp = Some(Lamp {
        position: house_pos + Vec3::Y,
        color: Color::from_hex(0xffaa00),
        intensity: Lamp::BASE_INTENSITY,
        visible: true,
    });

    let slum_pos = Vec3::new(size * 0.5, water + 0.15, size * 0.12);
    let slum_model = assets.slum_house.resolve();
    colliders.register(Collider::Aabb(Aabb::from_center_size(
        slum_pos,
        Vec3::from(slum_model.footprint),
    )));
    graph.add_prop(Prop {
        name: "slum_house".into(),
        model: slum_model.name.clone(),
        transform: Transform {
            position: slum_pos,
            rotation: face_spawn(&cfg, slum_pos),
            scale: Vec3::ONE,
        },
    });

    // Water and the boat. The boat is deliberately not a collider: it
    // moves every tick and the collider set is static.
    graph.water = Some(WaterSurface {
        time: 0.0,
        base_height: water,
    });
    graph.vehicle = Some(Vehicle {
        transform: Transform::from_position(Vec3::new(-size * 0.3, water - 1.5, 0.5)),
        base_height: water - 0.1,
    });

    tracing::info!(
        colliders = colliders.len(),
        props = graph.prop_count(),
        "island built"
    );

    IslandScene {
        graph,
        colliders,
        config: cfg,
    }
}

fn place_trees(
    graph: &mut SceneGraph,
    colliders: &mut ColliderSet,
    slot: &LoadSlot,
    kind: &str,
    placements: &[(Vec3, f32)],
) {
    let model = slot.resolve();
    for (i, (pos, scale)) in placements.iter().enumerate() {
        let footprint = Vec3::from(model.footprint) * *scale;
        // Collide against the trunk, not the canopy.
        colliders.register(Collider::Aabb(Aabb::from_center_size(
            *pos + Vec3::Y * footprint.y * 0.5,
            Vec3::new(footprint.x * 0.5, footprint.y, footprint.z * 0.5),
        )));
        graph.add_prop(Prop {
            name: format!("{kind}_{i}"),
            model: model.name.clone(),
            transform: Transform {
                position: *pos,
                rotation: Quat::IDENTITY,
                scale: Vec3::splat(*scale),
            },
        });
    }
}

/// Yaw a building so its front faces the player spawn point.
fn face_spawn(cfg: &IslandConfig, position: Vec3) -> Quat {
    let toward = cfg.player_spawn() - position;
    let yaw = toward.x.atan2(toward.z) + std::f32::consts::PI;
    Quat::from_rotation_y(yaw)
}

/// Splitmix64, the deterministic PRNG step used for rock placement.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
