use glam::{EulerRot, Quat, Vec3};

use skerry_common::IslandConfig;
use skerry_scene::SceneGraph;

/// Orbit radius as a multiple of the island size.
pub const ORBIT_RADIUS_SCALE: f32 = 1.2;

/// Orbit angular speed, radians/s.
pub const ORBIT_ANGULAR_SPEED: f32 = 0.2;

/// Flicker amplitude around the lamp's base intensity.
const FLICKER_AMPLITUDE: f32 = 5.0;
const FLICKER_FREQUENCY: f32 = 10.0;

/// Wave displacement of the water surface at (x, z). Two spatial
/// frequencies drifting at different rates so the field never repeats
/// visibly.
pub fn wave_height(x: f32, z: f32, elapsed: f32) -> f32 {
    (x * 0.2 + elapsed * 0.8).sin() * (z * 0.2 + elapsed * 0.6).cos() * 0.08
        + (x * 0.4 + elapsed * 1.2).sin() * (z * 0.3 + elapsed * 1.0).cos() * 0.05
}

/// The boat's pose on its circular path, a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatPose {
    pub position: Vec3,
    /// Heading along the path tangent.
    pub yaw: f32,
    /// Side-to-side rocking.
    pub roll: f32,
    /// Front-to-back rocking.
    pub pitch: f32,
}

impl BoatPose {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// Where the boat is at `elapsed` seconds: circular orbit around the
/// island, facing travel direction, with rocking and a vertical bob.
pub fn boat_pose(cfg: &IslandConfig, base_height: f32, elapsed: f32) -> BoatPose {
    let radius = cfg.island_size * ORBIT_RADIUS_SCALE;
    let angle = elapsed * ORBIT_ANGULAR_SPEED;
    let position = Vec3::new(
        angle.cos() * radius,
        base_height + (elapsed * 1.2).sin() * 0.05,
        angle.sin() * radius,
    );
    // Finite-difference tangent: heading from a small step ahead on the
    // path, plus the model's fixed quarter-turn offset.
    let yaw = ((angle + 0.05).cos() - angle.cos()).atan2((angle + 0.05).sin() - angle.sin())
        + std::f32::consts::FRAC_PI_4;
    BoatPose {
        position,
        yaw,
        roll: (elapsed * 1.5).sin() * 0.03,
        pitch: (elapsed * 1.0).cos() * 0.02,
    }
}

/// Lamp intensity with the flicker term applied.
pub fn lamp_intensity(base: f32, elapsed: f32) -> f32 {
    base + (elapsed * FLICKER_FREQUENCY).sin() * FLICKER_AMPLITUDE
}

/// Write this tick's animation outputs into the scene graph. Every
/// optional handle is skipped while absent; assets still loading never
/// stall the loop.
pub fn advance(graph: &mut SceneGraph, cfg: &IslandConfig, elapsed: f32) {
    if let Some(water) = &mut graph.water {
        water.time = elapsed;
    }

    if let Some(vehicle) = &mut graph.vehicle {
        let pose = boat_pose(cfg, vehicle.base_height, elapsed);
        vehicle.transform.position = pose.position;
        vehicle.transform.rotation = pose.rotation();
    }

    if let Some(lamp) = &mut graph.lamp {
        if lamp.visible {
            lamp.intensity = lamp_intensity(skerry_scene::Lamp::BASE_INTENSITY, elapsed);
        }
    }
}
