use glam::Vec3;
use serde::{Deserialize, Serialize};

use skerry_collision::{ColliderSet, FORWARD_BLOCK_DISTANCE, GROUND_SUPPORT_DISTANCE};
use skerry_common::IslandConfig;
use skerry_input::InputFlags;

/// Horizontal velocity decay rate, 1/s. Exponential, not a hard stop.
pub const DAMPING: f32 = 10.0;

/// Horizontal acceleration while a movement key is held, units/s².
pub const ACCELERATION: f32 = 40.0;

/// Radians of view rotation per pointer unit.
const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch limit just short of straight up/down so the look direction
/// never degenerates.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// First-person player state. Position is the eye point.
///
/// Velocity is stored in the player's local frame: x strafes, z runs
/// along facing (negative z is forward), y is world vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub can_jump: bool,
}

impl PlayerState {
    /// Player at the spawn point, at rest, facing the island.
    pub fn spawn(cfg: &IslandConfig) -> Self {
        Self {
            position: cfg.player_spawn(),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            can_jump: false,
        }
    }

    /// Horizontal facing direction. Yaw 0 faces negative z.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal strafe direction, perpendicular to `forward`.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Full view direction including pitch. Always unit length because
    /// pitch is clamped short of vertical.
    pub fn look_dir(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Apply an accumulated pointer delta to the view angles.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Enforce the floor invariant: the eye never sinks below standing
    /// on the water surface.
    pub fn clamp_to_floor(&mut self, cfg: &IslandConfig) {
        let floor = cfg.floor_y();
        if self.position.y < floor {
            self.velocity.y = 0.0;
            self.position.y = floor;
            self.can_jump = true;
        }
    }

    /// Refresh ground support from the downward probe. Close support
    /// cancels downward velocity and re-arms jumping; tight proximity
    /// snaps the eye to sit exactly on the surface.
    pub fn refresh_ground(&mut self, cfg: &IslandConfig, colliders: &ColliderSet) {
        if let Some(hit) = colliders.probe_down(self.position) {
            if hit.distance < GROUND_SUPPORT_DISTANCE {
                self.velocity.y = self.velocity.y.max(0.0);
                self.can_jump = true;
                if hit.distance < cfg.player_height {
                    self.position.y = hit.point.y + cfg.player_height;
                }
            }
        }
    }
}

/// One kinematics tick while captured. Fixed step order:
/// gravity, damping, wish direction, acceleration, probes, integration,
/// floor clamp, jump. A zero delta is an identity transform.
pub fn step(
    player: &mut PlayerState,
    cfg: &IslandConfig,
    colliders: &ColliderSet,
    flags: InputFlags,
    jump_requested: bool,
    delta: f32,
) {
    if delta <= 0.0 {
        return;
    }

    player.velocity.y -= cfg.gravity * delta;

    player.velocity.x -= player.velocity.x * DAMPING * delta;
    player.velocity.z -= player.velocity.z * DAMPING * delta;

    // Acceleration only while a relevant key is held; damping above
    // always applies.
    let dir = flags.wish_dir();
    if flags.forward || flags.backward {
        player.velocity.z -= dir.z * ACCELERATION * delta;
    }
    if flags.left || flags.right {
        player.velocity.x -= dir.x * ACCELERATION * delta;
    }

    player.refresh_ground(cfg, colliders);
    if let Some(distance) = colliders.probe_forward(player.position, player.look_dir()) {
        if distance < FORWARD_BLOCK_DISTANCE {
            // Crude wall stop: zero both horizontal axes for this tick.
            player.velocity.x = 0.0;
            player.velocity.z = 0.0;
        }
    }

    // Horizontal movement follows current facing; vertical is direct.
    let horizontal = player.right() * (-player.velocity.x * delta)
        + player.forward() * (-player.velocity.z * delta);
    player.position += horizontal;
    player.position.y += player.velocity.y * delta;

    player.clamp_to_floor(cfg);

    if jump_requested && player.can_jump {
        player.velocity.y = cfg.jump_velocity;
        player.can_jump = false;
        tracing::trace!(y = player.position.y, "jump");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skerry_collision::{Collider, HeightField};

    fn cfg() -> IslandConfig {
        IslandConfig::default()
    }

    fn flat_ground(height: f32) -> ColliderSet {
        let mut set = ColliderSet::new();
        set.register(Collider::HeightField(HeightField::from_fn(
            100.0,
            11,
            move |_, _| height,
        )));
        set
    }

    fn grounded_player(cfg: &IslandConfig, ground: f32) -> PlayerState {
        PlayerState {
            position: Vec3::new(0.0, ground + cfg.player_height, 0.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            can_jump: true,
        }
    }

    #[test]
    fn forward_key_accelerates_into_screen() {
        let cfg = cfg();
        let set = flat_ground(2.0);
        let mut p = grounded_player(&cfg, 2.0);
        let flags = InputFlags {
            forward: true,
            ..InputFlags::default()
        };
        step(&mut p, &cfg, &set, flags, false, 0.1);
        assert!((p.velocity.z - -4.0).abs() < 1e-5);
        // Facing negative z at yaw 0, so the position moved that way.
        assert!(p.position.z < 0.0);
    }

    #[test]
    fn damping_follows_the_decay_formula() {
        let cfg = cfg();
        let set = flat_ground(2.0);
        let mut p = grounded_player(&cfg, 2.0);
        p.velocity.x = 5.0;
        step(&mut p, &cfg, &set, InputFlags::default(), false, 0.02);
        // v' = v - v * 10 * delta
        assert!((p.velocity.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn damping_decays_monotonically_without_sign_flip() {
        let cfg = cfg();
        let set = flat_ground(2.0);
        let mut p = grounded_player(&cfg, 2.0);
        p.velocity.x = 5.0;
        let mut prev = p.velocity.x;
        for _ in 0..200 {
            step(&mut p, &cfg, &set, InputFlags::default(), false, 0.05);
            assert!(p.velocity.x >= 0.0);
            assert!(p.velocity.x <= prev);
            prev = p.velocity.x;
        }
        assert!(prev < 1e-3);
    }

    #[test]
    fn floor_clamp_invariant_holds_every_tick() {
        let cfg = cfg();
        let set = ColliderSet::new();
        let mut p = PlayerState::spawn(&cfg);
        for _ in 0..100 {
            step(&mut p, &cfg, &set, InputFlags::default(), false, 0.1);
            assert!(p.position.y >= cfg.floor_y());
        }
    }

    #[test]
    fn sinking_below_floor_clamps_exactly() {
        let cfg = cfg();
        let set = ColliderSet::new();
        let mut p = PlayerState::spawn(&cfg);
        p.position.y = cfg.floor_y() + 0.01;
        p.velocity.y = -5.0;
        step(&mut p, &cfg, &set, InputFlags::default(), false, 0.1);
        assert_eq!(p.position.y, cfg.floor_y());
        assert_eq!(p.velocity.y, 0.0);
        assert!(p.can_jump);
    }

    #[test]
    fn jump_only_fires_while_grounded() {
        let cfg = cfg();
        let set = ColliderSet::new();
        let mut p = PlayerState::spawn(&cfg);
        p.position.y = cfg.floor_y();
        p.can_jump = true;

        step(&mut p, &cfg, &set, InputFlags::default(), true, 0.016);
        assert_eq!(p.velocity.y, cfg.jump_velocity);
        assert!(!p.can_jump);

        // Airborne now; a second request is dropped.
        let vy = {
            step(&mut p, &cfg, &set, InputFlags::default(), false, 0.016);
            p.velocity.y
        };
        let expected = vy - cfg.gravity * 0.016;
        step(&mut p, &cfg, &set, InputFlags::default(), true, 0.016);
        assert!((p.velocity.y - expected).abs() < 1e-4);
    }

    #[test]
    fn ground_snap_under_eye_height() {
        let cfg = cfg();
        let set = flat_ground(3.0);
        let mut p = grounded_player(&cfg, 3.0);
        // Drift slightly into the ground band.
        p.position.y = 3.0 + cfg.player_height - 0.3;
        step(&mut p, &cfg, &set, InputFlags::default(), false, 0.016);
        assert!((p.position.y - (3.0 + cfg.player_height)).abs() < 1e-4);
        assert!(p.can_jump);
    }

    #[test]
    fn forward_wall_zeroes_horizontal_velocity() {
        let cfg = cfg();
        let mut set = flat_ground(0.0);
        set.register(Collider::Aabb(skerry_collision::Aabb::from_center_size(
            Vec3::new(0.0, cfg.player_height, -1.6),
            Vec3::splat(2.0),
        )));
        let mut p = grounded_player(&cfg, 0.0);
        p.velocity.x = 3.0;
        p.velocity.z = -3.0;
        step(&mut p, &cfg, &set, InputFlags::default(), false, 0.016);
        // Wall face is 0.6 ahead; both axes stop, vertical does not.
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.velocity.z, 0.0);
    }

    #[test]
    fn zero_delta_is_identity() {
        let cfg = cfg();
        let set = flat_ground(2.0);
        let mut p = grounded_player(&cfg, 2.0);
        p.velocity = Vec3::new(1.0, 2.0, 3.0);
        let before = p;
        step(
            &mut p,
            &cfg,
            &set,
            InputFlags {
                forward: true,
                ..InputFlags::default()
            },
            true,
            0.0,
        );
        assert_eq!(p, before);
    }

    #[test]
    fn no_nan_from_zero_wish_dir() {
        let cfg = cfg();
        let set = ColliderSet::new();
        let mut p = PlayerState::spawn(&cfg);
        for _ in 0..10 {
            step(&mut p, &cfg, &set, InputFlags::default(), false, 0.016);
        }
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
    }

    #[test]
    fn look_pitch_is_clamped() {
        let cfg = cfg();
        let mut p = PlayerState::spawn(&cfg);
        p.apply_look(0.0, -1e6);
        assert!(p.pitch <= MAX_PITCH);
        p.apply_look(0.0, 1e6);
        assert!(p.pitch >= -MAX_PITCH);
        assert!(p.look_dir().is_finite());
    }

    #[test]
    fn facing_rotates_movement() {
        let cfg = cfg();
        let set = flat_ground(2.0);
        // Quarter turn left; forward should now move along negative x.
        let mut p = grounded_player(&cfg, 2.0);
        p.yaw = std::f32::consts::FRAC_PI_2;
        let flags = InputFlags {
            forward: true,
            ..InputFlags::default()
        };
        for _ in 0..10 {
            step(&mut p, &cfg, &set, flags, false, 0.016);
        }
        assert!(p.position.x < -0.01);
        assert!(p.position.z.abs() < 1e-3);
    }
}
