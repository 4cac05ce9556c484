use glam::Vec3;

use skerry_input::{Bindings, InputState};
use skerry_scene::IslandScene;

use crate::animate;
use crate::clock::{FrameTiming, SimClock};
use crate::player::{self, PlayerState};

/// Upper bound on the kinematics delta. A stalled host (tab switch,
/// debugger pause) resumes with one long frame; integrating it whole
/// would teleport the player.
pub const MAX_DELTA: f32 = 0.1;

/// Per-tick output handed to the renderer collaborator alongside the
/// scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub tick: u64,
    pub timing: FrameTiming,
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub grounded: bool,
    pub captured: bool,
}

/// The frame orchestrator. Owns every piece of simulation state and runs
/// the tick sequence: clock, input snapshot, toggles, kinematics,
/// animator. One writer, fixed order, no ambient globals.
#[derive(Debug)]
pub struct Simulation {
    clock: SimClock,
    input: InputState,
    player: PlayerState,
    scene: IslandScene,
    captured: bool,
    tick: u64,
}

impl Simulation {
    pub fn new(scene: IslandScene) -> Self {
        let player = PlayerState::spawn(&scene.config);
        Self {
            clock: SimClock::new(),
            input: InputState::new(Bindings::default()),
            player,
            scene,
            captured: false,
            tick: 0,
        }
    }

    /// Event entry point for the host: key and pointer events land here
    /// between ticks.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn scene(&self) -> &IslandScene {
        &self.scene
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Flip captured/released mode. Losing capture releases held keys so
    /// none stick across the gap.
    pub fn set_captured(&mut self, captured: bool) {
        if self.captured && !captured {
            self.input.clear();
        }
        self.captured = captured;
        tracing::debug!(captured, "capture changed");
    }

    /// Advance one tick from wall time.
    pub fn tick(&mut self) -> FrameState {
        let timing = self.clock.tick();
        self.step(timing)
    }

    /// Advance one tick with an explicit delta. Headless hosts and tests
    /// drive the loop through this.
    pub fn tick_with(&mut self, delta: f32) -> FrameState {
        let timing = self.clock.tick_with(delta);
        self.step(timing)
    }

    fn step(&mut self, timing: FrameTiming) -> FrameState {
        self.tick += 1;
        let snapshot = self.input.snapshot();

        if snapshot.toggle_lamp {
            self.scene.graph.toggle_lamp();
        }
        if snapshot.toggle_day_night {
            self.scene.graph.toggle_day_night();
        }

        let delta = timing.delta.min(MAX_DELTA);
        if self.captured {
            let (dx, dy) = snapshot.look_delta;
            self.player.apply_look(dx, dy);
            player::step(
                &mut self.player,
                &self.scene.config,
                &self.scene.colliders,
                snapshot.flags,
                snapshot.jump_requested,
                delta,
            );
        } else {
            // No integration while released, but ground support and the
            // floor invariant still refresh so resuming is seamless.
            self.player.refresh_ground(&self.scene.config, &self.scene.colliders);
            self.player.clamp_to_floor(&self.scene.config);
        }

        // Animation runs off raw elapsed time, unaffected by the clamp.
        animate::advance(&mut self.scene.graph, &self.scene.config, timing.elapsed);

        FrameState {
            tick: self.tick,
            timing: FrameTiming {
                delta,
                elapsed: timing.elapsed,
            },
            position: self.player.position,
            velocity: self.player.velocity,
            yaw: self.player.yaw,
            pitch: self.player.pitch,
            grounded: self.player.can_jump,
            captured: self.captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skerry_common::IslandConfig;
    use skerry_scene::{IslandAssets, build_island};

    fn sim() -> Simulation {
        let scene = build_island(IslandConfig::default(), 42, &IslandAssets::new());
        Simulation::new(scene)
    }

    #[test]
    fn released_mode_does_not_integrate() {
        let mut sim = sim();
        sim.input_mut().key_down("KeyW");
        let start = sim.player().position;
        for _ in 0..10 {
            sim.tick_with(0.016);
        }
        let pos = sim.player().position;
        assert_eq!(pos.x, start.x);
        assert_eq!(pos.z, start.z);
    }

    #[test]
    fn captured_mode_moves_the_player() {
        let mut sim = sim();
        sim.set_captured(true);
        sim.input_mut().key_down("KeyW");
        for _ in 0..60 {
            sim.tick_with(0.016);
        }
        let pos = sim.player().position;
        assert!(pos.z < 15.0 - 0.1, "forward is negative z from spawn");
    }

    #[test]
    fn floor_invariant_holds_across_modes() {
        let mut sim = sim();
        let floor = sim.scene().config.floor_y();
        for i in 0..200 {
            if i == 50 {
                sim.set_captured(true);
            }
            if i == 150 {
                sim.set_captured(false);
            }
            let frame = sim.tick_with(0.05);
            assert!(frame.position.y >= floor);
        }
    }

    #[test]
    fn long_frame_delta_is_clamped() {
        let mut sim = sim();
        sim.set_captured(true);
        let frame = sim.tick_with(5.0);
        assert_eq!(frame.timing.delta, MAX_DELTA);
        // Elapsed keeps the real gap so animation does not rewind.
        assert_eq!(frame.timing.elapsed, 5.0);
    }

    #[test]
    fn toggles_apply_once_per_press() {
        let mut sim = sim();
        assert!(sim.scene().graph.lamp.unwrap().visible);
        sim.input_mut().key_down("KeyL");
        sim.tick_with(0.016);
        assert!(!sim.scene().graph.lamp.unwrap().visible);
        // Held key without a new press does nothing further.
        sim.tick_with(0.016);
        assert!(!sim.scene().graph.lamp.unwrap().visible);
    }

    #[test]
    fn day_night_double_press_round_trips() {
        let mut sim = sim();
        let sun = sim.scene().graph.sun.intensity;
        let sky = sim.scene().graph.sky_color;
        sim.input_mut().key_down("KeyT");
        sim.tick_with(0.016);
        sim.input_mut().key_down("KeyT");
        sim.tick_with(0.016);
        assert_eq!(sim.scene().graph.sun.intensity, sun);
        assert_eq!(sim.scene().graph.sky_color, sky);
    }

    #[test]
    fn losing_capture_releases_held_keys() {
        let mut sim = sim();
        sim.set_captured(true);
        sim.input_mut().key_down("KeyW");
        sim.tick_with(0.016);
        sim.set_captured(false);
        sim.set_captured(true);
        // Re-captured with nothing held; damping bleeds velocity off.
        for _ in 0..120 {
            sim.tick_with(0.016);
        }
        assert!(sim.player().velocity.z.abs() < 1e-2);
    }

    #[test]
    fn animation_runs_while_released() {
        let mut sim = sim();
        let before = sim.scene().graph.vehicle.unwrap().transform.position;
        for _ in 0..30 {
            sim.tick_with(0.1);
        }
        let after = sim.scene().graph.vehicle.unwrap().transform.position;
        assert_ne!(before, after);
    }

    #[test]
    fn tick_count_advances() {
        let mut sim = sim();
        sim.tick_with(0.016);
        sim.tick_with(0.016);
        assert_eq!(sim.tick_count(), 2);
    }
}
