use glam::Vec3;

use crate::action::{Action, Bindings};

/// Currently-held movement keys. Written by key events, read-only to the
/// kinematics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputFlags {
    /// Desired movement direction in the player's local frame, normalized
    /// with a zero guard: no keys held yields the zero vector, never NaN.
    pub fn wish_dir(&self) -> Vec3 {
        let dir = Vec3::new(
            (self.right as i32 - self.left as i32) as f32,
            0.0,
            (self.forward as i32 - self.backward as i32) as f32,
        );
        dir.normalize_or_zero()
    }

    pub fn any_held(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// What the simulation loop reads at tick start. One-shot intents are
/// consumed out of `InputState` when the snapshot is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub flags: InputFlags,
    /// Edge-triggered jump intent. Kinematics applies it only when
    /// grounded; either way it is gone after this tick.
    pub jump_requested: bool,
    /// Whether the lamp visibility should flip this tick (press parity).
    pub toggle_lamp: bool,
    /// Whether the day/night preset should flip this tick (press parity).
    pub toggle_day_night: bool,
    /// Accumulated look delta (yaw, pitch) since the last snapshot.
    pub look_delta: (f32, f32),
}

/// Accumulates key and pointer events between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: Bindings,
    flags: InputFlags,
    jump_requested: bool,
    lamp_presses: u32,
    day_night_presses: u32,
    look_delta: (f32, f32),
}

impl InputState {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            flags: InputFlags::default(),
            jump_requested: false,
            lamp_presses: 0,
            day_night_presses: 0,
            look_delta: (0.0, 0.0),
        }
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    /// Handle a key-down event. Unbound keys are ignored.
    pub fn key_down(&mut self, key: &str) {
        let Some(action) = self.bindings.action_for(key) else {
            return;
        };
        tracing::trace!(?action, "key down");
        match action {
            Action::Forward => self.flags.forward = true,
            Action::Backward => self.flags.backward = true,
            Action::Left => self.flags.left = true,
            Action::Right => self.flags.right = true,
            Action::Jump => self.jump_requested = true,
            Action::ToggleLamp => self.lamp_presses += 1,
            Action::ToggleDayNight => self.day_night_presses += 1,
        }
    }

    /// Handle a key-up event. Only held-movement flags care.
    pub fn key_up(&mut self, key: &str) {
        match self.bindings.action_for(key) {
            Some(Action::Forward) => self.flags.forward = false,
            Some(Action::Backward) => self.flags.backward = false,
            Some(Action::Left) => self.flags.left = false,
            Some(Action::Right) => self.flags.right = false,
            _ => {}
        }
    }

    /// Accumulate a pointer look delta (applied at the next snapshot).
    pub fn push_look(&mut self, dx: f32, dy: f32) {
        self.look_delta.0 += dx;
        self.look_delta.1 += dy;
    }

    /// Release everything held. Hosts call this when input capture is
    /// lost so keys cannot stick.
    pub fn clear(&mut self) {
        self.flags = InputFlags::default();
        self.jump_requested = false;
        self.look_delta = (0.0, 0.0);
    }

    /// Take the per-tick snapshot, consuming one-shot intents and
    /// collapsing toggle presses to their parity.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            flags: self.flags,
            jump_requested: std::mem::take(&mut self.jump_requested),
            toggle_lamp: std::mem::take(&mut self.lamp_presses) % 2 == 1,
            toggle_day_night: std::mem::take(&mut self.day_night_presses) % 2 == 1,
            look_delta: std::mem::take(&mut self.look_delta),
        }
    }
}
