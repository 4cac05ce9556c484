/// A simulation-facing action produced by the key bindings.
///
/// The kernel consumes actions, never raw key events, so any host
/// (windowed, headless, replay) drives the same loop logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move toward the facing direction while held.
    Forward,
    /// Move away from the facing direction while held.
    Backward,
    /// Strafe left while held.
    Left,
    /// Strafe right while held.
    Right,
    /// Request a jump (edge-triggered).
    Jump,
    /// Toggle the house lamp on or off.
    ToggleLamp,
    /// Switch between the day and night lighting presets.
    ToggleDayNight,
}

/// Maps raw key identifiers (UI-event `code` strings) to actions.
#[derive(Debug, Clone)]
pub struct Bindings {
    pub forward: &'static str,
    pub backward: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub jump: &'static str,
    pub toggle_lamp: &'static str,
    pub toggle_day_night: &'static str,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            forward: "KeyW",
            backward: "KeyS",
            left: "KeyA",
            right: "KeyD",
            jump: "Space",
            toggle_lamp: "KeyL",
            toggle_day_night: "KeyT",
        }
    }
}

impl Bindings {
    /// Resolve a key identifier to an action. Arrow keys alias the
    /// movement bindings; everything unbound maps to `None`.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        if key == self.forward || key == "ArrowUp" {
            Some(Action::Forward)
        } else if key == self.backward || key == "ArrowDown" {
            Some(Action::Backward)
        } else if key == self.left || key == "ArrowLeft" {
            Some(Action::Left)
        } else if key == self.right || key == "ArrowRight" {
            Some(Action::Right)
        } else if key == self.jump {
            Some(Action::Jump)
        } else if key == self.toggle_lamp {
            Some(Action::ToggleLamp)
        } else if key == self.toggle_day_night {
            Some(Action::ToggleDayNight)
        } else {
            None
        }
    }
}
