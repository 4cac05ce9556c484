//! Input handling: raw key identifiers mapped to actions, accumulated
//! between ticks, and read as a snapshot at tick start.
//!
//! # Invariants
//! - The simulation loop consumes actions via snapshots, never raw events,
//!   decoupling event timing from tick timing.
//! - Jump intent is one-shot: consumed (or dropped) each tick, never queued.
//! - Unbound keys are ignored.

mod action;
mod state;

pub use action::{Action, Bindings};
pub use state::{InputFlags, InputSnapshot, InputState};

pub fn crate_info() -> &'static str {
    "skerry-input v0.1.0"
}
