//! Simulation kernel: the per-tick frame orchestrator and everything it
//! sequences, from the clock through kinematics to the procedural animator.
//!
//! # Invariants
//! - Exactly one writer per tick; components run in a fixed order with no
//!   concurrency.
//! - The kinematics step integrates only while input is captured; the
//!   floor clamp and ground probe run every tick regardless.
//! - The animator is a pure function of elapsed time.

pub mod animate;
pub mod clock;
pub mod player;
pub mod sim;

pub use clock::{FrameTiming, SimClock};
pub use player::PlayerState;
pub use sim::{FrameState, Simulation};

pub fn crate_info() -> &'static str {
    "skerry-kernel v0.1.0"
}
