//! Renderer collaborator interface.
//!
//! # Invariants
//! - Renderers read frame state and the scene graph; they never mutate
//!   simulation state.
//! - The simulation calls `render` exactly once per tick.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "skerry-render v0.1.0"
}
