//! Shared types and world constants for the skerry island simulation.
//!
//! # Invariants
//! - `IslandConfig` values are fixed for the lifetime of a scene.
//! - All shared types are plain values; no interior mutability.

mod types;

pub use types::{Color, IslandConfig, PropId, Transform};

pub fn crate_info() -> &'static str {
    "skerry-common v0.1.0"
}
