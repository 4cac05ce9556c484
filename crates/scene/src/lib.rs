//! Scene state: the handles the procedural animator writes into, the prop
//! registry the renderer reads, and one-time island construction.
//!
//! # Invariants
//! - Colliders and prop placements are fixed once construction finishes.
//! - Optional handles (water, vehicle, lamp) may be absent at any time;
//!   consumers skip the corresponding sub-update instead of failing.
//! - Construction is deterministic given a seed.

mod graph;
mod island;

pub use graph::{
    AmbientLight, DayNight, Lamp, Prop, SceneGraph, SunLight, Vehicle, WaterSurface,
};
pub use island::{IslandAssets, IslandScene, build_island, terrain_height};

pub fn crate_info() -> &'static str {
    "skerry-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
