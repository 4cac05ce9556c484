//! Collision probing: static colliders and the two ray probes the
//! simulation runs every tick.
//!
//! # Invariants
//! - The collider set is append-only; registered colliders never move.
//! - Probes are pure queries; they never mutate the set.
//!
//! # Workaround
//! A single downward ray approximates ground support and a single forward
//! ray approximates an obstacle wall, as a workaround for narrow-phase
//! shape collision. This is deliberately crude: it does not resolve sliding
//! along surfaces, and grazing a corner can block both horizontal axes.

mod set;
mod shape;

pub use set::{ColliderId, ColliderSet, GroundHit};
pub use shape::{Aabb, Collider, HeightField, Ray, RayHit, Sphere};

/// Nearest downward hits closer than this count as ground support.
pub const GROUND_SUPPORT_DISTANCE: f32 = 2.0;

/// Forward hits closer than this zero horizontal velocity for the tick.
pub const FORWARD_BLOCK_DISTANCE: f32 = 1.0;

pub fn crate_info() -> &'static str {
    "skerry-collision v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("collision"));
    }
}
