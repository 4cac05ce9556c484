use glam::Vec3;

use crate::shape::{Collider, Ray, RayHit};

/// Handle to a collider within its set. Indices are assigned in
/// registration order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// Result of the downward ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// Distance from the probe origin down to the surface.
    pub distance: f32,
    /// The surface point directly below the origin.
    pub point: Vec3,
}

/// The ordered, append-only set of static colliders built during scene
/// construction. Read-only during simulation.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
}

/// How far the probes look. Far enough to find ground from the spawn
/// height and anything the player could walk toward in one tick.
const PROBE_RANGE: f32 = 100.0;

impl ColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collider. Returns its handle.
    pub fn register(&mut self, collider: Collider) -> ColliderId {
        let id = ColliderId(self.colliders.len() as u32);
        tracing::debug!(id = id.0, "registered collider");
        self.colliders.push(collider);
        id
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0 as usize)
    }

    /// Nearest intersection across the whole set.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for collider in &self.colliders {
            if let Some(hit) = collider.raycast(ray) {
                match nearest {
                    Some(n) if n.distance <= hit.distance => {}
                    _ => nearest = Some(hit),
                }
            }
        }
        nearest
    }

    /// Cast straight down from `origin` to find supporting ground.
    /// An empty set (assets still loading) simply reports no ground.
    pub fn probe_down(&self, origin: Vec3) -> Option<GroundHit> {
        let ray = Ray::new(origin, Vec3::NEG_Y, PROBE_RANGE);
        self.raycast(&ray).map(|hit| GroundHit {
            distance: hit.distance,
            point: hit.point,
        })
    }

    /// Cast along `direction` from `origin`; returns the nearest obstacle
    /// distance, if any.
    pub fn probe_forward(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }
        let ray = Ray::new(origin, direction, PROBE_RANGE);
        self.raycast(&ray).map(|hit| hit.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Aabb, Sphere};

    fn flat_ground(height: f32) -> Collider {
        Collider::HeightField(crate::shape::HeightField::from_fn(50.0, 11, |_, _| height))
    }

    #[test]
    fn empty_set_reports_nothing() {
        let set = ColliderSet::new();
        assert!(set.probe_down(Vec3::new(0.0, 10.0, 0.0)).is_none());
        assert!(set.probe_forward(Vec3::ZERO, Vec3::NEG_Z).is_none());
    }

    #[test]
    fn registration_order_is_stable() {
        let mut set = ColliderSet::new();
        let a = set.register(flat_ground(0.0));
        let b = set.register(Collider::Sphere(Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        }));
        assert_eq!(a, ColliderId(0));
        assert_eq!(b, ColliderId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn probe_down_finds_ground() {
        let mut set = ColliderSet::new();
        set.register(flat_ground(2.0));
        let hit = set.probe_down(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-4);
        assert!((hit.point.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn nearest_hit_wins() {
        let mut set = ColliderSet::new();
        set.register(flat_ground(0.0));
        // A rock sitting on the ground below the probe.
        set.register(Collider::Sphere(Sphere {
            center: Vec3::new(0.0, 1.0, 0.0),
            radius: 1.0,
        }));
        let hit = set.probe_down(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        // Top of the rock (y=2) is nearer than the ground (y=0).
        assert!((hit.distance - 3.0).abs() < 1e-4);
    }

    #[test]
    fn probe_forward_reports_obstacle_distance() {
        let mut set = ColliderSet::new();
        set.register(Collider::Aabb(Aabb::from_center_size(
            Vec3::new(0.0, 1.0, -5.0),
            Vec3::splat(2.0),
        )));
        let d = set
            .probe_forward(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z)
            .unwrap();
        assert!((d - 4.0).abs() < 1e-4);
    }

    #[test]
    fn probe_forward_zero_direction_is_none() {
        let mut set = ColliderSet::new();
        set.register(flat_ground(0.0));
        assert!(set.probe_forward(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO).is_none());
    }
}
