use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A ray with a unit direction and a maximum cast distance.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            max_distance,
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest intersection of a ray with a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
}

/// A sphere collider (rocks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// An axis-aligned box collider (pier deck, placeholder buildings).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box from a center point and full extents along each axis.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// A sampled height grid over a square footprint centered on the origin
/// (the displaced island plane). Heights are bilinearly interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightField {
    half_extent: f32,
    cell_size: f32,
    samples_per_side: usize,
    heights: Vec<f32>,
}

impl HeightField {
    /// Sample a height function over `[-half_extent, half_extent]²` at
    /// `samples_per_side` points per axis.
    pub fn from_fn(
        half_extent: f32,
        samples_per_side: usize,
        mut height: impl FnMut(f32, f32) -> f32,
    ) -> Self {
        assert!(samples_per_side >= 2, "height field needs at least 2x2 samples");
        let cell_size = (half_extent * 2.0) / (samples_per_side - 1) as f32;
        let mut heights = Vec::with_capacity(samples_per_side * samples_per_side);
        for iz in 0..samples_per_side {
            for ix in 0..samples_per_side {
                let x = -half_extent + ix as f32 * cell_size;
                let z = -half_extent + iz as f32 * cell_size;
                heights.push(height(x, z));
            }
        }
        Self {
            half_extent,
            cell_size,
            samples_per_side,
            heights,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Interpolated surface height at (x, z); `None` outside the footprint.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        if x.abs() > self.half_extent || z.abs() > self.half_extent {
            return None;
        }
        let fx = (x + self.half_extent) / self.cell_size;
        let fz = (z + self.half_extent) / self.cell_size;
        let n = self.samples_per_side;
        let ix = (fx.floor() as usize).min(n - 2);
        let iz = (fz.floor() as usize).min(n - 2);
        let tx = (fx - ix as f32).clamp(0.0, 1.0);
        let tz = (fz - iz as f32).clamp(0.0, 1.0);

        let h00 = self.heights[iz * n + ix];
        let h10 = self.heights[iz * n + ix + 1];
        let h01 = self.heights[(iz + 1) * n + ix];
        let h11 = self.heights[(iz + 1) * n + ix + 1];
        let h0 = h00 + (h10 - h00) * tx;
        let h1 = h01 + (h11 - h01) * tx;
        Some(h0 + (h1 - h0) * tz)
    }

    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        // Vertical rays hit the surface directly under the origin.
        if ray.direction.y <= -0.9999 {
            let surface = self.height_at(ray.origin.x, ray.origin.z)?;
            let distance = ray.origin.y - surface;
            if distance < 0.0 || distance > ray.max_distance {
                return None;
            }
            return Some(RayHit {
                distance,
                point: Vec3::new(ray.origin.x, surface, ray.origin.z),
            });
        }

        // Oblique rays: fixed-step march until the ray dips below the surface.
        let step = self.cell_size * 0.5;
        let mut t = 0.0;
        let mut prev_t = 0.0;
        let mut prev_above = true;
        while t <= ray.max_distance {
            let p = ray.point_at(t);
            if let Some(surface) = self.height_at(p.x, p.z) {
                let above = p.y > surface;
                if !above {
                    // Refine between the last point above and this one below.
                    let hit_t = if prev_above { (prev_t + t) * 0.5 } else { t };
                    let hp = ray.point_at(hit_t);
                    let hy = self.height_at(hp.x, hp.z).unwrap_or(hp.y);
                    return Some(RayHit {
                        distance: hit_t,
                        point: Vec3::new(hp.x, hy, hp.z),
                    });
                }
                prev_above = above;
            }
            prev_t = t;
            t += step;
        }
        None
    }
}

/// Static collider shapes registered at scene-build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    HeightField(HeightField),
    Sphere(Sphere),
    Aabb(Aabb),
}

impl Collider {
    /// Nearest intersection with `ray`, if any within its max distance.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        match self {
            Collider::HeightField(hf) => hf.raycast(ray),
            Collider::Sphere(s) => raycast_sphere(s, ray),
            Collider::Aabb(b) => raycast_aabb(b, ray),
        }
    }
}

fn raycast_sphere(sphere: &Sphere, ray: &Ray) -> Option<RayHit> {
    let oc = ray.origin - sphere.center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - sphere.radius * sphere.radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = if -b - sqrt_disc >= 0.0 {
        -b - sqrt_disc
    } else {
        -b + sqrt_disc
    };
    if t < 0.0 || t > ray.max_distance {
        return None;
    }
    Some(RayHit {
        distance: t,
        point: ray.point_at(t),
    })
}

fn raycast_aabb(aabb: &Aabb, ray: &Ray) -> Option<RayHit> {
    let mut t_enter = 0.0f32;
    let mut t_exit = ray.max_distance;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        let (min, max) = (aabb.min[axis], aabb.max[axis]);
        if d.abs() < 1e-8 {
            if o < min || o > max {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = if inv >= 0.0 {
            ((min - o) * inv, (max - o) * inv)
        } else {
            ((max - o) * inv, (min - o) * inv)
        };
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }
    Some(RayHit {
        distance: t_enter,
        point: ray.point_at(t_enter),
    })
}
