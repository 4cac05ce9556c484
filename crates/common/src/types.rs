use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a prop in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropId(pub Uuid);

impl PropId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PropId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform at a position with identity rotation and unit scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

/// Fixed world constants shared by scene construction and the simulation.
///
/// These pin the island's proportions and the feel of player movement.
/// Changing them mid-scene is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IslandConfig {
    /// Height of the water plane in world units.
    pub water_level: f32,
    /// Island radius scale; terrain, prop and orbit placement derive from it.
    pub island_size: f32,
    /// Player eye height above the surface the player stands on.
    pub player_height: f32,
    /// Downward acceleration in units/s².
    pub gravity: f32,
    /// Vertical velocity applied on a successful jump, units/s.
    pub jump_velocity: f32,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            water_level: 0.2,
            island_size: 50.0,
            player_height: 1.5,
            gravity: 30.0,
            jump_velocity: 10.0,
        }
    }
}

impl IslandConfig {
    /// The lowest Y the player may occupy: standing on the water surface.
    pub fn floor_y(&self) -> f32 {
        self.water_level + self.player_height
    }

    /// Initial player position: above the water, south of the island center.
    pub fn player_spawn(&self) -> Vec3 {
        Vec3::new(0.0, self.player_height + self.water_level + 5.0, 15.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_id_uniqueness() {
        let a = PropId::new();
        let b = PropId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex(0x87ceeb);
        assert!((c.r - 0x87 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0xce as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xeb as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn floor_is_water_plus_eye_height() {
        let cfg = IslandConfig::default();
        assert_eq!(cfg.floor_y(), 0.2 + 1.5);
    }

    #[test]
    fn spawn_starts_above_floor() {
        let cfg = IslandConfig::default();
        assert!(cfg.player_spawn().y > cfg.floor_y());
    }
}
