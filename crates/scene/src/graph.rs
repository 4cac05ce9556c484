use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use skerry_common::{Color, PropId, Transform};

/// Discrete lighting preset. Toggling is a hard switch, not a transition;
/// toggling twice restores the exact original values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNight {
    Day,
    Night,
}

impl DayNight {
    pub fn toggled(self) -> Self {
        match self {
            DayNight::Day => DayNight::Night,
            DayNight::Night => DayNight::Day,
        }
    }

    pub fn sun_intensity(self) -> f32 {
        match self {
            DayNight::Day => 3.0,
            DayNight::Night => 0.3,
        }
    }

    /// Sky and fog share this color in both presets.
    pub fn sky_color(self) -> Color {
        match self {
            DayNight::Day => Color::from_hex(0x87ceeb),
            DayNight::Night => Color::from_hex(0x0a1a2a),
        }
    }
}

/// The animated water plane. The renderer reads `time` as its wave-phase
/// uniform; the simulation advances it every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSurface {
    pub time: f32,
    pub base_height: f32,
}

/// The orbiting boat. The animator rewrites the transform every tick from
/// elapsed time alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub transform: Transform,
    /// Resting height the vertical bob oscillates around.
    pub base_height: f32,
}

/// The flickering point light inside the house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lamp {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub visible: bool,
}

impl Lamp {
    /// Base intensity the flicker oscillates around.
    pub const BASE_INTENSITY: f32 = 50.0;
}

/// The directional sun light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// Soft fill light for overall illumination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// A static visual prop (tree, rock, pier, building). The renderer draws
/// it by model name; the simulation never moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub model: String,
    pub transform: Transform,
}

/// Everything the renderer collaborator reads and the animator writes.
///
/// Props use a BTreeMap so iteration order is deterministic across
/// platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    pub phase: DayNight,
    pub sun: SunLight,
    pub ambient: AmbientLight,
    pub sky_color: Color,
    pub fog_color: Color,
    pub water: Option<WaterSurface>,
    pub vehicle: Option<Vehicle>,
    pub lamp: Option<Lamp>,
    props: BTreeMap<PropId, Prop>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// An empty daytime scene with no optional handles attached.
    pub fn new() -> Self {
        let phase = DayNight::Day;
        Self {
            phase,
            sun: SunLight {
                position: Vec3::new(50.0, 70.0, 30.0),
                intensity: phase.sun_intensity(),
            },
            ambient: AmbientLight {
                color: Color::from_hex(0x607080),
                intensity: 0.8,
            },
            sky_color: phase.sky_color(),
            fog_color: phase.sky_color(),
            water: None,
            vehicle: None,
            lamp: None,
            props: BTreeMap::new(),
        }
    }

    pub fn add_prop(&mut self, prop: Prop) -> PropId {
        let id = PropId::new();
        self.props.insert(id, prop);
        id
    }

    pub fn props(&self) -> &BTreeMap<PropId, Prop> {
        &self.props
    }

    pub fn prop_count(&self) -> usize {
        self.props.len()
    }

    /// Flip lamp visibility. Skipped silently while the lamp handle is
    /// absent (still loading).
    pub fn toggle_lamp(&mut self) {
        if let Some(lamp) = &mut self.lamp {
            lamp.visible = !lamp.visible;
            tracing::debug!(visible = lamp.visible, "lamp toggled");
        }
    }

    /// Switch between the two lighting presets, updating sun intensity
    /// and sky/fog color together.
    pub fn toggle_day_night(&mut self) {
        self.phase = self.phase.toggled();
        self.sun.intensity = self.phase.sun_intensity();
        self.sky_color = self.phase.sky_color();
        self.fog_color = self.phase.sky_color();
        tracing::debug!(phase = ?self.phase, "day/night toggled");
    }
}
