use glam::Vec3;

use skerry_kernel::FrameState;
use skerry_scene::SceneGraph;

/// First-person camera configuration derived from player state.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space (the player's eye).
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl RenderView {
    /// View matching the player's eye and look direction.
    pub fn first_person(frame: &FrameState) -> Self {
        let (sy, cy) = frame.yaw.sin_cos();
        let (sp, cp) = frame.pitch.sin_cos();
        let look = Vec3::new(-sy * cp, sp, -cy * cp);
        Self {
            eye: frame.position,
            target: frame.position + look,
            fov_degrees: 75.0,
        }
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
        }
    }
}

/// Renderer-agnostic interface. The simulation submits one frame of
/// state per tick; the renderer produces its output without mutating
/// anything.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given frame state, scene graph, and view.
    fn render(&self, frame: &FrameState, graph: &SceneGraph, view: &RenderView) -> Self::Output;
}

/// Debug text renderer. Produces a human-readable summary of the frame,
/// useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameState, graph: &SceneGraph, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (tick={}, t={:.2}s, dt={:.3}s) ===\n",
            frame.tick, frame.timing.elapsed, frame.timing.delta
        ));
        out.push_str(&format!(
            "Player: pos=({:.2}, {:.2}, {:.2}) vel=({:.2}, {:.2}, {:.2}) yaw={:.2} {}{}\n",
            frame.position.x,
            frame.position.y,
            frame.position.z,
            frame.velocity.x,
            frame.velocity.y,
            frame.velocity.z,
            frame.yaw,
            if frame.grounded { "grounded" } else { "airborne" },
            if frame.captured { " captured" } else { "" },
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));
        out.push_str(&format!(
            "Scene: {:?}, sun={:.1}, props={}\n",
            graph.phase,
            graph.sun.intensity,
            graph.prop_count()
        ));
        if let Some(vehicle) = &graph.vehicle {
            let p = vehicle.transform.position;
            out.push_str(&format!("Boat: pos=({:.2}, {:.2}, {:.2})\n", p.x, p.y, p.z));
        }
        if let Some(lamp) = &graph.lamp {
            out.push_str(&format!(
                "Lamp: {} intensity={:.1}\n",
                if lamp.visible { "on" } else { "off" },
                lamp.intensity
            ));
        }
        for (id, prop) in graph.props() {
            let p = prop.transform.position;
            out.push_str(&format!(
                "  [{:.8}] {} pos=({:.2}, {:.2}, {:.2})\n",
                &id.0.to_string()[..8],
                prop.name,
                p.x,
                p.y,
                p.z
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skerry_common::IslandConfig;
    use skerry_kernel::Simulation;
    use skerry_scene::{IslandAssets, build_island};

    fn sim() -> Simulation {
        let scene = build_island(IslandConfig::default(), 3, &IslandAssets::new());
        Simulation::new(scene)
    }

    #[test]
    fn debug_renderer_summarizes_the_frame() {
        let mut sim = sim();
        let frame = sim.tick_with(0.016);
        let view = RenderView::first_person(&frame);
        let output = DebugTextRenderer::new().render(&frame, &sim.scene().graph, &view);

        assert!(output.contains("tick=1"));
        assert!(output.contains("Player:"));
        assert!(output.contains("Boat:"));
        assert!(output.contains("Lamp: on"));
    }

    #[test]
    fn first_person_view_tracks_the_eye() {
        let mut sim = sim();
        let frame = sim.tick_with(0.016);
        let view = RenderView::first_person(&frame);
        assert_eq!(view.eye, frame.position);
        // Yaw 0 looks down negative z.
        assert!(view.target.z < view.eye.z);
        assert_eq!(view.fov_degrees, 75.0);
    }

    #[test]
    fn render_does_not_mutate_state() {
        let mut sim = sim();
        let frame = sim.tick_with(0.016);
        let view = RenderView::default();
        let a = DebugTextRenderer::new().render(&frame, &sim.scene().graph, &view);
        let b = DebugTextRenderer::new().render(&frame, &sim.scene().graph, &view);
        assert_eq!(a, b);
    }
}
