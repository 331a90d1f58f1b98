use bevy::prelude::*;

use crate::physics::{AU, DAY};
use crate::render::Viewport;

/// Where drawing happens relative to integration within a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameOrder {
    /// Each body is drawn with its pre-step state and then stepped, so the
    /// picture trails the physics by one step.
    #[default]
    DrawThenStep,
    /// Each body is stepped and then drawn with its new state.
    StepThenDraw,
}

/// Construction-time parameters of the simulation and its display.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub pixels_per_meter: f64,
    /// Simulation frames per second.
    pub frame_rate: f64,
    /// Seconds of simulated time per frame.
    pub dt: f64,
    /// Stroke width of orbit trails, in pixels.
    pub trail_width: f32,
    /// Maximum points kept per trail; `None` keeps the whole orbit.
    pub trail_capacity: Option<usize>,
    pub frame_order: FrameOrder,
}

// --- Simulation Defaults ---
/// Default display edge length in pixels.
pub const DEFAULT_WINDOW_SIZE: u32 = 800;
/// Default frame rate of the fixed simulation schedule.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;
/// Default trail stroke width.
pub const DEFAULT_TRAIL_WIDTH: f32 = 2.0;

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_SIZE,
            window_height: DEFAULT_WINDOW_SIZE,
            pixels_per_meter: 200.0 / AU,
            frame_rate: DEFAULT_FRAME_RATE,
            dt: DAY,
            trail_width: DEFAULT_TRAIL_WIDTH,
            trail_capacity: None,
            frame_order: FrameOrder::default(),
        }
    }
}

impl SimConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.window_width as f32,
            height: self.window_height as f32,
            pixels_per_meter: self.pixels_per_meter,
        }
    }
}

/// User-facing toggles that only affect presentation.
#[derive(Resource)]
pub struct SimSettings {
    pub show_trails: bool,
    pub show_spawn_preview: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            show_trails: true,
            show_spawn_preview: true,
        }
    }
}

/// Shared unit-circle mesh, scaled per body when drawing discs.
#[derive(Resource)]
pub struct DiscMesh(pub Handle<Mesh>);
