//! Screen mapping and the drawing seam between the simulation and the window.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Linear map from simulation metres to screen pixels.
///
/// Screen space has its origin at the top-left corner with y growing
/// downwards; the simulation origin sits at the centre of the display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixels_per_meter: f64,
}

impl Viewport {
    pub fn to_screen(&self, point: DVec2) -> Vec2 {
        let scaled = point * self.pixels_per_meter;
        Vec2::new(
            (scaled.x + self.width as f64 / 2.0) as f32,
            (scaled.y + self.height as f64 / 2.0) as f32,
        )
    }

    pub fn to_world(&self, point: Vec2) -> DVec2 {
        let centered = DVec2::new(
            point.x as f64 - self.width as f64 / 2.0,
            point.y as f64 - self.height as f64 / 2.0,
        );
        centered / self.pixels_per_meter
    }
}

/// Receives draw commands in screen pixels.
pub trait Renderer {
    /// Starts a new frame, discarding whatever was drawn before.
    fn clear(&mut self);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Connected line through `points` in order, at the configured stroke width.
    fn draw_polyline(&mut self, points: Vec<Vec2>, color: Color);

    fn present(&mut self) {}
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawPolyline {
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// Records one frame of draw commands for the presentation systems to replay.
#[derive(Resource, Default, Debug)]
pub struct DrawList {
    pub circles: Vec<DrawCircle>,
    pub polylines: Vec<DrawPolyline>,
    pending_circles: Vec<DrawCircle>,
    pending_polylines: Vec<DrawPolyline>,
    pub frames_presented: u64,
}

impl Renderer for DrawList {
    fn clear(&mut self) {
        self.pending_circles.clear();
        self.pending_polylines.clear();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending_circles.push(DrawCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_polyline(&mut self, points: Vec<Vec2>, color: Color) {
        self.pending_polylines.push(DrawPolyline { points, color });
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.circles, &mut self.pending_circles);
        std::mem::swap(&mut self.polylines, &mut self.pending_polylines);
        self.frames_presented += 1;
    }
}

/// Converts a screen pixel into Bevy's 2D world space (origin centred, y up).
pub fn screen_to_canvas(point: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(point.x - width / 2.0, height / 2.0 - point.y)
}
