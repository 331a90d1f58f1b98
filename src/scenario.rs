use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::Body;
use crate::physics::AU;

const YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
const BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
const RED: Color = Color::srgb(1.0, 0.0, 0.0);
const DARK_GRAY: Color = Color::srgb(80.0 / 255.0, 78.0 / 255.0, 81.0 / 255.0);

/// The sun and the four inner planets, starting on the x axis.
pub fn solar_system() -> Vec<Body> {
    vec![
        Body::new("Sun", DVec2::ZERO, 30.0, YELLOW, 1.98892e30).anchor(),
        Body::new("Earth", DVec2::new(-AU, 0.0), 16.0, BLUE, 5.9742e24)
            .with_velocity(DVec2::new(0.0, 29.783e3)),
        Body::new("Mars", DVec2::new(-1.524 * AU, 0.0), 12.0, RED, 6.39e23)
            .with_velocity(DVec2::new(0.0, 24.077e3)),
        Body::new("Mercury", DVec2::new(0.387 * AU, 0.0), 8.0, DARK_GRAY, 3.30e23)
            .with_velocity(DVec2::new(0.0, -47.4e3)),
        Body::new("Venus", DVec2::new(0.723 * AU, 0.0), 14.0, Color::WHITE, 4.8685e24)
            .with_velocity(DVec2::new(0.0, -35.02e3)),
    ]
}
