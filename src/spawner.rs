use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::Body;

/// Mass of a body placed with the pointer, in kilograms.
pub const ROGUE_MASS: f64 = 2.0e12;
/// Display radius of a body placed with the pointer, in pixels.
pub const ROGUE_RADIUS: f32 = 3.0;

/// Two-click placement of new bodies.
///
/// The first click records where the body goes; the second click releases
/// it there at rest. The second click's position is not used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Spawner {
    #[default]
    Idle,
    Armed { origin: DVec2 },
}

impl Spawner {
    /// Feeds one click (in simulation metres) and returns the body to add, if any.
    pub fn click(&mut self, at: DVec2) -> Option<Body> {
        match *self {
            Spawner::Idle => {
                *self = Spawner::Armed { origin: at };
                None
            }
            Spawner::Armed { origin } => {
                *self = Spawner::Idle;
                Some(Body::new(
                    "Rogue",
                    origin,
                    ROGUE_RADIUS,
                    Color::WHITE,
                    ROGUE_MASS,
                ))
            }
        }
    }

    /// The recorded first click while armed.
    pub fn pending(&self) -> Option<DVec2> {
        match self {
            Spawner::Idle => None,
            Spawner::Armed { origin } => Some(*origin),
        }
    }
}
