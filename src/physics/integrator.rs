use bevy::math::DVec2;

use crate::body::Body;

/// Advances `body` by one semi-implicit Euler step of `dt` seconds.
///
/// The velocity is kicked first and the position drifts with the new
/// velocity. The resulting position is appended to the body's trail.
pub fn step(body: &mut Body, force: DVec2, dt: f64) {
    body.velocity += force / body.mass * dt;
    body.position += body.velocity * dt;
    let position = body.position;
    body.trail_mut().push(position);
}
