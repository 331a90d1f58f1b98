use bevy::math::DVec2;

use super::G;
use crate::body::{Body, BodyId};

/// Force exerted on `body` by `other`, in newtons.
///
/// Coincident bodies divide by zero and yield a non-finite force.
pub fn attraction(body: &Body, other: &Body) -> DVec2 {
    let delta = other.position - body.position;
    let distance = delta.length();
    let magnitude = G * body.mass * other.mass / (distance * distance);
    let theta = delta.y.atan2(delta.x);
    DVec2::new(theta.cos(), theta.sin()) * magnitude
}

/// Sums the attraction of every other body on `target`.
///
/// Bodies are skipped by id, so two bodies sharing a position still pull on
/// each other. Whenever the other body is an anchor, the target's
/// `distance_to_anchor` is updated to the current separation.
pub fn net_force(bodies: &mut [Body], target: BodyId) -> DVec2 {
    let mut total = DVec2::ZERO;
    let mut anchor_distance = None;

    {
        let body = &bodies[target.0];
        for (index, other) in bodies.iter().enumerate() {
            if index == target.0 {
                continue;
            }
            if other.is_anchor {
                anchor_distance = Some((other.position - body.position).length());
            }
            total += attraction(body, other);
        }
    }

    if let Some(distance) = anchor_distance {
        bodies[target.0].distance_to_anchor = distance;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::AU;
    use bevy::prelude::Color;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn body_at(x: f64, y: f64, mass: f64) -> Body {
        Body::new("test", DVec2::new(x, y), 1.0, Color::WHITE, mass)
    }

    fn assert_dvec2_close(a: DVec2, b: DVec2, relative: f64) {
        let diff = (a - b).length();
        let scale = a.length().max(b.length()).max(f64::MIN_POSITIVE);
        assert!(
            diff / scale <= relative,
            "expected {:?} to be within {} (relative) of {:?}, diff {}",
            a,
            relative,
            b,
            diff
        );
    }

    #[test]
    fn attraction_follows_inverse_square_law() {
        let a = body_at(0.0, 0.0, 2.0e30);
        let b = body_at(3.0e10, 4.0e10, 6.0e24);

        let force = attraction(&a, &b);
        let expected = G * 2.0e30 * 6.0e24 / (5.0e10 * 5.0e10);

        assert!((force.length() - expected).abs() / expected < 1e-12);
        assert_dvec2_close(force.normalize(), DVec2::new(0.6, 0.8), 1e-12);
    }

    #[test]
    fn attraction_obeys_newtons_third_law() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = body_at(
                rng.random_range(-2.0 * AU..2.0 * AU),
                rng.random_range(-2.0 * AU..2.0 * AU),
                rng.random_range(1.0e20..1.0e30),
            );
            let b = body_at(
                rng.random_range(-2.0 * AU..2.0 * AU),
                rng.random_range(-2.0 * AU..2.0 * AU),
                rng.random_range(1.0e20..1.0e30),
            );

            let on_a = attraction(&a, &b);
            let on_b = attraction(&b, &a);
            assert_dvec2_close(on_a, -on_b, 1e-9);

            let delta = b.position - a.position;
            let expected = G * a.mass * b.mass / delta.length_squared();
            assert!((on_a.length() - expected).abs() / expected < 1e-9);
            assert!(on_a.normalize().dot(delta.normalize()) > 1.0 - 1e-9);
        }
    }

    #[test]
    fn net_force_sums_all_other_bodies() {
        let mut bodies = vec![
            body_at(0.0, 0.0, 1.0e24),
            body_at(1.0e9, 0.0, 1.0e24),
            body_at(-1.0e9, 0.0, 1.0e24),
            body_at(0.0, 2.0e9, 4.0e24),
        ];

        let force = net_force(&mut bodies, BodyId(0));
        // The two equal side bodies cancel; only the heavier one above remains.
        let expected = G * 1.0e24 * 4.0e24 / (2.0e9 * 2.0e9);
        assert!(force.x.abs() < expected * 1e-9);
        assert!((force.y - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn net_force_records_distance_to_anchor() {
        let mut bodies = vec![
            body_at(1.0e9, 1.0e9, 2.0e30).anchor(),
            body_at(-AU, 0.0, 6.0e24),
            body_at(0.5 * AU, 0.2 * AU, 3.0e23),
        ];

        for index in 0..bodies.len() {
            net_force(&mut bodies, BodyId(index));
        }

        let anchor = bodies[0].position;
        assert_eq!(bodies[0].distance_to_anchor, 0.0);
        for body in &bodies[1..] {
            let expected = (anchor - body.position).length();
            assert!((body.distance_to_anchor - expected).abs() <= expected * 1e-12);
        }
    }

    #[test]
    fn net_force_without_anchor_leaves_distance_untouched() {
        let mut bodies = vec![body_at(0.0, 0.0, 1.0e24), body_at(AU, 0.0, 1.0e24)];
        net_force(&mut bodies, BodyId(1));
        assert_eq!(bodies[1].distance_to_anchor, 0.0);
    }

    #[test]
    fn net_force_does_not_move_bodies() {
        let mut bodies = vec![
            body_at(0.0, 0.0, 2.0e30).anchor(),
            body_at(AU, 0.0, 6.0e24).with_velocity(DVec2::new(0.0, 3.0e4)),
        ];
        net_force(&mut bodies, BodyId(1));
        assert_eq!(bodies[1].position, DVec2::new(AU, 0.0));
        assert_eq!(bodies[1].velocity, DVec2::new(0.0, 3.0e4));
        assert!(bodies[1].trail().is_empty());
    }

    #[test]
    fn coincident_bodies_produce_non_finite_force() {
        let mut bodies = vec![body_at(AU, AU, 1.0e24), body_at(AU, AU, 1.0e24)];
        let force = net_force(&mut bodies, BodyId(0));
        assert!(!force.is_finite());
    }
}
