use bevy::math::DVec2;
use bevy::prelude::*;
use std::collections::VecDeque;

/// Stable handle to a body: its index in the simulation's collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Past positions of a body, oldest first, used for trail rendering.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    history: VecDeque<DVec2>,
    capacity: Option<usize>,
}

impl Trail {
    /// A trail that keeps at most `capacity` points, dropping the oldest.
    /// `None` keeps every point.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            history: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        self.history.push_back(point);
        if let Some(capacity) = self.capacity
            && self.history.len() > capacity
        {
            self.history.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.history.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.history.iter().copied()
    }
}

/// A massive body in simulation space (metres, m/s, kg).
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    /// Marks the body other bodies measure `distance_to_anchor` against.
    pub is_anchor: bool,
    /// Distance to the anchor as of the last force pass; 0 until then.
    pub distance_to_anchor: f64,
    radius: f32,
    color: Color,
    trail: Trail,
}

impl Body {
    /// Mass is trusted to be positive.
    pub fn new(name: impl Into<String>, position: DVec2, radius: f32, color: Color, mass: f64) -> Self {
        Self {
            name: name.into(),
            position,
            velocity: DVec2::ZERO,
            mass,
            is_anchor: false,
            distance_to_anchor: 0.0,
            radius,
            color,
            trail: Trail::default(),
        }
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn anchor(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    /// Replaces the (empty) trail with one bounded to `capacity` points.
    pub fn with_trail_capacity(mut self, capacity: Option<usize>) -> Self {
        self.trail = Trail::with_capacity(capacity);
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub(crate) fn trail_mut(&mut self) -> &mut Trail {
        &mut self.trail
    }
}
