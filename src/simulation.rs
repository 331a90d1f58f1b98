use bevy::prelude::*;

use crate::body::{Body, BodyId};
use crate::physics::{self, DAY};
use crate::render::Renderer;
use crate::resources::{FrameOrder, SimConfig};
use crate::spawner::Spawner;

/// Owns every body and drives one frame of drawing and integration at a time.
///
/// Bodies are only ever appended, so a `BodyId` stays valid for the whole run.
#[derive(Resource, Debug)]
pub struct Simulation {
    config: SimConfig,
    bodies: Vec<Body>,
    spawner: Spawner,
    frames: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut simulation = Self {
            config,
            bodies: Vec::new(),
            spawner: Spawner::default(),
            frames: 0,
        };
        for body in bodies {
            simulation.push(body);
        }
        simulation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_days(&self) -> f64 {
        self.frames as f64 * self.config.dt / DAY
    }

    /// Adds a freshly built body; its trail takes the configured capacity.
    pub fn push(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies
            .push(body.with_trail_capacity(self.config.trail_capacity));
        id
    }

    /// Feeds a pointer press at a screen pixel to the spawner.
    pub fn click(&mut self, screen: Vec2) -> Option<BodyId> {
        let at = self.config.viewport().to_world(screen);
        match self.spawner.click(at) {
            Some(body) => {
                info!("spawned {} at ({:.3e}, {:.3e}) m", body.name, at.x, at.y);
                Some(self.push(body))
            }
            None => {
                debug!("spawner armed at ({:.3e}, {:.3e}) m", at.x, at.y);
                None
            }
        }
    }

    /// Runs one frame: every body is drawn and stepped in collection order,
    /// each reading the others' state as it stands at that moment.
    pub fn advance_frame<R: Renderer>(&mut self, renderer: &mut R) {
        renderer.clear();
        for index in 0..self.bodies.len() {
            let id = BodyId(index);
            match self.config.frame_order {
                FrameOrder::DrawThenStep => {
                    self.draw_body(id, renderer);
                    self.step_body(id);
                }
                FrameOrder::StepThenDraw => {
                    self.step_body(id);
                    self.draw_body(id, renderer);
                }
            }
        }
        renderer.present();
        self.frames += 1;
    }

    fn step_body(&mut self, id: BodyId) {
        let was_finite = self.bodies[id.0].position.is_finite();
        let force = physics::net_force(&mut self.bodies, id);
        let body = &mut self.bodies[id.0];
        physics::step(body, force, self.config.dt);

        if was_finite && !body.position.is_finite() {
            warn!(
                "{} left finite space on frame {}; a zero-distance encounter is likely",
                body.name, self.frames
            );
        }
    }

    fn draw_body<R: Renderer>(&self, id: BodyId, renderer: &mut R) {
        let viewport = self.config.viewport();
        let body = &self.bodies[id.0];

        if body.trail().len() > 2 {
            let points = body.trail().iter().map(|p| viewport.to_screen(p)).collect();
            renderer.draw_polyline(points, body.color());
        }
        renderer.draw_circle(viewport.to_screen(body.position), body.radius(), body.color());
    }
}
