mod body;
mod components;
mod physics;
mod render;
mod resources;
mod scenario;
mod simulation;
mod spawner;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::render::DrawList;
use crate::resources::{SimConfig, SimSettings};
use crate::scenario::solar_system;
use crate::simulation::Simulation;
use crate::systems::*;

fn main() {
    let config = SimConfig::default();
    let resolution = WindowResolution::new(config.window_width, config.window_height)
        .with_scale_factor_override(1.0);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(config.frame_rate))
        .insert_resource(Simulation::new(config, solar_system()))
        .init_resource::<DrawList>()
        .init_resource::<SimSettings>()
        .add_systems(EguiPrimaryContextPass, info_panel)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (handle_pointer, sync_discs, draw_trails, draw_spawn_preview).chain(),
        )
        .add_systems(FixedUpdate, advance_simulation)
        .run();
}
