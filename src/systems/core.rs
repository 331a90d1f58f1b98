use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::input::EguiWantsInput;

use crate::components::*;
use crate::render::{DrawList, screen_to_canvas};
use crate::resources::*;
use crate::simulation::Simulation;

/// Marker drawn at the armed spawn origin.
const PREVIEW_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const PREVIEW_RADIUS: f32 = 3.0;

/// Sets up the camera, the shared disc mesh and the trail stroke width.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut config_store: ResMut<GizmoConfigStore>,
    simulation: Res<Simulation>,
) {
    commands.spawn(Camera2d);
    commands.insert_resource(DiscMesh(meshes.add(Circle::new(1.0))));

    let (gizmo_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line.width = simulation.config().trail_width;

    info!(
        "simulating {} bodies at {} frames/s, {} s per frame",
        simulation.bodies().len(),
        simulation.config().frame_rate,
        simulation.config().dt
    );
}

/// Runs one simulation frame per fixed tick and records what it drew.
pub fn advance_simulation(mut simulation: ResMut<Simulation>, mut draw_list: ResMut<DrawList>) {
    simulation.advance_frame(&mut *draw_list);
}

/// Forwards primary-button presses to the spawner unless egui owns the pointer.
pub fn handle_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    egui_input: Res<EguiWantsInput>,
    mut simulation: ResMut<Simulation>,
) {
    if !mouse.just_pressed(MouseButton::Left) || egui_input.wants_any_pointer_input() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    simulation.click(cursor);
}

/// Moves, scales and recolours one disc entity per presented circle,
/// spawning discs for circles that do not have one yet.
pub fn sync_discs(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    disc_mesh: Res<DiscMesh>,
    simulation: Res<Simulation>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(
        &Disc,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let viewport = simulation.config().viewport();
    let mut known = 0;

    for (disc, mut transform, mut visibility, material) in query.iter_mut() {
        known = known.max(**disc + 1);
        let Some(circle) = draw_list.circles.get(**disc) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        *visibility = Visibility::Inherited;
        transform.translation =
            screen_to_canvas(circle.center, viewport.width, viewport.height).extend(0.0);
        transform.scale = Vec3::splat(circle.radius);

        let stale = materials
            .get(&material.0)
            .is_some_and(|m| m.color != circle.color);
        if stale && let Some(m) = materials.get_mut(&material.0) {
            m.color = circle.color;
        }
    }

    for (index, circle) in draw_list.circles.iter().enumerate().skip(known) {
        commands.spawn((
            Disc(index),
            Mesh2d(disc_mesh.0.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(circle.color))),
            Transform::from_translation(
                screen_to_canvas(circle.center, viewport.width, viewport.height).extend(0.0),
            )
            .with_scale(Vec3::splat(circle.radius)),
            Visibility::default(),
        ));
    }
}

/// Draws the presented orbit trails when enabled in settings.
pub fn draw_trails(
    mut gizmos: Gizmos,
    draw_list: Res<DrawList>,
    simulation: Res<Simulation>,
    settings: Res<SimSettings>,
) {
    if !settings.show_trails {
        return;
    }

    let viewport = simulation.config().viewport();
    for polyline in &draw_list.polylines {
        gizmos.linestrip_2d(
            polyline
                .points
                .iter()
                .map(|p| screen_to_canvas(*p, viewport.width, viewport.height)),
            polyline.color,
        );
    }
}

/// Marks the armed spawn origin and joins it to the cursor.
pub fn draw_spawn_preview(
    mut gizmos: Gizmos,
    windows: Query<&Window, With<PrimaryWindow>>,
    simulation: Res<Simulation>,
    settings: Res<SimSettings>,
) {
    if !settings.show_spawn_preview {
        return;
    }
    let Some(origin) = simulation.spawner().pending() else {
        return;
    };

    let viewport = simulation.config().viewport();
    let origin = screen_to_canvas(viewport.to_screen(origin), viewport.width, viewport.height);

    if let Ok(window) = windows.single()
        && let Some(cursor) = window.cursor_position()
    {
        let cursor = screen_to_canvas(cursor, viewport.width, viewport.height);
        gizmos.line_2d(origin, cursor, Color::WHITE);
    }
    gizmos.circle_2d(Isometry2d::from_translation(origin), PREVIEW_RADIUS, PREVIEW_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyId;
    use crate::scenario::solar_system;
    use bevy::ecs::system::{RunSystemOnce, SystemState};

    fn world_with_simulation() -> World {
        let mut world = World::new();
        world.insert_resource(Simulation::new(SimConfig::default(), solar_system()));
        world.insert_resource(DrawList::default());
        world
    }

    #[test]
    fn advance_simulation_steps_and_presents_one_frame() {
        let mut world = world_with_simulation();

        let mut system_state: SystemState<(ResMut<Simulation>, ResMut<DrawList>)> =
            SystemState::new(&mut world);

        for _ in 0..3 {
            let (simulation, draw_list) = system_state.get_mut(&mut world);
            advance_simulation(simulation, draw_list);
        }
        system_state.apply(&mut world);

        let simulation = world.resource::<Simulation>();
        let draw_list = world.resource::<DrawList>();
        assert_eq!(simulation.frames(), 3);
        assert_eq!(draw_list.frames_presented, 3);
        assert_eq!(draw_list.circles.len(), simulation.bodies().len());

        let earth = simulation.body(BodyId(1)).expect("earth present");
        assert_eq!(earth.trail().len(), 3);
    }

    #[test]
    fn sync_discs_spawns_one_disc_per_circle() {
        let mut world = world_with_simulation();
        world.init_resource::<Assets<ColorMaterial>>();
        world.insert_resource(DiscMesh(Handle::default()));

        let mut system_state: SystemState<(ResMut<Simulation>, ResMut<DrawList>)> =
            SystemState::new(&mut world);
        {
            let (simulation, draw_list) = system_state.get_mut(&mut world);
            advance_simulation(simulation, draw_list);
        }

        world
            .run_system_once(sync_discs)
            .expect("sync_discs runs");
        world
            .run_system_once(sync_discs)
            .expect("sync_discs runs again");

        let mut discs = world.query::<(&Disc, &Transform)>();
        let mut found: Vec<(usize, Vec3)> = discs
            .iter(&world)
            .map(|(disc, transform)| (**disc, transform.scale))
            .collect();
        found.sort_by_key(|(index, _)| *index);

        assert_eq!(found.len(), 5);
        assert_eq!(found[0], (0, Vec3::splat(30.0)));
        assert_eq!(found[1], (1, Vec3::splat(16.0)));

        let sun = discs
            .iter(&world)
            .find(|(disc, _)| ***disc == 0)
            .map(|(_, transform)| transform.translation)
            .expect("sun disc");
        assert_eq!(sun, Vec3::ZERO);
    }
}
