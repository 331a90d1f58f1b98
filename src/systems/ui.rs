use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::resources::SimSettings;
use crate::simulation::Simulation;

/// Formats a distance in metres as kilometres with one decimal.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

pub fn info_panel(
    mut contexts: EguiContexts,
    simulation: Res<Simulation>,
    mut settings: ResMut<SimSettings>,
    mut frames_rendered: Local<usize>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Planet Simulation")
            .default_pos(egui::pos2(10.0, 10.0))
            .max_size([280.0, 320.0])
            .vscroll(true)
            .show(ctx, |ui| {
                ui.heading("Simulation");
                ui.label(format!("Bodies: {}", simulation.bodies().len()));
                ui.label(format!("Elapsed: {:.0} days", simulation.elapsed_days()));

                ui.separator();
                ui.heading("Distance to Sun");
                for body in simulation.bodies().iter().filter(|b| !b.is_anchor) {
                    ui.label(format!(
                        "{}: {}",
                        body.name,
                        format_distance_km(body.distance_to_anchor)
                    ));
                }

                ui.separator();
                ui.heading("Display");
                ui.checkbox(&mut settings.show_trails, "Show Orbit Trails");
                ui.checkbox(&mut settings.show_spawn_preview, "Show Spawn Preview");

                ui.separator();
                ui.heading("Controls");
                ui.label("Click to pick a spot, click again to release a rogue body");
            });
    }
}
