//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match (state.rom.rom_path(), state.rom.version()) {
                (Some(path), Some(version)) => {
                    ui.label(format!("RomFS: {} ({})", path, version));
                }
                _ => {
                    ui.label("No RomFS selected");
                }
            }

            ui.separator();

            if let Some(scenario) = state.scenario() {
                ui.label(format!(
                    "{} | Actors: {} | Selected: {}",
                    scenario.scenario.long_name(),
                    scenario.actor_count(),
                    state.selection.record_count()
                ));
            } else {
                ui.label("No scenario loaded");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.0}, {:.0})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusDismissed);
                }
            }
        });
    });

    events
}
