//! Top-Menü (File, Load Scenario, Painting Options, View).

use crate::app::{AppIntent, AppState};
use crate::shared::PaintOption;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Select RomFS...").clicked() {
                    events.push(AppIntent::SelectRomRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            let rom_selected = state.rom.is_rom_selected();
            ui.add_enabled_ui(rom_selected, |ui| {
                ui.menu_button("Load Scenario", |ui| {
                    for scenario in state.rom.available_scenarios() {
                        let current = state
                            .scenario()
                            .is_some_and(|loaded| loaded.scenario == scenario);
                        if ui
                            .selectable_label(current, scenario.long_name())
                            .clicked()
                        {
                            events.push(AppIntent::OpenScenarioRequested { scenario });
                            ui.close();
                        }
                    }
                });
            });

            ui.menu_button("Painting Options", |ui| {
                for option in PaintOption::ALL {
                    let mut enabled = state.options.paint(option);
                    if ui.checkbox(&mut enabled, option.label()).changed() {
                        events.push(AppIntent::PaintOptionToggled { option, enabled });
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Dread Level Viewer v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
