//! Dread Level Viewer.
//!
//! Viewer für Szenarien aus einem extrahierten Metroid-Dread-RomFS:
//! Actors, Collision-Kameras, Subareas und Navmesh-Geometrie.

use dread_level_viewer::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Dread Level Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1440.0, 900.0])
                .with_title("Dread Level Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Dread Level Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    tree_panel: ui::TreePanelState,
    window_title: String,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte); RomFS wird direkt gewählt
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(viewer_options);
        state.config_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            tree_panel: ui::TreePanelState::default(),
            window_title: String::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::PointerMoved { .. }
            )
        });

        self.process_events(events);

        self.sync_window_title(ctx);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_tree_panel(ctx, &self.state, &mut self.tree_panel));
        events.extend(ui::render_data_panel(ctx, &self.state));
        events.extend(ui::handle_rom_dialog(
            &mut self.state.ui,
            self.state.options.romfs_dir.as_deref(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                let hovered = self.state.selection.hovered();

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                    hovered.as_ref(),
                    self.state.ui.status_message.is_some(),
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                let painter = ui.painter_at(rect);
                render::render_scene(&painter, rect, &scene);

                if !scene.has_scenario() {
                    let hint = if self.state.rom.is_rom_selected() {
                        "No scenario loaded. Use Load Scenario"
                    } else {
                        "No RomFS selected. Use File → Select RomFS"
                    };
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        hint,
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.state.window_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}
