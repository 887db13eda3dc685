//! Viewport-Input-Handling: Maus-Events, Hover, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Doppelklick (Pick) und Rechtsklick (Abwählen)
//! - `hover`: Pointer-Position und Tooltip des Actors unter dem Cursor
//! - `pointer_delta`: Kamera-Pan während aktiver Drags
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod hover;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::core::ActorRef;
use crate::shared::ViewerOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a ViewerOptions,
    /// Actor unter dem Cursor aus dem letzten Frame
    pub hovered: Option<&'a ActorRef>,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// War der Pointer im letzten Frame über dem Viewport?
    pub(crate) pointer_inside: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_inside: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &ViewerOptions,
        hovered: Option<&ActorRef>,
        has_status: bool,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
            hovered,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui, has_status));

        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn viewport_center_maps_to_camera_position() {
        let ctx = egui::Context::default();
        let mut world = glam::Vec2::ZERO;
        let mut camera = Camera2D::new();
        camera.look_at(glam::Vec2::new(300.0, -150.0));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(400.0, 200.0), egui::Sense::hover());
                let size = [rect.width(), rect.height()];
                world = screen_pos_to_world(rect.center(), &response, size, &camera);
            });
        });

        assert_relative_eq!(world.x, 300.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, -150.0, epsilon = 1e-3);
    }
}
