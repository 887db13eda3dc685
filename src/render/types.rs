//! Zeichen-Kontext und Farbpalette.

use egui::{Color32, Pos2, Stroke};
use glam::Vec2;

use crate::core::{ActorLayerKind, Rect2};
use crate::Camera2D;

/// Hintergrund der Szene.
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(16, 31, 54);
/// Begehbare Kartenfläche (Füllung und Rand).
pub const GEOMETRY_COLOR: Color32 = Color32::from_rgb(76, 87, 91);
pub const BOUNDS_COLOR: Color32 = Color32::WHITE;

pub const COLLISION_CAMERA_COLOR: Color32 = Color32::from_rgb(255, 200, 255);
pub const COLLISION_CAMERA_WIDTH: f32 = 20.0;

pub const OUTLINE_SELECTED: Color32 = Color32::RED;
pub const OUTLINE_HOVERED: Color32 = Color32::WHITE;
pub const OUTLINE_WIDTH: f32 = 25.0;

/// Grundfarbe eines Actors nach Layer-Art (halbtransparent).
pub fn actor_base_color(kind: ActorLayerKind) -> Color32 {
    match kind {
        ActorLayerKind::Entities => Color32::from_rgba_unmultiplied(0, 255, 0, 128),
        ActorLayerKind::Sounds => Color32::from_rgba_unmultiplied(0, 255, 255, 128),
        ActorLayerKind::Lights => Color32::from_rgba_unmultiplied(255, 215, 0, 128),
        ActorLayerKind::Other => Color32::BLACK,
    }
}

/// Gleiche Farbe mit anderem Alpha.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Painter, Viewport-Ursprung und Kamera, die jeder Sub-Renderer
/// bei jedem Frame zum Umrechnen von Welt- in Bildschirmkoordinaten braucht.
pub(crate) struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    /// Linke obere Ecke des Viewports in egui-Koordinaten
    pub origin: Pos2,
    /// Kamera (Position + Zoom)
    pub camera: &'a Camera2D,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    world_per_pixel: f32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        painter: &'a egui::Painter,
        origin: Pos2,
        camera: &'a Camera2D,
        viewport_size: [f32; 2],
    ) -> Self {
        Self {
            painter,
            origin,
            camera,
            viewport_size,
            world_per_pixel: camera.world_per_pixel(viewport_size[1]),
        }
    }

    pub fn to_screen(&self, world: Vec2) -> Pos2 {
        let local = self
            .camera
            .world_to_screen(world, Vec2::from(self.viewport_size));
        self.origin + egui::vec2(local.x, local.y)
    }

    pub fn rect_to_screen(&self, rect: &Rect2) -> egui::Rect {
        egui::Rect::from_two_pos(self.to_screen(rect.min), self.to_screen(rect.max))
    }

    /// Welt-Länge in Pixel.
    pub fn scale(&self, world: f32) -> f32 {
        world / self.world_per_pixel
    }

    /// Stift mit Breite in Welteinheiten, mindestens ein Pixel breit.
    pub fn stroke(&self, width_world: f32, color: Color32) -> Stroke {
        Stroke::new(self.scale(width_world).max(1.0), color)
    }
}
