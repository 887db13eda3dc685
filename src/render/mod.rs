//! Zeichnen der Render-Szene mit dem egui-Painter.
//!
//! Reihenfolge von hinten nach vorn: Hintergrund, Navmesh, Szenen-Grenze,
//! Collision-Kameras, Actor-Shapes, Actor-Punkte.

mod actor_renderer;
mod camera_renderer;
mod map_renderer;
mod shape_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use types::BACKGROUND_COLOR;
use types::RenderContext;


/// Rendert die komplette Szene in den gegebenen Viewport-Bereich.
///
/// Diese Funktion nimmt nur Referenzen, die Szene ist bereits auf den
/// sichtbaren Ausschnitt reduziert.
pub fn render_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
    if !scene.has_scenario() {
        return;
    }

    let ctx = RenderContext::new(painter, rect.min, &scene.camera, scene.viewport_size);
    log::trace!(
        "render_scene: {} Flächen, {} Kameras, {} Shapes, {} Actors",
        scene.map_areas.len(),
        scene.cameras.len(),
        scene.shapes.len(),
        scene.actors.len()
    );

    map_renderer::render_areas(&ctx, &scene.map_areas);
    map_renderer::render_bounds(&ctx, &scene.bounds);
    camera_renderer::render(&ctx, &scene.cameras);
    shape_renderer::render(&ctx, &scene.shapes);
    actor_renderer::render(&ctx, &scene.actors);
}
