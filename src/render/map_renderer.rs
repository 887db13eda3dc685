//! Navmesh-Flächen und Szenen-Grenze.

use egui::Shape;

use super::types::{RenderContext, BOUNDS_COLOR, GEOMETRY_COLOR};
use crate::core::{MapArea, Rect2};

/// Zeichnet die begehbaren Flächen; Rand und Füllung in derselben Farbe.
pub(crate) fn render_areas(ctx: &RenderContext, areas: &[MapArea]) {
    let stroke = egui::Stroke::new(1.0, GEOMETRY_COLOR);
    for area in areas {
        match area {
            MapArea::Rect(rect) => {
                ctx.painter
                    .rect_filled(ctx.rect_to_screen(rect), 0.0, GEOMETRY_COLOR);
            }
            MapArea::Polygon(points) if points.len() >= 3 => {
                let screen = points.iter().map(|p| ctx.to_screen(*p)).collect();
                ctx.painter
                    .add(Shape::convex_polygon(screen, GEOMETRY_COLOR, stroke));
            }
            MapArea::Polygon(_) => {}
        }
    }
}

pub(crate) fn render_bounds(ctx: &RenderContext, bounds: &Rect2) {
    ctx.painter.rect_stroke(
        ctx.rect_to_screen(bounds),
        0.0,
        egui::Stroke::new(1.0, BOUNDS_COLOR),
        egui::StrokeKind::Middle,
    );
}
