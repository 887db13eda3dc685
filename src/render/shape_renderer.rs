//! Zusatzformen der Actors (Türen, Kollision, Logik, Weltgraph, Sound).

use egui::{Color32, Shape as EguiShape, Stroke};

use super::types::{actor_base_color, with_alpha, RenderContext};
use crate::core::{Primitive, ShapeStyle};
use crate::shared::ActorShape;

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

const NO_FILL: Color32 = Color32::TRANSPARENT;
const GRAPH_LABEL_SIZE: f32 = 75.0;

/// Pinsel für Kachel-Typen der zerstörbaren Blöcke.
fn tile_fill(tile_type: u8) -> Color32 {
    let [r, g, b] = match tile_type {
        1 => [255, 255, 255],
        2 => [255, 0, 255],
        3 => [255, 0, 0],
        4 => [0, 255, 0],
        5 => [255, 165, 0],
        6 => [0, 0, 255],
        7 => [128, 128, 128],
        8 => [195, 195, 190],
        9 => [255, 255, 0],
        _ => [0, 0, 0],
    };
    rgba(r, g, b, 128)
}

/// Stift und Füllung je Stil.
fn style_paint(ctx: &RenderContext, item: &ActorShape) -> (Stroke, Color32) {
    let base = actor_base_color(item.kind);
    match item.shape.style {
        ShapeStyle::Door => (ctx.stroke(10.0, Color32::BLACK), rgba(255, 255, 255, 128)),
        ShapeStyle::DoorSensor => (ctx.stroke(10.0, rgba(64, 0, 255, 32)), NO_FILL),
        ShapeStyle::Collider if item.selected => (ctx.stroke(20.0, rgba(255, 0, 255, 128)), NO_FILL),
        ShapeStyle::Collider => (ctx.stroke(15.0, rgba(255, 0, 0, 128)), NO_FILL),
        ShapeStyle::Tile(tile_type) => (Stroke::NONE, tile_fill(tile_type)),
        ShapeStyle::LogicShape => {
            let pen = if item.hovered { Color32::WHITE } else { base };
            (ctx.stroke(20.0, pen), with_alpha(base, 32))
        }
        ShapeStyle::LogicPath => (ctx.stroke(25.0, Color32::WHITE), NO_FILL),
        ShapeStyle::GraphEdge => (ctx.stroke(25.0, rgba(255, 255, 255, 128)), NO_FILL),
        ShapeStyle::GraphNode => (ctx.stroke(75.0, rgba(255, 255, 255, 128)), NO_FILL),
        ShapeStyle::GraphLabel => (Stroke::NONE, rgba(0, 0, 0, 150)),
        ShapeStyle::SoundField => (Stroke::NONE, rgba(0, 255, 255, 48)),
    }
}

pub(crate) fn render(ctx: &RenderContext, shapes: &[ActorShape]) {
    for item in shapes {
        let (stroke, fill) = style_paint(ctx, item);
        match &item.shape.primitive {
            Primitive::Rect(rect) => {
                let screen = ctx.rect_to_screen(rect);
                ctx.painter.rect_filled(screen, 0.0, fill);
                ctx.painter
                    .rect_stroke(screen, 0.0, stroke, egui::StrokeKind::Middle);
            }
            Primitive::Polygon { points, closed } => {
                let screen: Vec<_> = points.iter().map(|p| ctx.to_screen(*p)).collect();
                if screen.len() < 2 {
                    continue;
                }
                if *closed && screen.len() >= 3 {
                    ctx.painter
                        .add(EguiShape::convex_polygon(screen, fill, stroke));
                } else {
                    ctx.painter.add(EguiShape::line(screen, stroke));
                }
            }
            Primitive::Circle { center, radius } => {
                ctx.painter.circle(
                    ctx.to_screen(*center),
                    ctx.scale(*radius),
                    fill,
                    stroke,
                );
            }
            Primitive::Segment(a, b) => {
                ctx.painter
                    .line_segment([ctx.to_screen(*a), ctx.to_screen(*b)], stroke);
            }
            Primitive::Point(p) => {
                ctx.painter
                    .circle_filled(ctx.to_screen(*p), stroke.width * 0.5, stroke.color);
            }
            Primitive::Label { position, text } => {
                ctx.painter.text(
                    ctx.to_screen(*position),
                    egui::Align2::LEFT_BOTTOM,
                    text,
                    egui::FontId::proportional(ctx.scale(GRAPH_LABEL_SIZE).max(6.0)),
                    fill,
                );
            }
            Primitive::Falloff {
                center,
                inner,
                outer,
            } => {
                // Stufen statt radialem Verlauf: schwach außen, stark bis zur
                // minimalen Dämpfung, voll im Kern.
                let c = ctx.to_screen(*center);
                ctx.painter.circle_filled(c, ctx.scale(*outer), fill);
                ctx.painter
                    .circle_filled(c, ctx.scale(*inner), rgba(0, 255, 255, 128));
                ctx.painter
                    .circle_filled(c, ctx.scale(*inner) * 0.5, rgba(0, 255, 255, 192));
            }
        }
    }
}
