//! Collision-Kamera-Umrisse mit Namen.

use egui::Shape;

use super::types::{RenderContext, COLLISION_CAMERA_COLOR, COLLISION_CAMERA_WIDTH};
use crate::shared::CameraOutline;

const LABEL_FONT_SIZE: f32 = 14.0;

pub(crate) fn render(ctx: &RenderContext, cameras: &[CameraOutline]) {
    let stroke = ctx.stroke(COLLISION_CAMERA_WIDTH, COLLISION_CAMERA_COLOR);
    for camera in cameras {
        for polygon in &camera.polygons {
            if polygon.len() < 2 {
                continue;
            }
            let screen = polygon.iter().map(|p| ctx.to_screen(*p)).collect();
            ctx.painter.add(Shape::closed_line(screen, stroke));
        }

        ctx.painter.text(
            ctx.to_screen(camera.label_anchor),
            egui::Align2::CENTER_CENTER,
            &camera.name,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            COLLISION_CAMERA_COLOR,
        );
    }
}
