//! Actor-Punkte.

use super::types::{
    actor_base_color, RenderContext, OUTLINE_HOVERED, OUTLINE_SELECTED, OUTLINE_WIDTH,
};
use crate::shared::ActorDot;

/// Punkte mit Umriss: rot für selektiert, weiß für Hover.
pub(crate) fn render(ctx: &RenderContext, dots: &[ActorDot]) {
    for dot in dots {
        let rect = ctx.rect_to_screen(&dot.rect);
        let radius = rect.width().min(rect.height()) * 0.5;
        let outline = if dot.selected {
            OUTLINE_SELECTED
        } else if dot.hovered {
            OUTLINE_HOVERED
        } else {
            egui::Color32::TRANSPARENT
        };

        ctx.painter.circle(
            rect.center(),
            radius.max(1.5),
            actor_base_color(dot.kind),
            ctx.stroke(OUTLINE_WIDTH, outline),
        );
    }
}
