//! Hover: Pointer-Position melden und Tooltip anzeigen.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet die Pointer-Position, solange der Cursor über dem Viewport ist.
    ///
    /// Beim Verlassen wird einmalig `None` gemeldet.
    pub(crate) fn handle_hover(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        match ctx.response.hover_pos() {
            Some(pos) => {
                self.pointer_inside = true;
                let world_pos = screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera);
                events.push(AppIntent::PointerMoved {
                    world_pos: Some(world_pos),
                });

                if let Some(actor) = ctx.hovered {
                    let _ = ctx.response.clone().on_hover_text_at_pointer(actor.path());
                }
            }
            None if self.pointer_inside => {
                self.pointer_inside = false;
                events.push(AppIntent::PointerMoved { world_pos: None });
            }
            None => {}
        }
    }
}
