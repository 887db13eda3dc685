//! Collision-Kamera einer Subarea aus dem Detail-Panel heraus zeigen.

use crate::app::rom_manager::TreeKind;
use crate::app::AppState;

/// Klappt den Kamera-Knoten in der Subarea-Liste auf und fokussiert die Kamera.
///
/// Die Subarea-Liste wird dabei zur sichtbaren Liste.
pub fn select_camera(state: &mut AppState, setup_id: &str, subarea_id: &str) {
    let Some(scenario) = state.rom.current_mut() else {
        return;
    };

    let tree = scenario.tree_mut(TreeKind::Subareas);
    let Some(node) = tree.find_camera_node(setup_id, subarea_id) else {
        log::warn!("Keine Subarea {} in Setup {}", subarea_id, setup_id);
        return;
    };

    tree.reveal(node);
    tree.set_expanded(node, true);
    let anchor = tree
        .node(node)
        .and_then(|n| n.camera())
        .and_then(|camera| camera.label_anchor());

    state.ui.active_tree = TreeKind::Subareas;
    match anchor {
        Some(anchor) => state.selection.request_focus(anchor),
        None => log::info!("Subarea {} hat keine darstellbare Collision-Kamera", subarea_id),
    }
}
