//! Handler für Actor-Selektion, Hover und die Actor-Listen.

use crate::app::rom_manager::TreeKind;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ActorRef, NodeId, SelectionChange};

/// Ändert die Selektion eines Actors.
pub fn set_actor_selection(state: &mut AppState, actor: &ActorRef, change: SelectionChange) {
    use_cases::selection::set_actor_selection(state, actor, change);
}

/// Legt den Hover auf einen Actor oder entfernt ihn.
pub fn set_hovered_actor(state: &mut AppState, actor: Option<&ActorRef>) {
    use_cases::selection::set_hovered_actor(state, actor);
}

/// Zeigt die Collision-Kamera einer Subarea.
pub fn select_camera(state: &mut AppState, setup_id: &str, subarea_id: &str) {
    use_cases::selection::select_camera(state, setup_id, subarea_id);
}

pub fn set_tree_checked(state: &mut AppState, tree: TreeKind, node: NodeId, checked: bool) {
    use_cases::selection::set_tree_checked(state, tree, node, checked);
}

pub fn activate_tree_node(state: &mut AppState, tree: TreeKind, node: NodeId) {
    use_cases::selection::activate_tree_node(state, tree, node);
}

pub fn set_tree_hovered(state: &mut AppState, tree: TreeKind, node: NodeId, hovered: bool) {
    use_cases::selection::set_tree_hovered(state, tree, node, hovered);
}

pub fn set_tree_expanded(state: &mut AppState, tree: TreeKind, node: NodeId, expanded: bool) {
    use_cases::selection::set_tree_expanded(state, tree, node, expanded);
}

/// Wechselt die sichtbare Actor-Liste.
pub fn set_active_tree(state: &mut AppState, tree: TreeKind) {
    use_cases::selection::set_active_tree(state, tree);
}
