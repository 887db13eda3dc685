//! Interaktionen mit den beiden Actor-Listen.

use crate::app::rom_manager::TreeKind;
use crate::app::AppState;
use crate::core::NodeId;

/// Checkbox eines Knotens; wirkt auf alle Actors darunter.
pub fn set_tree_checked(state: &mut AppState, tree: TreeKind, node: NodeId, checked: bool) {
    if let Some(scenario) = state.scenario() {
        scenario.tree(tree).set_checked(node, checked);
    }
}

/// Doppelklick auf einen Knoten.
pub fn activate_tree_node(state: &mut AppState, tree: TreeKind, node: NodeId) {
    if let Some(scenario) = state.scenario() {
        scenario.tree(tree).activate(node);
    }
}

pub fn set_tree_hovered(state: &mut AppState, tree: TreeKind, node: NodeId, hovered: bool) {
    if let Some(scenario) = state.scenario() {
        scenario.tree(tree).set_hovered(node, hovered);
    }
}

/// Auf- oder Zuklappen; gebundene Collision-Kameras folgen dem Zustand.
pub fn set_tree_expanded(state: &mut AppState, tree: TreeKind, node: NodeId, expanded: bool) {
    if let Some(scenario) = state.rom.current_mut() {
        scenario.tree_mut(tree).set_expanded(node, expanded);
    }
}

pub fn set_active_tree(state: &mut AppState, tree: TreeKind) {
    state.ui.active_tree = tree;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{entity, light, loaded_state, CAMERA, SETUP};
    use crate::core::{ActorTree, CheckState};

    #[test]
    fn unchecking_layer_unchecks_every_actor_below() {
        let mut state = loaded_state();
        let layer = state
            .scenario()
            .and_then(|s| s.entity_tree.find_child(ActorTree::ROOT, "rEntitiesLayer"))
            .expect("Layer-Knoten");

        set_tree_checked(&mut state, TreeKind::Entities, layer, false);

        let scenario = state.scenario().expect("Szenario");
        assert!(!scenario.get_actor(&entity("door_001")).expect("Actor").is_checked());
        assert!(!scenario.get_actor(&entity("switch_001")).expect("Actor").is_checked());
        assert!(scenario.get_actor(&light("lamp_001")).expect("Actor").is_checked());
        assert_eq!(
            scenario.entity_tree.check_state(ActorTree::ROOT),
            CheckState::Indeterminate
        );
    }

    #[test]
    fn unchecking_in_one_list_updates_the_other() {
        let mut state = loaded_state();
        let camera = state
            .scenario()
            .and_then(|s| s.subarea_tree.find_camera_node(SETUP, CAMERA))
            .expect("Kamera-Knoten");

        set_tree_checked(&mut state, TreeKind::Subareas, camera, false);

        let scenario = state.scenario().expect("Szenario");
        let layer = scenario
            .entity_tree
            .find_child(ActorTree::ROOT, "rLightsLayer")
            .expect("Layer-Knoten");
        assert_eq!(scenario.entity_tree.check_state(layer), CheckState::Unchecked);
        assert!(scenario.get_actor(&entity("switch_001")).expect("Actor").is_checked());
    }

    #[test]
    fn activating_leaf_toggles_selection() {
        let mut state = loaded_state();
        let leaf = state
            .scenario()
            .map(|s| s.entity_tree.leaves_for(&entity("switch_001"))[0])
            .expect("Blatt");

        activate_tree_node(&mut state, TreeKind::Entities, leaf);
        assert!(state.selection.is_loaded(&entity("switch_001")));

        activate_tree_node(&mut state, TreeKind::Entities, leaf);
        assert!(!state.selection.is_loaded(&entity("switch_001")));
    }

    #[test]
    fn expanding_camera_node_activates_camera() {
        let mut state = loaded_state();
        let node = state
            .scenario()
            .and_then(|s| s.subarea_tree.find_camera_node(SETUP, CAMERA))
            .expect("Kamera-Knoten");

        set_tree_expanded(&mut state, TreeKind::Subareas, node, true);
        let camera = state
            .scenario()
            .and_then(|s| s.collision_camera(CAMERA))
            .cloned()
            .expect("Kamera");
        assert!(camera.is_active());

        set_tree_expanded(&mut state, TreeKind::Subareas, node, false);
        assert!(!camera.is_active());
    }

    #[test]
    fn tab_switch_changes_active_list() {
        let mut state = loaded_state();

        set_active_tree(&mut state, TreeKind::Subareas);

        assert_eq!(state.ui.active_tree, TreeKind::Subareas);
    }
}
