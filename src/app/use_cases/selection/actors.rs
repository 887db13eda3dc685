//! Selektion und Hover über Actor-Referenzen (Viewport, Detail-Panel).

use crate::app::AppState;
use crate::core::{ActorRef, SelectionChange};

/// Ändert die Selektion eines Actors des geöffneten Szenarios.
///
/// Bäume, Detail-Panel und Kamera-Fokus folgen über die Beobachter.
pub fn set_actor_selection(state: &mut AppState, reference: &ActorRef, change: SelectionChange) {
    match state.rom.get_actor(reference) {
        Some(actor) => {
            log::debug!("Selektion {:?}: {}", change, reference);
            actor.set_selected(change);
        }
        None => log::warn!("Actor nicht gefunden: {}", reference),
    }
}

/// Legt den Hover auf genau einen Actor (oder keinen).
pub fn set_hovered_actor(state: &mut AppState, target: Option<&ActorRef>) {
    let previous = state.selection.hovered();
    if previous.as_ref() == target {
        return;
    }

    if let Some(actor) = previous.and_then(|r| state.rom.get_actor(&r)) {
        actor.set_hovered(false);
    }
    if let Some(actor) = target.and_then(|r| state.rom.get_actor(r)) {
        actor.set_hovered(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::rom_manager::TreeKind;
    use crate::app::test_support::{entity, loaded_state};

    #[test]
    fn selecting_loads_record_and_requests_focus() {
        let mut state = loaded_state();

        set_actor_selection(&mut state, &entity("switch_001"), SelectionChange::Select);

        assert!(state.selection.is_loaded(&entity("switch_001")));
        let focus = state.selection.take_focus_request().expect("Fokus");
        assert_eq!(focus.x, 1000.0);
    }

    #[test]
    fn selection_is_mirrored_in_both_lists() {
        let mut state = loaded_state();

        set_actor_selection(&mut state, &entity("door_001"), SelectionChange::Toggle);

        let scenario = state.scenario().expect("Szenario");
        for kind in [TreeKind::Entities, TreeKind::Subareas] {
            let tree = scenario.tree(kind);
            let leaves = tree.leaves_for(&entity("door_001"));
            assert_eq!(leaves.len(), 1);
            let leaf = tree.node(leaves[0]).and_then(|n| n.leaf()).expect("Blatt");
            assert!(leaf.is_selected());
        }
    }

    #[test]
    fn unknown_actor_is_ignored() {
        let mut state = loaded_state();

        set_actor_selection(&mut state, &entity("ghost_001"), SelectionChange::Select);

        assert_eq!(state.selection.record_count(), 0);
    }

    #[test]
    fn hover_moves_between_actors() {
        let mut state = loaded_state();
        let door = entity("door_001");
        let switch = entity("switch_001");

        set_hovered_actor(&mut state, Some(&door));
        set_hovered_actor(&mut state, Some(&switch));

        assert!(!state.rom.get_actor(&door).expect("Actor").is_hovered());
        assert!(state.rom.get_actor(&switch).expect("Actor").is_hovered());
        assert_eq!(state.selection.hovered(), Some(switch.clone()));

        set_hovered_actor(&mut state, None);
        assert!(!state.rom.get_actor(&switch).expect("Actor").is_hovered());
        assert_eq!(state.selection.hovered(), None);
    }
}
