//! Koordiniert die Folgen einer Selektion außerhalb der Bäume:
//! Detail-Datensätze, Kamera-Fokus und Hover-Anzeige.

use std::cell::{Cell, RefCell};

use glam::Vec2;

use crate::core::{build_actor_record, Actor, ActorObserver, ActorRecord, ActorRef};

/// Globaler Beobachter aller Actors eines Szenarios.
///
/// Wird einmal beim `RomManager` registriert und überlebt Szenario-Wechsel;
/// `clear` setzt ihn beim Öffnen eines neuen Szenarios zurück.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    records: RefCell<Vec<ActorRecord>>,
    focus_request: Cell<Option<Vec2>>,
    hovered: RefCell<Option<ActorRef>>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt den Detail-Datensatz; ein bereits geladener Actor bleibt unverändert.
    pub fn load_actor(&self, actor: &Actor) {
        if self.is_loaded(actor.reference()) {
            return;
        }
        self.records.borrow_mut().push(build_actor_record(actor));
    }

    /// Entfernt den Detail-Datensatz eines Actors.
    pub fn unload_actor(&self, reference: &ActorRef) {
        let mut records = self.records.borrow_mut();
        match records.iter().position(|r| &r.actor == reference) {
            Some(index) => {
                records.remove(index);
            }
            None => log::info!("Actor {} ist nicht im Detail-Panel geladen", reference),
        }
    }

    pub fn is_loaded(&self, reference: &ActorRef) -> bool {
        self.records.borrow().iter().any(|r| &r.actor == reference)
    }

    /// Kopie der geladenen Datensätze in Lade-Reihenfolge.
    pub fn records(&self) -> Vec<ActorRecord> {
        self.records.borrow().clone()
    }

    pub fn record_count(&self) -> usize {
        self.records.borrow().len()
    }

    /// Setzt einen Fokuswunsch, etwa für eine Collision-Kamera.
    pub fn request_focus(&self, target: Vec2) {
        self.focus_request.set(Some(target));
    }

    /// Liefert und verbraucht den letzten Fokuswunsch.
    pub fn take_focus_request(&self) -> Option<Vec2> {
        self.focus_request.take()
    }

    pub fn hovered(&self) -> Option<ActorRef> {
        self.hovered.borrow().clone()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
        self.focus_request.set(None);
        self.hovered.borrow_mut().take();
    }
}

impl ActorObserver for SelectionCoordinator {
    fn on_selected(&self, actor: &Actor, selected: bool) {
        if selected {
            self.load_actor(actor);
        } else {
            self.unload_actor(actor.reference());
        }
    }

    fn on_hovered(&self, actor: &Actor, hovered: bool) {
        let mut current = self.hovered.borrow_mut();
        if hovered {
            *current = Some(actor.reference().clone());
        } else if current.as_ref() == Some(actor.reference()) {
            *current = None;
        }
    }

    fn on_focus_requested(&self, actor: &Actor) {
        self.focus_request.set(Some(actor.position()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actor::tests::placement;
    use crate::core::assets::AssetResolver;
    use crate::core::{GameVersion, MemoryAssetSource, Scenario, SelectionChange};
    use std::rc::Rc;

    fn actor(name: &str) -> Actor {
        let resolver = AssetResolver::new(
            Box::new(MemoryAssetSource::new(GameVersion::Dread200)),
            Vec::<String>::new(),
        );
        Actor::new(
            ActorRef::new(Scenario::Dairon, "rEntitiesLayer", "default", name),
            placement(name, "actordef:actors/none.bmsad"),
            &resolver,
        )
    }

    fn observed(actor: &Actor) -> Rc<SelectionCoordinator> {
        let coordinator = Rc::new(SelectionCoordinator::new());
        let observer: Rc<dyn ActorObserver> = coordinator.clone();
        actor.subscribe(Rc::downgrade(&observer));
        coordinator
    }

    #[test]
    fn select_loads_record_once_and_requests_focus() {
        let actor = actor("door_001");
        let coordinator = observed(&actor);

        actor.set_selected(SelectionChange::Select);
        actor.set_selected(SelectionChange::Select);

        assert_eq!(coordinator.record_count(), 1);
        assert_eq!(coordinator.take_focus_request(), Some(actor.position()));
        assert_eq!(coordinator.take_focus_request(), None);
    }

    #[test]
    fn unselect_and_uncheck_remove_record() {
        let actor = actor("door_001");
        let coordinator = observed(&actor);

        actor.set_selected(SelectionChange::Select);
        actor.set_checked(false);

        assert_eq!(coordinator.record_count(), 0);
        assert!(!actor.is_selected());
    }

    #[test]
    fn hover_tracks_last_actor() {
        let first = actor("a");
        let second = actor("b");
        let coordinator = Rc::new(SelectionCoordinator::new());
        let observer: Rc<dyn ActorObserver> = coordinator.clone();
        first.subscribe(Rc::downgrade(&observer));
        second.subscribe(Rc::downgrade(&observer));

        first.set_hovered(true);
        second.set_hovered(true);
        first.set_hovered(false);
        assert_eq!(coordinator.hovered(), Some(second.reference().clone()));

        second.set_hovered(false);
        assert_eq!(coordinator.hovered(), None);
    }

    #[test]
    fn unloading_unknown_actor_is_harmless() {
        let coordinator = SelectionCoordinator::new();
        coordinator.unload_actor(&ActorRef::new(Scenario::Dairon, "l", "s", "x"));
        assert_eq!(coordinator.record_count(), 0);
    }
}
