//! Ein platzierter Actor mit aufgelösten Assets und Interaktions-Flags.
//!
//! Flags werden ausschließlich über `set_selected`, `set_checked` und
//! `set_hovered` geändert. Jede Änderung wird an alle registrierten
//! Beobachter (Baum-Einträge, Selektions-Koordinator) verteilt.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use glam::Vec2;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use super::assets::{
    find_component, ActorDefinition, ActorPlacement, AssetError, AssetResolver, CollisionGeometry,
    DefinitionComponent, ENTITIES_LAYER, LIGHTS_LAYER, SOUNDS_LAYER,
};
use super::{ActorRef, Rect2};

/// Radius des Actor-Punkts in Welteinheiten.
pub const DOT_SIZE: f32 = 25.0;
/// Platzhalter für fehlende Kollisionsdateien in der `COLLISION`-Komponente.
pub const UNASSIGNED_COLLISION: &str = "Unassigned";
/// Präfix von Actor-Definition-Links.
pub const ACTORDEF_PREFIX: &str = "actordef:";

/// Entfernt das `actordef:`-Präfix, falls vorhanden.
pub fn strip_actordef_prefix(link: &str) -> &str {
    link.strip_prefix(ACTORDEF_PREFIX).unwrap_or(link)
}

/// Gewünschte Selektionsänderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Toggle,
    Select,
    Unselect,
}

/// Interaktions-Zustand eines Actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorFlags {
    pub checked: bool,
    pub hovered: bool,
    pub selected: bool,
}

impl Default for ActorFlags {
    fn default() -> Self {
        Self {
            checked: true,
            hovered: false,
            selected: false,
        }
    }
}

/// Layer-Klasse eines Actors; bestimmt die Punktfarbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorLayerKind {
    Entities,
    Sounds,
    Lights,
    Other,
}

impl ActorLayerKind {
    pub fn from_layer(layer: &str) -> Self {
        match layer {
            ENTITIES_LAYER => ActorLayerKind::Entities,
            SOUNDS_LAYER => ActorLayerKind::Sounds,
            LIGHTS_LAYER => ActorLayerKind::Lights,
            _ => ActorLayerKind::Other,
        }
    }
}

/// Empfänger von Zustandsänderungen eines Actors.
///
/// Actors halten Beobachter nur schwach; ein verworfener Baum meldet sich
/// dadurch implizit ab.
pub trait ActorObserver {
    fn on_selected(&self, actor: &Actor, selected: bool);

    fn on_hovered(&self, _actor: &Actor, _hovered: bool) {}

    fn on_checked_changed(&self, _actor: &Actor, _checked: bool) {}

    /// Die Ansicht soll auf den Actor zentriert werden.
    fn on_focus_requested(&self, _actor: &Actor) {}
}

/// Ein platziertes Objekt im aktuell geöffneten Szenario.
pub struct Actor {
    reference: ActorRef,
    placement: ActorPlacement,
    definition: Option<Rc<ActorDefinition>>,
    collision: Option<Rc<CollisionGeometry>>,
    subarea_membership: RefCell<IndexMap<String, IndexSet<String>>>,
    flags: Cell<ActorFlags>,
    observers: RefCell<Vec<Weak<dyn ActorObserver>>>,
}

impl Actor {
    /// Erstellt einen Actor und löst Definition und Kollision auf.
    ///
    /// Fehlschläge beim Auflösen sind nie fatal; das jeweilige Asset bleibt
    /// dauerhaft leer.
    pub fn new(reference: ActorRef, placement: ActorPlacement, resolver: &AssetResolver) -> Self {
        let definition_path = strip_actordef_prefix(&placement.definition_link);
        let definition = match resolver.resolve::<ActorDefinition>(definition_path) {
            Ok(definition) => Some(definition),
            Err(AssetError::KnownBad { path }) => {
                log::info!(
                    "Actor {}: Definition {} ist als defekt bekannt, übersprungen",
                    reference.path(),
                    path
                );
                None
            }
            Err(e) => {
                log::warn!("Actor {}: Definition nicht ladbar: {}", reference.path(), e);
                None
            }
        };

        let collision = definition
            .as_deref()
            .and_then(|definition| Self::resolve_collision(&reference, definition, resolver));

        Self {
            reference,
            placement,
            definition,
            collision,
            subarea_membership: RefCell::new(IndexMap::new()),
            flags: Cell::new(ActorFlags::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    fn resolve_collision(
        reference: &ActorRef,
        definition: &ActorDefinition,
        resolver: &AssetResolver,
    ) -> Option<Rc<CollisionGeometry>> {
        let file = definition.collision_file()?;
        if file == UNASSIGNED_COLLISION {
            log::info!(
                "Actor {} hat keine zugewiesene Kollisionsdatei",
                reference.path()
            );
            return None;
        }

        match resolver.resolve::<CollisionGeometry>(file) {
            Ok(collision) => Some(collision),
            Err(e) => {
                log::info!("Actor {}: Kollision nicht ladbar: {}", reference.path(), e);
                None
            }
        }
    }

    pub fn reference(&self) -> &ActorRef {
        &self.reference
    }

    pub fn placement(&self) -> &ActorPlacement {
        &self.placement
    }

    pub fn definition(&self) -> Option<&ActorDefinition> {
        self.definition.as_deref()
    }

    pub fn collision(&self) -> Option<&CollisionGeometry> {
        self.collision.as_deref()
    }

    /// Anzeigename: `sName` aus den Platzierungsdaten, sonst der Schlüssel.
    pub fn display_name(&self) -> &str {
        if self.placement.name.is_empty() {
            &self.reference.name
        } else {
            &self.placement.name
        }
    }

    pub fn position(&self) -> Vec2 {
        self.placement.position_2d()
    }

    pub fn layer_kind(&self) -> ActorLayerKind {
        ActorLayerKind::from_layer(&self.reference.layer)
    }

    /// Bereich des Actor-Punkts in Weltkoordinaten.
    pub fn dot_rect(&self) -> Rect2 {
        Rect2::from_center_half_size(self.position(), Vec2::splat(DOT_SIZE))
    }

    /// Komponente der Actor-Definition nach Name oder Typ-Tag.
    pub fn get_component(&self, name_or_type: &str) -> Option<&DefinitionComponent> {
        find_component(&self.definition()?.components, name_or_type)
    }

    /// Komponente aus den Platzierungsdaten (`pComponents`) nach Name oder `@type`.
    pub fn placement_component(&self, name_or_type: &str) -> Option<&Value> {
        find_component(&self.placement.components, name_or_type)
    }

    // ── Subareas ────────────────────────────────────────────────

    /// Vermerkt die Zugehörigkeit zu einer Subarea eines Setups.
    pub fn add_subarea_membership(&self, setup_id: &str, subarea_id: &str) {
        self.subarea_membership
            .borrow_mut()
            .entry(setup_id.to_string())
            .or_default()
            .insert(subarea_id.to_string());
    }

    /// Kopie der Subarea-Zugehörigkeiten (Setup → Subareas).
    pub fn subarea_membership(&self) -> IndexMap<String, IndexSet<String>> {
        self.subarea_membership.borrow().clone()
    }

    pub fn is_in_subarea(&self, setup_id: &str, subarea_id: &str) -> bool {
        self.subarea_membership
            .borrow()
            .get(setup_id)
            .is_some_and(|subareas| subareas.contains(subarea_id))
    }

    // ── Flags ───────────────────────────────────────────────────

    pub fn flags(&self) -> ActorFlags {
        self.flags.get()
    }

    pub fn is_checked(&self) -> bool {
        self.flags.get().checked
    }

    pub fn is_selected(&self) -> bool {
        self.flags.get().selected
    }

    pub fn is_hovered(&self) -> bool {
        self.flags.get().hovered
    }

    fn update_flags(&self, f: impl FnOnce(&mut ActorFlags)) {
        let mut flags = self.flags.get();
        f(&mut flags);
        self.flags.set(flags);
    }

    /// Registriert einen Beobachter (schwache Referenz).
    pub fn subscribe(&self, observer: Weak<dyn ActorObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Anzahl noch lebender Beobachter.
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    /// Lebende Beobachter, tote Einträge werden dabei entfernt.
    fn live_observers(&self) -> Vec<Rc<dyn ActorObserver>> {
        let mut observers = self.observers.borrow_mut();
        observers.retain(|o| o.strong_count() > 0);
        observers.iter().filter_map(Weak::upgrade).collect()
    }

    /// Einzige Stelle, an der sich die Selektion ändert.
    ///
    /// `Select` auf einen bereits selektierten Actor meldet Selektion und
    /// Fokus erneut. `Unselect` auf einen nicht selektierten Actor ist ein No-op.
    pub fn set_selected(&self, change: SelectionChange) {
        let select = match change {
            SelectionChange::Toggle => !self.is_selected(),
            SelectionChange::Select => true,
            SelectionChange::Unselect => false,
        };

        if select {
            if !self.is_checked() {
                self.set_checked(true);
            }
            self.update_flags(|f| f.selected = true);
            for observer in self.live_observers() {
                observer.on_selected(self, true);
            }
            for observer in self.live_observers() {
                observer.on_focus_requested(self);
            }
        } else {
            if !self.is_selected() {
                return;
            }
            self.update_flags(|f| f.selected = false);
            for observer in self.live_observers() {
                observer.on_selected(self, false);
            }
        }
    }

    /// Setzt den Check-Zustand; ein selektierter Actor wird vorher abgewählt.
    pub fn set_checked(&self, checked: bool) {
        if !checked && self.is_selected() {
            self.set_selected(SelectionChange::Unselect);
        }
        if self.is_checked() == checked {
            return;
        }

        self.update_flags(|f| f.checked = checked);
        for observer in self.live_observers() {
            observer.on_checked_changed(self, checked);
        }
    }

    pub fn set_hovered(&self, hovered: bool) {
        if self.is_hovered() == hovered {
            return;
        }

        self.update_flags(|f| f.hovered = hovered);
        for observer in self.live_observers() {
            observer.on_hovered(self, hovered);
        }
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("reference", &self.reference)
            .field("definition", &self.definition.is_some())
            .field("collision", &self.collision.is_some())
            .field("flags", &self.flags.get())
            .finish()
    }
}
