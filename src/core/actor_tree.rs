//! Präsentations-Index über Actors: Baum aus Container-Knoten mit je einem
//! Blatt pro Actor.
//!
//! Zwei Instanzen werden pro Szenario gebaut: die Entity-Liste
//! (`[layer, sublayer]`) und die Subarea-Liste (`[setup, kamera, layer]`).
//! Der Check-Zustand von Containern wird bei jeder Abfrage aus den Blättern
//! abgeleitet und nie gespeichert.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use super::actor::{Actor, ActorObserver, SelectionChange};
use super::{ActorRef, CollisionCameraItem};

/// Index eines Knotens im Baum.
pub type NodeId = usize;

/// Tri-State eines Knotens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// Baum-Blatt, das den Zustand seines Actors spiegelt.
#[derive(Debug)]
pub struct ActorLeaf {
    actor: Rc<Actor>,
    checked: Cell<bool>,
    selected: Cell<bool>,
    hovered: Cell<bool>,
}

impl ActorLeaf {
    fn new(actor: Rc<Actor>) -> Self {
        let flags = actor.flags();
        Self {
            actor,
            checked: Cell::new(flags.checked),
            selected: Cell::new(flags.selected),
            hovered: Cell::new(flags.hovered),
        }
    }

    pub fn actor(&self) -> &Rc<Actor> {
        &self.actor
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Hervorhebung (fett) für selektierte Actors.
    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }
}

impl ActorObserver for ActorLeaf {
    fn on_selected(&self, _actor: &Actor, selected: bool) {
        self.selected.set(selected);
    }

    fn on_hovered(&self, _actor: &Actor, hovered: bool) {
        self.hovered.set(hovered);
    }

    fn on_checked_changed(&self, _actor: &Actor, checked: bool) {
        self.checked.set(checked);
    }
}

#[derive(Debug)]
pub enum NodeKind {
    /// Zwischenknoten, optional an eine Collision-Kamera gebunden.
    Container {
        camera: Option<Rc<CollisionCameraItem>>,
    },
    Leaf(Rc<ActorLeaf>),
}

#[derive(Debug)]
pub struct TreeNode {
    pub label: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub expanded: bool,
    pub kind: NodeKind,
}

impl TreeNode {
    pub fn leaf(&self) -> Option<&Rc<ActorLeaf>> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Container { .. } => None,
        }
    }

    pub fn camera(&self) -> Option<&Rc<CollisionCameraItem>> {
        match &self.kind {
            NodeKind::Container { camera } => camera.as_ref(),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container { .. })
    }
}

/// Arena-basierter Actor-Baum.
#[derive(Debug)]
pub struct ActorTree {
    nodes: Vec<TreeNode>,
    leaves_by_actor: HashMap<ActorRef, Vec<NodeId>>,
}

impl ActorTree {
    pub const ROOT: NodeId = 0;

    /// Erstellt einen Baum mit einem aufgeklappten Wurzelknoten.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![TreeNode {
                label: root_label.into(),
                parent: None,
                children: Vec::new(),
                expanded: true,
                kind: NodeKind::Container { camera: None },
            }],
            leaves_by_actor: HashMap::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT]
    }

    /// Anzahl der Actor-Blätter.
    pub fn leaf_count(&self) -> usize {
        self.leaves_by_actor.values().map(Vec::len).sum()
    }

    pub fn contains_actor(&self, reference: &ActorRef) -> bool {
        self.leaves_by_actor.contains_key(reference)
    }

    /// Alle Blatt-Knoten eines Actors.
    pub fn leaves_for(&self, reference: &ActorRef) -> &[NodeId] {
        self.leaves_by_actor
            .get(reference)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Alle Actors mit mindestens einem Blatt.
    pub fn actor_refs(&self) -> impl Iterator<Item = &ActorRef> {
        self.leaves_by_actor.keys()
    }

    /// Direktes Kind mit passendem Label; Container haben Vorrang.
    pub fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        let node = self.nodes.get(parent)?;
        node.children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].label == label && self.nodes[c].is_container())
    }

    /// Position, an der ein neues Kind unter `parent` eingefügt wird.
    ///
    /// Direkte Kinder der Wurzel behalten die Einfüge-Reihenfolge, darunter
    /// wird alphabetisch einsortiert.
    fn insert_position(&self, parent: NodeId, label: &str) -> usize {
        let children = &self.nodes[parent].children;
        if parent == Self::ROOT {
            return children.len();
        }
        children.partition_point(|&c| self.nodes[c].label.as_str() <= label)
    }

    fn push_child(&mut self, parent: NodeId, label: String, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        let position = self.insert_position(parent, &label);
        self.nodes.push(TreeNode {
            label,
            parent: Some(parent),
            children: Vec::new(),
            expanded: false,
            kind,
        });
        self.nodes[parent].children.insert(position, id);
        id
    }

    /// Läuft den Pfad ab und legt fehlende Container an.
    pub fn ensure_path<S: AsRef<str>>(&mut self, path: &[S]) -> NodeId {
        let mut node = Self::ROOT;
        for segment in path {
            let segment = segment.as_ref();
            node = match self.find_child(node, segment) {
                Some(child) => child,
                None => self.push_child(
                    node,
                    segment.to_string(),
                    NodeKind::Container { camera: None },
                ),
            };
        }
        node
    }

    /// Bindet einen Container an eine Collision-Kamera.
    pub fn bind_camera(&mut self, node: NodeId, camera: Rc<CollisionCameraItem>) {
        if let Some(TreeNode {
            kind: NodeKind::Container { camera: slot },
            ..
        }) = self.nodes.get_mut(node)
        {
            *slot = Some(camera);
        }
    }

    /// Fügt ein Blatt für `actor` unter `path` ein und meldet es beim Actor an.
    pub fn add_actor<S: AsRef<str>>(&mut self, path: &[S], actor: &Rc<Actor>) -> NodeId {
        let parent = self.ensure_path(path);
        let leaf = Rc::new(ActorLeaf::new(actor.clone()));
        let observer: Rc<dyn ActorObserver> = leaf.clone();
        actor.subscribe(Rc::downgrade(&observer));

        let id = self.push_child(parent, actor.display_name().to_string(), NodeKind::Leaf(leaf));
        self.leaves_by_actor
            .entry(actor.reference().clone())
            .or_default()
            .push(id);
        id
    }

    /// Abgeleiteter Check-Zustand eines Knotens.
    ///
    /// Container ohne Blätter zählen nicht mit; ein vollständig leerer
    /// Container gilt als angehakt.
    pub fn check_state(&self, id: NodeId) -> CheckState {
        if id >= self.nodes.len() {
            return CheckState::Unchecked;
        }
        self.aggregate_check(id).unwrap_or(CheckState::Checked)
    }

    /// `None`, wenn unterhalb von `id` kein Blatt hängt.
    fn aggregate_check(&self, id: NodeId) -> Option<CheckState> {
        let node = self.nodes.get(id)?;
        if let NodeKind::Leaf(leaf) = &node.kind {
            return Some(if leaf.is_checked() {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            });
        }

        let mut any_checked = false;
        let mut any_unchecked = false;
        for &child in &node.children {
            match self.aggregate_check(child) {
                Some(CheckState::Checked) => any_checked = true,
                Some(CheckState::Unchecked) => any_unchecked = true,
                Some(CheckState::Indeterminate) => return Some(CheckState::Indeterminate),
                None => {}
            }
            if any_checked && any_unchecked {
                return Some(CheckState::Indeterminate);
            }
        }

        match (any_checked, any_unchecked) {
            (true, _) => Some(CheckState::Checked),
            (false, true) => Some(CheckState::Unchecked),
            (false, false) => None,
        }
    }

    /// Alle Blätter unterhalb von `id` (inklusive `id` selbst).
    pub fn leaves_below(&self, id: NodeId) -> Vec<Rc<ActorLeaf>> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            match &node.kind {
                NodeKind::Leaf(leaf) => result.push(leaf.clone()),
                NodeKind::Container { .. } => stack.extend(node.children.iter().rev()),
            }
        }
        result
    }

    /// Checkbox eines Knotens umschalten; wirkt immer über den Actor.
    pub fn set_checked(&self, id: NodeId, checked: bool) {
        for leaf in self.leaves_below(id) {
            leaf.actor().set_checked(checked);
        }
    }

    /// Doppelklick auf ein Blatt schaltet die Selektion des Actors um.
    pub fn activate(&self, id: NodeId) {
        if let Some(leaf) = self.nodes.get(id).and_then(TreeNode::leaf) {
            leaf.actor().set_selected(SelectionChange::Toggle);
        }
    }

    /// Hover über einem Blatt an den Actor weiterreichen.
    pub fn set_hovered(&self, id: NodeId, hovered: bool) {
        if let Some(leaf) = self.nodes.get(id).and_then(TreeNode::leaf) {
            leaf.actor().set_hovered(hovered);
        }
    }

    /// Klappt einen Knoten auf oder zu.
    ///
    /// Gebundene Kameras erhalten dabei eine Aktivierungs- bzw.
    /// Deaktivierungsanforderung. Gibt `true` zurück, wenn sich etwas änderte.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if node.expanded == expanded {
            return false;
        }
        node.expanded = expanded;

        if let Some(camera) = node.camera() {
            if expanded {
                camera.request_enable();
            } else {
                camera.request_disable();
            }
        }
        true
    }

    /// Klappt alle Vorfahren von `id` auf.
    pub fn reveal(&mut self, id: NodeId) {
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            self.set_expanded(parent, true);
            current = self.nodes[parent].parent;
        }
    }

    /// Sucht den Kamera-Knoten einer Subarea unterhalb eines Setups.
    pub fn find_camera_node(&self, setup_id: &str, subarea_id: &str) -> Option<NodeId> {
        let setup = self.find_child(Self::ROOT, setup_id)?;
        let fallback = no_camera_label(subarea_id);
        self.nodes[setup].children.iter().copied().find(|&c| {
            let node = &self.nodes[c];
            node.camera().is_some_and(|camera| camera.name() == subarea_id) || node.label == fallback
        })
    }
}

/// Pfad eines Actors in der Entity-Liste.
pub fn entity_path(reference: &ActorRef) -> [&str; 2] {
    [&reference.layer, &reference.sublayer]
}

/// Pfad eines Actors in der Subarea-Liste.
pub fn subarea_path<'a>(setup_id: &'a str, camera_label: &'a str, layer: &'a str) -> [&'a str; 3] {
    [setup_id, camera_label, layer]
}

/// Label eines Subarea-Knotens: Kameraname oder Platzhalter.
pub fn camera_label(subarea_id: &str, camera: Option<&CollisionCameraItem>) -> String {
    match camera {
        Some(camera) => camera.name().to_string(),
        None => no_camera_label(subarea_id),
    }
}

fn no_camera_label(subarea_id: &str) -> String {
    format!("{} (No CC)", subarea_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actor::tests::placement;
    use crate::core::assets::{AssetResolver, MemoryAssetSource};
    use crate::core::{GameVersion, Scenario};

    fn actor(layer: &str, sublayer: &str, name: &str) -> Rc<Actor> {
        let resolver = AssetResolver::new(
            Box::new(MemoryAssetSource::new(GameVersion::Dread210)),
            Vec::<String>::new(),
        );
        Rc::new(Actor::new(
            ActorRef::new(Scenario::Artaria, layer, sublayer, name),
            placement(name, ""),
            &resolver,
        ))
    }

    fn labels(tree: &ActorTree, id: NodeId) -> Vec<String> {
        tree.node(id)
            .expect("Knoten")
            .children
            .iter()
            .map(|&c| tree.node(c).expect("Knoten").label.clone())
            .collect()
    }

    #[test]
    fn leaves_sorted_root_children_in_insertion_order() {
        let mut tree = ActorTree::new("BRFLD");
        let light = actor("rLightsLayer", "default", "light_001");
        let door = actor("rEntitiesLayer", "default", "door_001");
        let spot = actor("rEntitiesLayer", "default", "spot_001");
        let alpha = actor("rEntitiesLayer", "alpha", "item_001");

        for a in [&light, &spot, &door, &alpha] {
            tree.add_actor(&entity_path(a.reference()), a);
        }

        assert_eq!(labels(&tree, ActorTree::ROOT), vec!["rLightsLayer", "rEntitiesLayer"]);
        let entities = tree.find_child(ActorTree::ROOT, "rEntitiesLayer").expect("Layer");
        assert_eq!(labels(&tree, entities), vec!["alpha", "default"]);
        let default = tree.find_child(entities, "default").expect("Sublayer");
        assert_eq!(labels(&tree, default), vec!["door_001", "spot_001"]);
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn container_state_is_derived_from_leaves() {
        let mut tree = ActorTree::new("BRFLD");
        let a = actor("rEntitiesLayer", "default", "a");
        let b = actor("rEntitiesLayer", "default", "b");
        tree.add_actor(&entity_path(a.reference()), &a);
        tree.add_actor(&entity_path(b.reference()), &b);
        let layer = tree.find_child(ActorTree::ROOT, "rEntitiesLayer").expect("Layer");

        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Checked);

        b.set_checked(false);
        assert_eq!(tree.check_state(layer), CheckState::Indeterminate);
        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Indeterminate);

        tree.set_checked(layer, false);
        assert!(!a.is_checked());
        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Unchecked);

        tree.set_checked(ActorTree::ROOT, true);
        assert!(a.is_checked() && b.is_checked());
    }

    #[test]
    fn empty_containers_do_not_affect_parent_state() {
        let mut tree = ActorTree::new("Setups");
        let a = actor("rEntitiesLayer", "default", "a");
        tree.add_actor(&["Default", "collision_camera_001", "rEntitiesLayer"], &a);
        let empty = tree.ensure_path(&["Default", "collision_camera_099 (No CC)"]);

        assert_eq!(tree.check_state(empty), CheckState::Checked);
        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Checked);

        tree.set_checked(ActorTree::ROOT, false);
        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Unchecked);

        tree.set_checked(ActorTree::ROOT, true);
        assert_eq!(tree.check_state(ActorTree::ROOT), CheckState::Checked);
    }

    #[test]
    fn leaves_mirror_actor_flags() {
        let mut tree = ActorTree::new("BRFLD");
        let a = actor("rEntitiesLayer", "default", "a");
        let leaf_id = tree.add_actor(&entity_path(a.reference()), &a);

        tree.activate(leaf_id);
        let leaf = tree.node(leaf_id).and_then(TreeNode::leaf).expect("Blatt").clone();
        assert!(a.is_selected());
        assert!(leaf.is_selected());

        tree.set_hovered(leaf_id, true);
        assert!(leaf.is_hovered());

        tree.set_checked(leaf_id, false);
        assert!(!leaf.is_selected());
        assert!(!leaf.is_checked());
    }

    #[test]
    fn dropping_tree_unsubscribes_leaves() {
        let a = actor("rEntitiesLayer", "default", "a");
        {
            let mut tree = ActorTree::new("BRFLD");
            tree.add_actor(&entity_path(a.reference()), &a);
            assert_eq!(a.observer_count(), 1);
        }
        assert_eq!(a.observer_count(), 0);
    }

    #[test]
    fn expanding_camera_node_requests_enable() {
        let mut tree = ActorTree::new("Setups");
        let camera = Rc::new(CollisionCameraItem::new(
            "collision_camera_000".into(),
            vec![vec![glam::Vec2::ZERO, glam::Vec2::ONE]],
        ));
        let a = actor("rEntitiesLayer", "default", "a");

        let label = camera_label("collision_camera_000", Some(&camera));
        let node = tree.ensure_path(&["Default", label.as_str()]);
        tree.bind_camera(node, camera.clone());
        tree.add_actor(&subarea_path("Default", &label, "rEntitiesLayer"), &a);

        assert_eq!(tree.find_camera_node("Default", "collision_camera_000"), Some(node));
        assert!(tree.set_expanded(node, true));
        assert!(!tree.set_expanded(node, true));
        assert!(camera.is_active());
        tree.set_expanded(node, false);
        assert!(!camera.is_active());

        let orphan = camera_label("collision_camera_999", None);
        assert_eq!(orphan, "collision_camera_999 (No CC)");
        let orphan_node = tree.ensure_path(&["Default", orphan.as_str()]);
        assert_eq!(
            tree.find_camera_node("Default", "collision_camera_999"),
            Some(orphan_node)
        );
    }
}
