//! Detail-Ansicht eines Actors als Schlüssel/Wert-Baum.

use serde::Serialize;
use serde_json::Value;

use super::actor::Actor;
use super::{ActorLink, ActorRef};

pub const COLLISION_CAMERAS_LABEL: &str = "Collision Cameras";
pub const LEVEL_DATA_LABEL: &str = "Level Data";
pub const ACTORDEF_DATA_LABEL: &str = "Actordef Data";
pub const COLLISION_DATA_LABEL: &str = "BMSCC";

/// Schlüssel, die nie angezeigt werden.
const HIDDEN_KEYS: [&str; 1] = ["_io"];

/// Knoten im Detail-Baum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataNode {
    pub label: String,
    pub value: String,
    pub children: Vec<DataNode>,
}

impl DataNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn child(&self, label: &str) -> Option<&DataNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Hängt alle Schlüssel eines JSON-Objekts bzw. Arrays als Kinder an.
    fn add_entries(&mut self, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    if HIDDEN_KEYS.contains(&key.as_str()) {
                        continue;
                    }
                    self.children.push(value_node(key, value));
                }
            }
            Value::Array(items) => {
                for (i, value) in items.iter().enumerate() {
                    self.children.push(value_node(&i.to_string(), value));
                }
            }
            other => self.value = scalar_text(other),
        }
    }

    fn with_entries(label: impl Into<String>, value: &Value) -> Self {
        let mut node = Self::new(label);
        node.add_entries(value);
        node
    }
}

fn value_node(key: &str, value: &Value) -> DataNode {
    match value {
        Value::Array(items) => match inline_numbers(items) {
            Some(text) => DataNode::with_value(key, text),
            None => DataNode::with_entries(key, value),
        },
        Value::Object(_) => DataNode::with_entries(key, value),
        scalar => DataNode::with_value(key, scalar_text(scalar)),
    }
}

/// Kurze Zahlenlisten (1 bis 4 Werte) werden einzeilig als `[x.xxx, ...]` dargestellt.
fn inline_numbers(items: &[Value]) -> Option<String> {
    if items.is_empty() || items.len() > 4 {
        return None;
    }
    let numbers = items
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()?;
    let parts: Vec<String> = numbers.iter().map(|n| format!("{:.3}", n)).collect();
    Some(format!("[{}]", parts.join(", ")))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_value(data: &impl Serialize) -> Value {
    serde_json::to_value(data).unwrap_or(Value::Null)
}

/// Detail-Datensatz eines Actors.
#[derive(Debug, Clone)]
pub struct ActorRecord {
    pub actor: ActorRef,
    pub root: DataNode,
}

/// Baut den kompletten Detail-Baum eines Actors.
pub fn build_actor_record(actor: &Actor) -> ActorRecord {
    let mut root = DataNode::new(actor.reference().name.clone());

    let mut cameras = DataNode::new(COLLISION_CAMERAS_LABEL);
    for (setup, subareas) in actor.subarea_membership() {
        let mut setup_node = DataNode::new(setup);
        setup_node.children = subareas
            .into_iter()
            .map(|subarea| DataNode::with_value("", subarea))
            .collect();
        cameras.children.push(setup_node);
    }
    root.children.push(cameras);

    root.children.push(DataNode::with_entries(
        LEVEL_DATA_LABEL,
        actor.placement().raw(),
    ));

    match actor.definition() {
        Some(definition) => {
            let mut actordef = DataNode::new(ACTORDEF_DATA_LABEL);
            actordef
                .children
                .push(DataNode::with_entries("Components", &to_value(&definition.components)));

            let mut action_sets = DataNode::new("Action Sets");
            action_sets.children = definition
                .action_sets
                .iter()
                .map(|set| DataNode::with_value("", scalar_text(set)))
                .collect();
            actordef.children.push(action_sets);

            let mut sound_fx = DataNode::new("Sound FX");
            sound_fx.children = definition
                .sound_fx
                .iter()
                .map(|fx| DataNode::with_value("", fx.to_string()))
                .collect();
            actordef.children.push(sound_fx);

            root.children.push(actordef);
        }
        None => log::warn!(
            "Actor-Definition für {} nicht verfügbar",
            actor.reference().path()
        ),
    }

    if let Some(collision) = actor.collision() {
        root.children.push(DataNode::with_entries(
            COLLISION_DATA_LABEL,
            &to_value(collision),
        ));
    }

    ActorRecord {
        actor: actor.reference().clone(),
        root,
    }
}

/// Folge eines Doppelklicks im Detail-Baum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataActivation {
    /// Wurzelknoten: den Actor abwählen.
    UnselectActor(ActorRef),
    /// Actor-Link: verlinkten Actor selektieren.
    SelectActor(ActorRef),
    /// Eintrag unter "Collision Cameras": Kamera dieser Subarea zeigen.
    SelectCamera { setup_id: String, subarea_id: String },
    None,
}

impl ActorRecord {
    /// Knoten unter dem Index-Pfad `path` (leer = Wurzel).
    pub fn node_at(&self, path: &[usize]) -> Option<&DataNode> {
        path.iter()
            .try_fold(&self.root, |node, &index| node.children.get(index))
    }

    /// Wertet einen Doppelklick auf den Knoten unter `path` aus.
    pub fn activate(&self, path: &[usize]) -> DataActivation {
        if path.is_empty() {
            return DataActivation::UnselectActor(self.actor.clone());
        }
        let Some(node) = self.node_at(path) else {
            return DataActivation::None;
        };

        if ActorLink::looks_like_link(&node.value) {
            return match node.value.parse::<ActorLink>() {
                Ok(link) => {
                    log::info!(
                        "Öffne Actor aus Link: {}/{}/{}",
                        link.layer,
                        link.sublayer,
                        link.name
                    );
                    DataActivation::SelectActor(ActorRef::from_link(self.actor.scenario, &link))
                }
                Err(e) => {
                    log::warn!("Ungültiger Actor-Link '{}': {}", node.value, e);
                    DataActivation::None
                }
            };
        }

        if let [cameras, setup, _] = path {
            let cameras_node = self.root.children.get(*cameras);
            if cameras_node.is_some_and(|n| n.label == COLLISION_CAMERAS_LABEL) {
                let setup_id = self.node_at(&[*cameras, *setup]).map(|n| n.label.clone());
                if let Some(setup_id) = setup_id {
                    return DataActivation::SelectCamera {
                        setup_id,
                        subarea_id: node.value.clone(),
                    };
                }
            }
        }

        DataActivation::None
    }
}
