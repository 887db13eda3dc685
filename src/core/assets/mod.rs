//! Typisierte Asset-Records pro Dateityp.
//!
//! Die Binärformate selbst werden extern dekodiert; gelesen werden deren
//! JSON-Dumps. Jeder Record deckt nur die Felder ab, die der Viewer braucht,
//! alles Weitere bleibt als `serde_json::Value` für das Daten-Panel erhalten.

pub mod resolver;

use std::fmt;

use glam::{Vec2, Vec3};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use resolver::{AssetError, AssetResolver, AssetSource, MemoryAssetSource, RomError, RomFs};

/// Ein Asset-Typ mit fester Dateiendung.
pub trait AssetKind: DeserializeOwned + 'static {
    /// Anzeigename des Typs für Fehlermeldungen.
    const KIND: &'static str;
    /// Dateiendung ohne Punkt.
    const EXTENSION: &'static str;

    /// Dekodiert den JSON-Dump eines Assets.
    fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Reservierte Schlüssel in `pScenario`, die keine Actor-Layer sind.
pub const RESERVED_SCENARIO_KEYS: [&str; 3] = ["sLevelID", "sScenarioID", "vLayerFiles"];

/// Layer-Namen, auf die sich Subarea-Gruppen beziehen.
pub const LIGHTS_LAYER: &str = "rLightsLayer";
pub const SOUNDS_LAYER: &str = "rSoundsLayer";
pub const ENTITIES_LAYER: &str = "rEntitiesLayer";

/// Sucht eine Komponente zuerst über ihren Namen, dann über den Typ-Tag.
///
/// Bei mehreren Treffern über den Typ-Tag gewinnt der erste in Map-Reihenfolge.
pub fn find_component<'a, C: TypeTagged>(
    components: &'a IndexMap<String, C>,
    name_or_type: &str,
) -> Option<&'a C> {
    components.get(name_or_type).or_else(|| {
        components
            .values()
            .find(|component| component.type_tag() == Some(name_or_type))
    })
}

/// Komponenten mit deklariertem Typ-Tag.
pub trait TypeTagged {
    fn type_tag(&self) -> Option<&str>;
}

impl TypeTagged for Value {
    fn type_tag(&self) -> Option<&str> {
        self.get("@type").and_then(Value::as_str)
    }
}

// ── brfld: Szenario-Layout ──────────────────────────────────────────

/// Layer-Baum eines Szenarios (`<id>.brfld`).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawLevelLayout")]
pub struct LevelLayout {
    pub level_id: Option<String>,
    pub scenario_id: Option<String>,
    /// Actor-Layer in Quell-Reihenfolge, ohne reservierte Schlüssel.
    pub layers: IndexMap<String, ActorLayer>,
}

impl LevelLayout {
    /// Liefert die Actor-Links einer Actor-Gruppe aus dem angegebenen Layer.
    pub fn actor_group(&self, group: &str, layer: &str) -> Option<&[String]> {
        self.layers
            .get(layer)?
            .actor_groups
            .get(group)
            .map(Vec::as_slice)
    }

    /// Anzahl aller platzierten Actors über alle Layer.
    pub fn actor_count(&self) -> usize {
        self.layers
            .values()
            .flat_map(|layer| layer.sublayers.values())
            .map(|sublayer| sublayer.actors.len())
            .sum()
    }
}

impl AssetKind for LevelLayout {
    const KIND: &'static str = "Szenario-Layout";
    const EXTENSION: &'static str = "brfld";
}

#[derive(Deserialize)]
struct RawLevelLayout {
    #[serde(rename = "Root")]
    root: RawLayoutRoot,
}

#[derive(Deserialize)]
struct RawLayoutRoot {
    #[serde(rename = "pScenario")]
    scenario: IndexMap<String, Value>,
}

impl TryFrom<RawLevelLayout> for LevelLayout {
    type Error = String;

    fn try_from(raw: RawLevelLayout) -> Result<Self, Self::Error> {
        let mut level_id = None;
        let mut scenario_id = None;
        let mut layers = IndexMap::new();

        for (key, value) in raw.root.scenario {
            match key.as_str() {
                "sLevelID" => level_id = value.as_str().map(str::to_string),
                "sScenarioID" => scenario_id = value.as_str().map(str::to_string),
                "vLayerFiles" => {}
                _ => {
                    let layer: ActorLayer = serde_json::from_value(value)
                        .map_err(|e| format!("Layer '{}': {}", key, e))?;
                    layers.insert(key, layer);
                }
            }
        }

        Ok(Self {
            level_id,
            scenario_id,
            layers,
        })
    }
}

/// Ein Layer mit Sublayern und Actor-Gruppen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorLayer {
    #[serde(rename = "dctSublayers", default)]
    pub sublayers: IndexMap<String, Sublayer>,
    #[serde(rename = "dctActorGroups", default)]
    pub actor_groups: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sublayer {
    #[serde(rename = "dctActors", default)]
    pub actors: IndexMap<String, ActorPlacement>,
}

/// Platzierungsdaten eines Actors im Level.
///
/// Die typisierten Felder werden aus dem Rohwert gelesen; der Rohwert bleibt
/// in Quellreihenfolge für das Daten-Panel erhalten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ActorPlacement {
    pub name: String,
    pub position: Vec3,
    pub angle: Vec3,
    pub definition_link: String,
    pub components: IndexMap<String, Value>,
    raw: Value,
}

#[derive(Deserialize)]
struct PlacementFields {
    #[serde(rename = "sName", default)]
    name: String,
    #[serde(rename = "vPos", default)]
    position: Vec3,
    #[serde(rename = "vAng", default)]
    angle: Vec3,
    #[serde(rename = "oActorDefLink", default)]
    definition_link: String,
    #[serde(rename = "pComponents", default)]
    components: IndexMap<String, Value>,
}

impl TryFrom<Value> for ActorPlacement {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = PlacementFields::deserialize(&raw)?;
        Ok(Self {
            name: fields.name,
            position: fields.position,
            angle: fields.angle,
            definition_link: fields.definition_link,
            components: fields.components,
            raw,
        })
    }
}

impl From<ActorPlacement> for Value {
    fn from(placement: ActorPlacement) -> Self {
        placement.raw
    }
}

impl ActorPlacement {
    /// Platzierung wie im Level-Dump, Schlüssel in Quellreihenfolge.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Position in der Ebene (x, y).
    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }
}

// ── bmsad: Actor-Definition ─────────────────────────────────────────

/// Gemeinsame Vorlage eines Actor-Typs (`*.bmsad`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: IndexMap<String, DefinitionComponent>,
    #[serde(default)]
    pub action_sets: Vec<Value>,
    #[serde(default)]
    pub sound_fx: Vec<SoundEffect>,
}

impl ActorDefinition {
    /// Pfad der Kollisionsdatei aus der `COLLISION`-Komponente.
    pub fn collision_file(&self) -> Option<&str> {
        self.components.get("COLLISION")?.dependency_file()
    }
}

impl AssetKind for ActorDefinition {
    const KIND: &'static str = "Actor-Definition";
    const EXTENSION: &'static str = "bmsad";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionComponent {
    #[serde(rename = "type", default)]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl DefinitionComponent {
    pub fn dependency_file(&self) -> Option<&str> {
        self.dependencies.as_ref()?.get("file")?.as_str()
    }
}

impl TypeTagged for DefinitionComponent {
    fn type_tag(&self) -> Option<&str> {
        Some(self.type_tag.as_str()).filter(|tag| !tag.is_empty())
    }
}

/// Sound-Effekt einer Actor-Definition: (Name, Lautstärke).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect(pub String, pub f64);

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (VOL {})", self.0, self.1)
    }
}

// ── bmscc: Kollisionsgeometrie ──────────────────────────────────────

/// Kollisionsdatei: Szenario-Kameras oder Actor-Kollision (`*.bmscc`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionGeometry {
    #[serde(default)]
    pub layers: Vec<CollisionLayer>,
}

impl CollisionGeometry {
    pub fn layer(&self, name: &str) -> Option<&CollisionLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}

impl AssetKind for CollisionGeometry {
    const KIND: &'static str = "Kollisionsgeometrie";
    const EXTENSION: &'static str = "bmscc";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entries: Vec<CollisionEntry>,
}

impl CollisionLayer {
    pub fn entry(&self, name: &str) -> Option<&CollisionEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionEntry {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl CollisionEntry {
    /// Interpretiert `data` anhand des Eintragstyps.
    ///
    /// Unbekannte Typen und unpassende Daten ergeben `None`.
    pub fn shape(&self) -> Option<CollisionShape> {
        match self.kind.as_str() {
            "AABOX2D" => {
                let data: BoxData = serde_json::from_value(self.data.clone()).ok()?;
                Some(CollisionShape::AaBox {
                    position: data.position,
                    size: data.size,
                })
            }
            "POLYCOLLECTION2D" => {
                let data: PolyCollectionData = serde_json::from_value(self.data.clone()).ok()?;
                Some(CollisionShape::PolyCollection {
                    position: data.position,
                    polys: data
                        .polys
                        .into_iter()
                        .map(|poly| CollisionPolygon {
                            points: poly.points.into_iter().map(|p| Vec2::new(p.x, p.y)).collect(),
                            closed: poly.looped,
                        })
                        .collect(),
                })
            }
            "CIRCLE" => {
                let data: CircleData = serde_json::from_value(self.data.clone()).ok()?;
                Some(CollisionShape::Circle {
                    position: data.position,
                    radius: data.size,
                })
            }
            _ => None,
        }
    }
}

/// Geometrie eines Kollisionseintrags, relativ zur Actor-Position.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    AaBox { position: Vec2, size: Vec2 },
    PolyCollection { position: Vec2, polys: Vec<CollisionPolygon> },
    Circle { position: Vec2, radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPolygon {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

#[derive(Deserialize)]
struct BoxData {
    position: Vec2,
    size: Vec2,
}

#[derive(Deserialize)]
struct CircleData {
    position: Vec2,
    size: f32,
}

#[derive(Deserialize)]
struct PolyCollectionData {
    position: Vec2,
    #[serde(default)]
    polys: Vec<PolyData>,
}

#[derive(Deserialize)]
struct PolyData {
    #[serde(default)]
    points: Vec<PointData>,
    #[serde(rename = "loop", default)]
    looped: bool,
}

#[derive(Deserialize)]
struct PointData {
    x: f32,
    y: f32,
}

// ── bmmap: Karten-Raster ────────────────────────────────────────────

/// Minimap-Daten; genutzt werden nur die Rastergrenzen (`<id>.bmmap`).
#[derive(Debug, Clone, Deserialize)]
pub struct MapGrid {
    #[serde(rename = "Root")]
    pub root: MapGridRoot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapGridRoot {
    #[serde(rename = "gridDef")]
    pub grid_def: GridDefinition,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GridDefinition {
    #[serde(rename = "vGridMin")]
    pub min: Vec2,
    #[serde(rename = "vGridMax")]
    pub max: Vec2,
}

impl AssetKind for MapGrid {
    const KIND: &'static str = "Karten-Raster";
    const EXTENSION: &'static str = "bmmap";
}

// ── bmsnav: Navigationsnetz ─────────────────────────────────────────

/// Navmesh des Szenarios (`<id>.bmsnav`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavMesh {
    /// Vertices; Komponenten jenseits von x/y werden ignoriert.
    #[serde(rename = "aNavmeshGeos", default)]
    pub vertices: Vec<Vec<f32>>,
    #[serde(default)]
    pub areas: Vec<NavArea>,
}

impl NavMesh {
    pub fn vertex(&self, index: usize) -> Option<Vec2> {
        let raw = self.vertices.get(index)?;
        Some(Vec2::new(*raw.first()?, *raw.get(1)?))
    }
}

impl AssetKind for NavMesh {
    const KIND: &'static str = "Navmesh";
    const EXTENSION: &'static str = "bmsnav";
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavArea {
    #[serde(default)]
    pub vertices: Vec<usize>,
}

// ── brsa: Subarea-Setups ────────────────────────────────────────────

/// Subarea-Setups mit Actor-Gruppen pro Kamera (`<id>.brsa`).
#[derive(Debug, Clone, Deserialize)]
pub struct SubareaSetups {
    #[serde(rename = "Root")]
    pub root: SubareaRoot,
}

impl SubareaSetups {
    pub fn setups(&self) -> &[SubareaSetup] {
        &self.root.manager.setups
    }
}

impl AssetKind for SubareaSetups {
    const KIND: &'static str = "Subarea-Setups";
    const EXTENSION: &'static str = "brsa";
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubareaRoot {
    #[serde(rename = "pSubareaManager")]
    pub manager: SubareaManager,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubareaManager {
    #[serde(rename = "vSubareaSetups", default)]
    pub setups: Vec<SubareaSetup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubareaSetup {
    #[serde(rename = "sId")]
    pub id: String,
    #[serde(rename = "vSubareaConfigs", default)]
    pub configs: Vec<SubareaConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubareaConfig {
    #[serde(rename = "sId")]
    pub id: String,
    #[serde(rename = "asItemsIds", default)]
    pub item_ids: Vec<String>,
}

impl SubareaConfig {
    /// Gruppen-Referenzen als (Layer, Gruppenname); leere Namen entfallen.
    ///
    /// Position 1 = Lichter, 2 = Sounds, 4 = Entities.
    pub fn actor_groups(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [(1, LIGHTS_LAYER), (2, SOUNDS_LAYER), (4, ENTITIES_LAYER)]
            .into_iter()
            .filter_map(|(index, layer)| {
                let group = self.item_ids.get(index)?;
                (!group.is_empty()).then_some((layer, group.as_str()))
            })
    }
}
