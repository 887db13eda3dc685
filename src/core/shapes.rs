//! Zeichenbare Primitive, abgeleitet aus Actor-Daten.
//!
//! Alle Koordinaten sind Weltkoordinaten (y nach oben). Das Spiegeln für
//! den Bildschirm übernimmt die Kamera.

use glam::Vec2;
use serde::Deserialize;
use serde_json::Value;

use super::actor::Actor;
use super::assets::CollisionShape;
use super::Rect2;

/// Kantenlänge einer zerstörbaren Kachel.
pub const TILE_SIZE: f32 = 100.0;

const DOOR_COMPONENTS: [&str; 3] = [
    "CDoorLifeComponent",
    "CDoorEmmyFXComponent",
    "CDoorCentralUnitLifeComponent",
];

const POLYGON_COLLECTION_SHAPE: &str = "game::logic::collision::CPolygonCollectionShape";
const AABOX_SHAPE: &str = "game::logic::collision::CAABoxShape2D";
const OBOX_SHAPE: &str = "game::logic::collision::COBoxShape2D";

/// Anzeige-Kategorie; jede hat einen eigenen Schalter in den Optionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Doors,
    Collision,
    Breakables,
    LogicShapes,
    LogicPaths,
    WorldGraph,
    PositionalSound,
}

/// Stil-Hinweis für den Painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    Door,
    DoorSensor,
    Collider,
    /// Zerstörbare Kachel mit Kacheltyp 1..=9.
    Tile(u8),
    LogicShape,
    LogicPath,
    GraphEdge,
    GraphNode,
    GraphLabel,
    SoundField,
}

impl ShapeStyle {
    pub fn category(self) -> ShapeCategory {
        match self {
            ShapeStyle::Door | ShapeStyle::DoorSensor => ShapeCategory::Doors,
            ShapeStyle::Collider => ShapeCategory::Collision,
            ShapeStyle::Tile(_) => ShapeCategory::Breakables,
            ShapeStyle::LogicShape => ShapeCategory::LogicShapes,
            ShapeStyle::LogicPath => ShapeCategory::LogicPaths,
            ShapeStyle::GraphEdge | ShapeStyle::GraphNode | ShapeStyle::GraphLabel => {
                ShapeCategory::WorldGraph
            }
            ShapeStyle::SoundField => ShapeCategory::PositionalSound,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect2),
    Polygon { points: Vec<Vec2>, closed: bool },
    Circle { center: Vec2, radius: f32 },
    Segment(Vec2, Vec2),
    Point(Vec2),
    Label { position: Vec2, text: String },
    /// Abschwächungsbereich: voll bis `inner`, auslaufend bis `outer`.
    Falloff { center: Vec2, inner: f32, outer: f32 },
}

impl Primitive {
    pub fn bounds(&self) -> Rect2 {
        match self {
            Primitive::Rect(rect) => *rect,
            Primitive::Polygon { points, .. } => Rect2::from_points(points),
            Primitive::Circle { center, radius } => {
                Rect2::from_center_half_size(*center, Vec2::splat(*radius))
            }
            Primitive::Segment(a, b) => Rect2::from_corners(*a, *b),
            Primitive::Point(p) | Primitive::Label { position: p, .. } => {
                Rect2::from_corners(*p, *p)
            }
            Primitive::Falloff { center, outer, .. } => {
                Rect2::from_center_half_size(*center, Vec2::splat(*outer))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub style: ShapeStyle,
    pub primitive: Primitive,
}

impl Shape {
    fn new(style: ShapeStyle, primitive: Primitive) -> Self {
        Self { style, primitive }
    }

    pub fn category(&self) -> ShapeCategory {
        self.style.category()
    }
}

/// Umschließendes Rechteck mehrerer Shapes.
pub fn shapes_bounds(shapes: &[Shape]) -> Rect2 {
    shapes
        .iter()
        .fold(Rect2::NOTHING, |rect, shape| rect.united(shape.primitive.bounds()))
}

/// Alle Shapes eines Actors.
///
/// Detail-Geometrie (Tür, Kollision, Kacheln, Weltgraph) schließt sich
/// gegenseitig aus, ebenso Logik-Form und Logik-Pfad.
pub fn actor_shapes(actor: &Actor) -> Vec<Shape> {
    let mut shapes = detail_shapes(actor);
    shapes.extend(logic_shapes(actor));
    shapes.extend(positional_sound(actor));
    shapes
}

fn detail_shapes(actor: &Actor) -> Vec<Shape> {
    let is_door = DOOR_COMPONENTS
        .iter()
        .any(|name| actor.placement_component(name).is_some());

    if is_door && actor.collision().is_some() {
        door(actor)
    } else if actor.collision().is_some() {
        collision(actor)
    } else if let Some(tiles) = actor.placement_component("CBreakableTileGroupComponent") {
        breakable_tiles(actor.position(), tiles)
    } else if let Some(graph) = actor.placement_component("CWorldGraph") {
        world_graph(graph)
    } else {
        Vec::new()
    }
}

fn logic_shapes(actor: &Actor) -> Vec<Shape> {
    if let Some(component) = actor.placement_component("CLogicShapeComponent") {
        logic_shape(actor, component)
    } else if let Some(component) = actor.placement_component("CLogicPathComponent") {
        logic_path(actor.position(), component)
    } else {
        Vec::new()
    }
}

// ── Hilfstypen zum Dekodieren von Komponenten ───────────────────────

/// Vektor mit mindestens zwei Komponenten; weitere werden ignoriert.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(try_from = "Vec<f32>")]
struct Point2(Vec2);

impl TryFrom<Vec<f32>> for Point2 {
    type Error = String;

    fn try_from(raw: Vec<f32>) -> Result<Self, Self::Error> {
        match raw.as_slice() {
            [x, y, ..] => Ok(Point2(Vec2::new(*x, *y))),
            _ => Err(format!("Vektor mit {} Komponenten", raw.len())),
        }
    }
}

fn decode<'a, T: Deserialize<'a>>(value: &'a Value) -> Option<T> {
    T::deserialize(value).ok()
}

fn box_rect(center: Vec2, size: Vec2) -> Rect2 {
    Rect2::from_center_half_size(center, size * 0.5)
}

// ── Türen & Kollision ───────────────────────────────────────────────

fn door(actor: &Actor) -> Vec<Shape> {
    let Some(layer) = actor.collision().and_then(|c| c.layer("collision_layer")) else {
        return Vec::new();
    };
    let position = actor.position();
    let door_type = actor
        .placement()
        .definition_link
        .split('/')
        .nth(2)
        .unwrap_or_default();
    let entry_name = match door_type {
        "doorframe" | "tunnelframe" => door_type,
        _ => "door",
    };

    let aabox = |name: &str| match layer.entry(name)?.shape()? {
        CollisionShape::AaBox { position: offset, size } => Some(box_rect(position + offset, size)),
        _ => None,
    };

    let mut shapes = Vec::new();
    if let Some(rect) = aabox(entry_name) {
        shapes.push(Shape::new(ShapeStyle::Door, Primitive::Rect(rect)));
    }
    if door_type.contains("presence") {
        if let Some(rect) = aabox("sensor") {
            shapes.push(Shape::new(ShapeStyle::DoorSensor, Primitive::Rect(rect)));
        }
    }
    shapes
}

fn collision(actor: &Actor) -> Vec<Shape> {
    let Some(geometry) = actor.collision() else {
        return Vec::new();
    };
    let position = actor.position();

    geometry
        .layers
        .iter()
        .flat_map(|layer| layer.entries.iter())
        .filter_map(|entry| entry.shape())
        .flat_map(|shape| match shape {
            CollisionShape::AaBox { position: offset, size } => {
                vec![Primitive::Rect(box_rect(position + offset, size))]
            }
            CollisionShape::PolyCollection { position: offset, polys } => polys
                .into_iter()
                .filter(|poly| !poly.points.is_empty())
                .map(|poly| Primitive::Polygon {
                    points: poly.points.iter().map(|p| position + offset + *p).collect(),
                    closed: poly.closed,
                })
                .collect(),
            CollisionShape::Circle { position: offset, radius } => vec![Primitive::Circle {
                center: position + offset,
                radius,
            }],
        })
        .map(|primitive| Shape::new(ShapeStyle::Collider, primitive))
        .collect()
}

// ── Zerstörbare Kacheln ─────────────────────────────────────────────

#[derive(Deserialize)]
struct BreakableTileGroup {
    #[serde(rename = "aGridTiles", default)]
    tiles: Vec<GridTile>,
}

#[derive(Deserialize)]
struct GridTile {
    #[serde(rename = "vGridCoords")]
    coords: Point2,
    #[serde(rename = "eTileType", default)]
    tile_type: u8,
}

fn breakable_tiles(position: Vec2, component: &Value) -> Vec<Shape> {
    let Some(group) = decode::<BreakableTileGroup>(component) else {
        return Vec::new();
    };

    group
        .tiles
        .iter()
        .map(|tile| {
            let min = position + tile.coords.0 * TILE_SIZE;
            let rect = Rect2::from_corners(min, min + Vec2::splat(TILE_SIZE));
            Shape::new(ShapeStyle::Tile(tile.tile_type), Primitive::Rect(rect))
        })
        .collect()
}

// ── Weltgraph ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorldGraph {
    #[serde(rename = "tNodes", default)]
    nodes: Vec<GraphNode>,
}

#[derive(Deserialize)]
struct GraphNode {
    #[serde(rename = "sID")]
    id: String,
    #[serde(rename = "vPos")]
    position: Point2,
    #[serde(rename = "tNeighboursIds", default)]
    neighbours: Vec<String>,
}

/// Weltgraph-Knoten liegen bereits in Weltkoordinaten.
fn world_graph(component: &Value) -> Vec<Shape> {
    let Some(graph) = decode::<WorldGraph>(component) else {
        return Vec::new();
    };
    let position_of = |id: &str| {
        graph
            .nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.position.0)
    };

    let mut shapes = Vec::new();
    for node in &graph.nodes {
        for neighbour in &node.neighbours {
            if let Some(target) = position_of(neighbour) {
                shapes.push(Shape::new(
                    ShapeStyle::GraphEdge,
                    Primitive::Segment(node.position.0, target),
                ));
            }
        }
        shapes.push(Shape::new(ShapeStyle::GraphNode, Primitive::Point(node.position.0)));
    }
    for (i, node) in graph.nodes.iter().enumerate() {
        shapes.push(Shape::new(
            ShapeStyle::GraphLabel,
            Primitive::Label {
                position: node.position.0,
                text: format!("{}: {}", i, node.id),
            },
        ));
    }
    shapes
}

// ── Logik-Formen & -Pfade ───────────────────────────────────────────

#[derive(Deserialize)]
struct PolygonCollectionShape {
    #[serde(rename = "oPolyCollection")]
    collection: PolyCollection,
}

#[derive(Deserialize)]
struct PolyCollection {
    #[serde(rename = "vPolys", default)]
    polys: Vec<LogicPolygon>,
}

#[derive(Deserialize)]
struct LogicPolygon {
    #[serde(rename = "oSegmentData", default)]
    segments: Vec<Segment>,
    #[serde(rename = "bClosed", default)]
    closed: bool,
}

#[derive(Deserialize)]
struct Segment {
    #[serde(rename = "vPos")]
    position: Point2,
}

#[derive(Deserialize)]
struct AaBoxShape {
    #[serde(rename = "v2Min")]
    min: Point2,
    #[serde(rename = "v2Max")]
    max: Point2,
}

#[derive(Deserialize)]
struct OBoxShape {
    #[serde(rename = "v2Extent")]
    extent: Point2,
    #[serde(rename = "fDegrees", default)]
    degrees: f32,
}

fn logic_shape(actor: &Actor, component: &Value) -> Vec<Shape> {
    let Some(shape) = component.get("pLogicShape").filter(|s| !s.is_null()) else {
        return Vec::new();
    };
    let offset = shape
        .get("vPos")
        .and_then(decode::<Point2>)
        .unwrap_or_default();
    let origin = actor.position() + offset.0;
    let shape_type = shape.get("@type").and_then(Value::as_str).unwrap_or_default();

    let primitives = match shape_type {
        POLYGON_COLLECTION_SHAPE => decode::<PolygonCollectionShape>(shape)
            .map(|s| {
                s.collection
                    .polys
                    .into_iter()
                    .map(|poly| Primitive::Polygon {
                        points: poly.segments.iter().map(|seg| origin + seg.position.0).collect(),
                        closed: poly.closed,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        AABOX_SHAPE => decode::<AaBoxShape>(shape)
            .map(|s| {
                vec![Primitive::Rect(Rect2::from_corners(
                    origin + s.min.0,
                    origin + s.max.0,
                ))]
            })
            .unwrap_or_default(),
        OBOX_SHAPE => match decode::<OBoxShape>(shape) {
            Some(obox) => {
                if obox.degrees != 0.0 {
                    log::warn!(
                        "COBoxShape2D mit Rotation {}° bei {}, Darstellung prüfen",
                        obox.degrees,
                        actor.reference().path()
                    );
                }
                vec![oriented_box(origin, obox.extent.0, obox.degrees)]
            }
            None => Vec::new(),
        },
        other => {
            log::warn!(
                "Unbekannter Logik-Form-Typ '{}' bei {}",
                other,
                actor.reference().path()
            );
            Vec::new()
        }
    };

    primitives
        .into_iter()
        .map(|primitive| Shape::new(ShapeStyle::LogicShape, primitive))
        .collect()
}

/// Box mit Ausdehnung `extent`, um `center` gedreht.
fn oriented_box(center: Vec2, extent: Vec2, degrees: f32) -> Primitive {
    let half = extent * 0.5;
    if degrees == 0.0 {
        return Primitive::Rect(box_rect(center, extent));
    }

    let rotation = Vec2::from_angle(degrees.to_radians());
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ];
    Primitive::Polygon {
        points: corners.iter().map(|c| center + rotation.rotate(*c)).collect(),
        closed: true,
    }
}

#[derive(Deserialize)]
struct LogicPathComponent {
    #[serde(rename = "logicPath")]
    path: LogicPath,
}

#[derive(Deserialize)]
struct LogicPath {
    #[serde(rename = "tSubPaths", default)]
    sub_paths: Vec<SubPath>,
}

#[derive(Deserialize)]
struct SubPath {
    #[serde(rename = "tNodes", default)]
    nodes: Vec<Segment>,
}

fn logic_path(position: Vec2, component: &Value) -> Vec<Shape> {
    let Some(component) = decode::<LogicPathComponent>(component) else {
        return Vec::new();
    };

    component
        .path
        .sub_paths
        .iter()
        .filter(|sub| !sub.nodes.is_empty())
        .map(|sub| {
            Shape::new(
                ShapeStyle::LogicPath,
                Primitive::Polygon {
                    points: sub.nodes.iter().map(|n| position + n.position.0).collect(),
                    closed: false,
                },
            )
        })
        .collect()
}

// ── Positions-Sound ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct PositionalSound {
    #[serde(rename = "fMinAtt", default)]
    min_attenuation: f32,
    #[serde(rename = "fMaxAtt", default)]
    max_attenuation: f32,
}

fn positional_sound(actor: &Actor) -> Option<Shape> {
    let sound = decode::<PositionalSound>(actor.placement_component("CPositionalSoundComponent")?)?;
    if sound.max_attenuation <= 0.0 {
        return None;
    }
    Some(Shape::new(
        ShapeStyle::SoundField,
        Primitive::Falloff {
            center: actor.position(),
            inner: sound.min_attenuation.min(sound.max_attenuation),
            outer: sound.max_attenuation,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{ActorPlacement, AssetResolver, MemoryAssetSource};
    use crate::core::{ActorRef, GameVersion, Scenario};
    use approx::assert_relative_eq;
    use serde_json::json;

    fn resolver() -> AssetResolver {
        let mut source = MemoryAssetSource::new(GameVersion::Dread210);
        source.insert_json(
            "actors/props/doorpresence/charclasses/doorpresence.bmsad",
            &json!({ "components": { "COLLISION": {
                "type": "CCollisionComponent",
                "dependencies": { "file": "actors/props/doorpresence/collisions/doorpresence.bmscc" }
            }}}),
        );
        source.insert_json(
            "actors/props/doorpresence/collisions/doorpresence.bmscc",
            &json!({ "layers": [{ "name": "collision_layer", "entries": [
                { "name": "door", "type": "AABOX2D", "data": { "position": [0.0, 150.0], "size": [50.0, 300.0] } },
                { "name": "sensor", "type": "AABOX2D", "data": { "position": [0.0, 150.0], "size": [600.0, 300.0] } }
            ]}]}),
        );
        source.insert_json("actors/props/plain/plain.bmsad", &json!({ "components": {} }));
        AssetResolver::new(Box::new(source), Vec::<String>::new())
    }

    fn actor(placement: serde_json::Value) -> Actor {
        let placement: ActorPlacement = serde_json::from_value(placement).expect("Platzierung");
        Actor::new(
            ActorRef::new(Scenario::Burenia, "rEntitiesLayer", "default", placement.name.clone()),
            placement,
            &resolver(),
        )
    }

    #[test]
    fn presence_door_has_frame_and_sensor() {
        let door = actor(json!({
            "sName": "door_001",
            "vPos": [1000.0, 2000.0, 0.0],
            "oActorDefLink": "actordef:actors/props/doorpresence/charclasses/doorpresence.bmsad",
            "pComponents": { "LIFE": { "@type": "CDoorLifeComponent" } }
        }));

        let shapes = actor_shapes(&door);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].style, ShapeStyle::Door);
        assert_eq!(shapes[1].category(), ShapeCategory::Doors);
        let Primitive::Rect(frame) = shapes[0].primitive else {
            panic!("Rechteck erwartet");
        };
        assert_relative_eq!(frame.min.x, 975.0);
        assert_relative_eq!(frame.max.y, 2300.0);
    }

    #[test]
    fn non_door_with_collision_paints_all_entries() {
        let crate_actor = actor(json!({
            "sName": "crate",
            "vPos": [0.0, 0.0, 0.0],
            "oActorDefLink": "actordef:actors/props/doorpresence/charclasses/doorpresence.bmsad"
        }));
        let shapes = actor_shapes(&crate_actor);
        assert_eq!(shapes.len(), 2);
        assert!(shapes.iter().all(|s| s.style == ShapeStyle::Collider));
    }

    #[test]
    fn breakable_tiles_use_grid_cells() {
        let tiles = actor(json!({
            "sName": "tiles",
            "vPos": [500.0, 500.0, 0.0],
            "oActorDefLink": "actordef:actors/props/plain/plain.bmsad",
            "pComponents": { "TILEGROUP": { "@type": "CBreakableTileGroupComponent", "aGridTiles": [
                { "vGridCoords": [1, -1], "eTileType": 3 }
            ]}}
        }));

        let shapes = actor_shapes(&tiles);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].style, ShapeStyle::Tile(3));
        assert_eq!(
            shapes[0].primitive,
            Primitive::Rect(Rect2::from_corners(Vec2::new(600.0, 400.0), Vec2::new(700.0, 500.0)))
        );
    }

    #[test]
    fn world_graph_labels_nodes_by_index() {
        let graph = actor(json!({
            "sName": "worldgraph",
            "vPos": [0.0, 0.0, 0.0],
            "oActorDefLink": "actordef:actors/props/plain/plain.bmsad",
            "pComponents": { "GRAPH": { "@type": "CWorldGraph", "tNodes": [
                { "sID": "a", "vPos": [0.0, 0.0, 0.0], "tNeighboursIds": ["b"] },
                { "sID": "b", "vPos": [100.0, 0.0, 0.0], "tNeighboursIds": ["a", "missing"] }
            ]}}
        }));

        let shapes = actor_shapes(&graph);
        let edges = shapes.iter().filter(|s| s.style == ShapeStyle::GraphEdge).count();
        let labels: Vec<_> = shapes
            .iter()
            .filter_map(|s| match &s.primitive {
                Primitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(edges, 2);
        assert_eq!(labels, vec!["0: a", "1: b"]);
    }

    #[test]
    fn rotated_obox_is_offset_and_rotated() {
        let trigger = actor(json!({
            "sName": "trigger",
            "vPos": [100.0, 100.0, 0.0],
            "oActorDefLink": "actordef:actors/props/plain/plain.bmsad",
            "pComponents": { "SHAPE": { "@type": "CLogicShapeComponent", "pLogicShape": {
                "@type": "game::logic::collision::COBoxShape2D",
                "vPos": [10.0, 0.0, 0.0],
                "v2Extent": [20.0, 40.0],
                "fDegrees": 90.0
            }}}
        }));

        let shapes = actor_shapes(&trigger);
        assert_eq!(shapes.len(), 1);
        let bounds = shapes[0].primitive.bounds();
        assert_relative_eq!(bounds.center().x, 110.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.size().x, 40.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.size().y, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn logic_path_and_sound_field() {
        let path = actor(json!({
            "sName": "path",
            "vPos": [0.0, 50.0, 0.0],
            "oActorDefLink": "actordef:actors/props/plain/plain.bmsad",
            "pComponents": {
                "PATH": { "@type": "CLogicPathComponent", "logicPath": { "tSubPaths": [
                    { "tNodes": [{ "vPos": [0.0, 0.0, 0.0] }, { "vPos": [10.0, 10.0, 0.0] }] }
                ]}},
                "SOUND": { "@type": "CPositionalSoundComponent", "fMinAtt": 100.0, "fMaxAtt": 400.0 }
            }
        }));

        let shapes = actor_shapes(&path);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].category(), ShapeCategory::LogicPaths);
        assert_eq!(
            shapes[1].primitive,
            Primitive::Falloff {
                center: Vec2::new(0.0, 50.0),
                inner: 100.0,
                outer: 400.0
            }
        );
        let bounds = shapes_bounds(&shapes);
        assert_relative_eq!(bounds.max.x, 400.0);
    }
}
