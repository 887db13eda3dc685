//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::Vec2;

use crate::core::{ActorLayerKind, ActorRef, Camera2D, MapArea, Rect2, Shape};

/// Ein sichtbarer Actor-Punkt.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorDot {
    pub actor: ActorRef,
    pub rect: Rect2,
    pub kind: ActorLayerKind,
    pub selected: bool,
    pub hovered: bool,
}

/// Shape eines Actors mit dessen Anzeigezustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorShape {
    pub shape: Shape,
    pub kind: ActorLayerKind,
    pub selected: bool,
    pub hovered: bool,
}

/// Umriss einer sichtbaren Collision-Kamera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOutline {
    pub name: String,
    pub polygons: Vec<Vec<Vec2>>,
    pub label_anchor: Vec2,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Szenen-Grenzen inkl. Rand
    pub bounds: Rect2,
    /// Navmesh-Flächen im sichtbaren Bereich
    pub map_areas: Vec<MapArea>,
    pub cameras: Vec<CameraOutline>,
    /// Shapes in Zeichenreihenfolge (unter den Punkten)
    pub shapes: Vec<ActorShape>,
    pub actors: Vec<ActorDot>,
}

impl RenderScene {
    /// Gibt zurück, ob ein Szenario für das Zeichnen vorhanden ist.
    pub fn has_scenario(&self) -> bool {
        !self.bounds.is_empty()
    }
}
