//! Collision-Kameras: Polygon-Regionen, an die Subareas gebunden sind.

use std::cell::Cell;

use glam::Vec2;

use super::assets::{CollisionEntry, CollisionShape};
use super::Rect2;

/// Eine Collision-Kamera mit Polygonen in Weltkoordinaten.
///
/// Der Aktivierungszähler wird von aufgeklappten Subarea-Knoten erhöht;
/// die Kamera ist sichtbar, solange er größer null ist.
#[derive(Debug)]
pub struct CollisionCameraItem {
    name: String,
    polygons: Vec<Vec<Vec2>>,
    bounds: Rect2,
    active_requests: Cell<u32>,
}

impl CollisionCameraItem {
    /// Baut eine Kamera aus einem Eintrag der Kamera-Kollisionsdatei.
    ///
    /// Unterstützt werden Polygon-Sammlungen und achsenparallele Boxen. Andere
    /// oder nicht lesbare Formen ergeben eine Kamera ohne Polygone, damit die
    /// Subarea trotzdem an sie gebunden wird.
    pub fn from_entry(entry: &CollisionEntry) -> Self {
        let polygons: Vec<Vec<Vec2>> = match entry.shape() {
            Some(CollisionShape::PolyCollection { position, polys }) => polys
                .into_iter()
                .filter(|poly| !poly.points.is_empty())
                .map(|poly| poly.points.into_iter().map(|p| position + p).collect())
                .collect(),
            Some(CollisionShape::AaBox { position, size }) => {
                let half = size * 0.5;
                vec![vec![
                    position + Vec2::new(-half.x, -half.y),
                    position + Vec2::new(half.x, -half.y),
                    position + Vec2::new(half.x, half.y),
                    position + Vec2::new(-half.x, half.y),
                ]]
            }
            Some(CollisionShape::Circle { .. }) | None => {
                log::warn!(
                    "Collision-Kamera {} ({}) ohne darstellbares Polygon",
                    entry.name,
                    entry.kind
                );
                Vec::new()
            }
        };

        Self::new(entry.name.clone(), polygons)
    }

    pub fn new(name: String, polygons: Vec<Vec<Vec2>>) -> Self {
        let bounds = polygons
            .iter()
            .fold(Rect2::NOTHING, |rect, poly| rect.united(Rect2::from_points(poly)));
        Self {
            name,
            polygons,
            bounds,
            active_requests: Cell::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygons(&self) -> &[Vec<Vec2>] {
        &self.polygons
    }

    pub fn bounds(&self) -> Rect2 {
        self.bounds
    }

    /// Ankerpunkt für das Namenslabel: Mitte des ersten Polygons.
    pub fn label_anchor(&self) -> Option<Vec2> {
        self.polygons
            .first()
            .map(|poly| Rect2::from_points(poly).center())
    }

    pub fn request_enable(&self) {
        self.active_requests.set(self.active_requests.get() + 1);
    }

    pub fn request_disable(&self) {
        self.active_requests
            .set(self.active_requests.get().saturating_sub(1));
    }

    pub fn is_active(&self) -> bool {
        self.active_requests.get() > 0
    }

    /// Sichtbar, wenn angefordert oder global eingeschaltet.
    pub fn is_visible(&self, paint_all: bool) -> bool {
        paint_all || self.is_active()
    }
}
