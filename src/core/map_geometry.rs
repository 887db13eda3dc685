//! Hintergrund-Geometrie eines Szenarios aus dem Navmesh.

use glam::Vec2;

use super::assets::{GridDefinition, NavMesh};
use super::Rect2;

/// Rand um die Rastergrenzen in Welteinheiten.
pub const BORDER_PADDING: f32 = 3000.0;

/// Eine Navmesh-Fläche: achsenparallele Box oder allgemeines Polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum MapArea {
    Rect(Rect2),
    Polygon(Vec<Vec2>),
}

impl MapArea {
    pub fn bounds(&self) -> Rect2 {
        match self {
            MapArea::Rect(rect) => *rect,
            MapArea::Polygon(points) => Rect2::from_points(points),
        }
    }

    /// Vier Eckpunkte mit paarweise gleichen x- bzw. y-Werten ergeben eine Box.
    fn from_vertices(points: Vec<Vec2>) -> Self {
        if let [a, b, c, d] = points.as_slice() {
            if a.x == b.x && c.x == d.x && a.y == d.y && b.y == c.y {
                return MapArea::Rect(Rect2::from_corners(*d, *b));
            }
        }
        MapArea::Polygon(points)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapGeometry {
    areas: Vec<MapArea>,
}

impl MapGeometry {
    /// Baut die Flächen aus dem Navmesh; ungültige Vertex-Indizes werden ausgelassen.
    pub fn from_navmesh(navmesh: &NavMesh) -> Self {
        let areas = navmesh
            .areas
            .iter()
            .map(|area| {
                let points = area
                    .vertices
                    .iter()
                    .filter_map(|&index| navmesh.vertex(index))
                    .collect::<Vec<_>>();
                MapArea::from_vertices(points)
            })
            .filter(|area| !area.bounds().is_empty())
            .collect();

        Self { areas }
    }

    pub fn areas(&self) -> &[MapArea] {
        &self.areas
    }

    /// Flächen, die das sichtbare Rechteck schneiden.
    pub fn visible_areas<'a>(&'a self, view: &'a Rect2) -> impl Iterator<Item = &'a MapArea> + 'a {
        self.areas
            .iter()
            .filter(move |area| area.bounds().intersects(view))
    }
}

/// Szenen-Grenzen: Rastergrenzen plus Rand.
pub fn padded_bounds(grid: &GridDefinition) -> Rect2 {
    Rect2::from_corners(grid.min, grid.max).expanded(BORDER_PADDING)
}
