//! Spatial-Index (KD-Tree) über Actor-Positionen für Pick und Hover.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::ActorRef;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialMatch {
    /// Referenz des gefundenen Actors
    pub actor: ActorRef,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Actors eines Szenarios.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    actors: Vec<ActorRef>,
    positions: Vec<Vec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            actors: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus (Referenz, Position)-Paaren.
    pub fn from_positions<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ActorRef, Vec2)>,
    {
        let (actors, positions): (Vec<ActorRef>, Vec<Vec2>) = entries.into_iter().unzip();
        let points: Vec<[f64; 2]> = positions
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&points).into();

        Self {
            tree,
            actors,
            positions,
        }
    }

    /// Gibt die Anzahl indexierter Actors zurück.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Gibt `true` zurück, wenn keine Actors im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    fn to_match(&self, item: u64, distance_sq: f64) -> Option<SpatialMatch> {
        Some(SpatialMatch {
            actor: self.actors.get(item as usize)?.clone(),
            distance: (distance_sq as f32).sqrt(),
        })
    }

    /// Findet den nächsten Actor zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        self.to_match(result.item, result.distance)
    }

    /// Findet alle Actors innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| self.to_match(entry.item, entry.distance))
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Actors innerhalb eines achsenparallelen Rechtecks.
    ///
    /// Nutzt den KD-Tree mit einer umschließenden Kreisabfrage + Nachfilterung.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<ActorRef> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;
        // Radius des umschließenden Kreises (Diagonale / 2)
        let radius_sq = (half.x as f64).powi(2) + (half.y as f64).powi(2);

        self.tree
            .within::<SquaredEuclidean>(&[center.x as f64, center.y as f64], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let pos = self.positions.get(index)?;
                if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
                    self.actors.get(index).cloned()
                } else {
                    None
                }
            })
            .collect()
    }
}
