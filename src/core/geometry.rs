//! Achsenparallele Rechtecke in Weltkoordinaten.

use glam::Vec2;

/// Achsenparalleles Rechteck (Welt-Koordinaten, y nach oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Rect2 {
    fn default() -> Self {
        Self::NOTHING
    }
}

impl Rect2 {
    /// Leeres Rechteck; `united` mit einem anderen Rechteck liefert dieses.
    pub const NOTHING: Rect2 = Rect2 {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    /// Erstellt ein Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Self {
        Self::from_corners(center - half_size, center + half_size)
    }

    /// Umschließendes Rechteck aller Punkte.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
        points
            .into_iter()
            .fold(Self::NOTHING, |rect, p| rect.extended(*p))
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn extended(self, point: Vec2) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    pub fn united(self, other: Rect2) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn expanded(self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &Rect2) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn union_of_nothing_is_identity() {
        let rect = Rect2::from_corners(Vec2::new(2.0, 3.0), Vec2::new(-1.0, 0.0));
        assert_eq!(Rect2::NOTHING.united(rect), rect);
        assert!(Rect2::NOTHING.is_empty());
        assert!(!rect.is_empty());
    }

    #[test]
    fn points_span_bounds() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(4.0, -2.0), Vec2::new(1.0, 5.0)];
        let rect = Rect2::from_points(&points);
        assert_relative_eq!(rect.min.y, -2.0);
        assert_relative_eq!(rect.max.x, 4.0);
        assert_relative_eq!(rect.center().y, 1.5);
        assert!(rect.contains(Vec2::new(2.0, 2.0)));
        assert!(!rect.contains(Vec2::new(5.0, 2.0)));
    }

    #[test]
    fn intersection_touching_edges() {
        let a = Rect2::from_corners(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect2::from_corners(Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0));
        let c = Rect2::from_corners(Vec2::new(11.0, 0.0), Vec2::new(20.0, 5.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
