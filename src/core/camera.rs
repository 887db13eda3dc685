//! 2D-Kamera für Pan und Zoom über der Szenario-Ansicht.

use glam::Vec2;

use super::Rect2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Welt-y zeigt nach oben, Screen-y nach unten; die Umrechnung spiegelt y.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera (Bildmitte) in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 8192.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen
    pub fn zoom_by(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zentriert auf `bounds` und wählt den Zoom so, dass alles sichtbar ist.
    pub fn fit_to(&mut self, bounds: Rect2, viewport: Vec2) {
        if bounds.is_empty() || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.position = bounds.center();
        let size = bounds.size().max(Vec2::ONE);
        let aspect = viewport.x / viewport.y;
        let zoom_y = 2.0 * Self::BASE_WORLD_EXTENT / size.y;
        let zoom_x = 2.0 * Self::BASE_WORLD_EXTENT * aspect / size.x;
        self.zoom = zoom_x.min(zoom_y).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Konvertiert Screen-Koordinaten (relativ zur Viewport-Ecke) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.world_per_pixel(screen_size.y);
        let offset = screen_pos - screen_size * 0.5;
        self.position + Vec2::new(offset.x, -offset.y) * scale
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zur Viewport-Ecke).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.world_per_pixel(screen_size.y);
        let offset = (world_pos - self.position) / scale;
        screen_size * 0.5 + Vec2::new(offset.x, -offset.y)
    }

    /// Sichtbarer Weltausschnitt.
    pub fn visible_rect(&self, screen_size: Vec2) -> Rect2 {
        Rect2::from_corners(
            self.screen_to_world(Vec2::ZERO, screen_size),
            self.screen_to_world(screen_size, screen_size),
        )
    }

    /// Pick-Radius in Welteinheiten für einen Radius in Pixeln.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
