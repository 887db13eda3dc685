//! Zentrale Konfiguration für den Dread Level Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte und wird beim
//! Start einmal geladen. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::ShapeCategory;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.01;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 50.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;

/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "dread_level_viewer.toml";

/// Einzeln schaltbare Zeichen-Ebenen der Szenario-Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintOption {
    Geometry,
    CollisionCameras,
    Doors,
    Collision,
    Breakables,
    LogicShapes,
    LogicPaths,
    WorldGraph,
    PositionalSound,
}

impl PaintOption {
    /// Alle Optionen in Menü-Reihenfolge.
    pub const ALL: [PaintOption; 9] = [
        PaintOption::Geometry,
        PaintOption::CollisionCameras,
        PaintOption::Doors,
        PaintOption::Collision,
        PaintOption::Breakables,
        PaintOption::LogicShapes,
        PaintOption::LogicPaths,
        PaintOption::WorldGraph,
        PaintOption::PositionalSound,
    ];

    /// Menütext.
    pub fn label(self) -> &'static str {
        match self {
            PaintOption::Geometry => "Static Geometry",
            PaintOption::CollisionCameras => "Collision Cameras",
            PaintOption::Doors => "Doors",
            PaintOption::Collision => "Collision",
            PaintOption::Breakables => "Breakable Tiles",
            PaintOption::LogicShapes => "Logic Shapes",
            PaintOption::LogicPaths => "Logic Paths",
            PaintOption::WorldGraph => "World Graph",
            PaintOption::PositionalSound => "Positional Sounds",
        }
    }

    /// Zeichen-Option, die eine Shape-Kategorie steuert.
    pub fn for_category(category: ShapeCategory) -> Self {
        match category {
            ShapeCategory::Doors => PaintOption::Doors,
            ShapeCategory::Collision => PaintOption::Collision,
            ShapeCategory::Breakables => PaintOption::Breakables,
            ShapeCategory::LogicShapes => PaintOption::LogicShapes,
            ShapeCategory::LogicPaths => PaintOption::LogicPaths,
            ShapeCategory::WorldGraph => PaintOption::WorldGraph,
            ShapeCategory::PositionalSound => PaintOption::PositionalSound,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `dread_level_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Zuletzt gültig gewähltes RomFS-Verzeichnis
    pub romfs_dir: Option<String>,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Navmesh-Geometrie als Hintergrund
    pub paint_geometry: bool,
    /// Alle Collision-Kameras (sonst nur aufgeklappte)
    pub paint_collision_cameras: bool,
    /// Türen und Tür-Sensoren
    pub paint_doors: bool,
    /// Kollisionsformen der Actors
    pub paint_collision: bool,
    /// Zerstörbare Blöcke
    pub paint_breakables: bool,
    /// Logik-Formen (Trigger, Spawn-Bereiche)
    pub paint_logic_shapes: bool,
    /// Logik-Pfade
    pub paint_logic_paths: bool,
    /// Welt-Graph der Navigation
    pub paint_world_graph: bool,
    /// Dämpfungsradien positionaler Sounds
    pub paint_positional_sound: bool,

    // ── Assets ──────────────────────────────────────────────────
    /// Asset-Pfade, die nie aufgelöst werden (bekannt defekte Dateien)
    pub known_bad_assets: Vec<String>,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            romfs_dir: None,

            paint_geometry: true,
            paint_collision_cameras: true,
            paint_doors: true,
            paint_collision: true,
            paint_breakables: true,
            paint_logic_shapes: false,
            paint_logic_paths: false,
            paint_world_graph: false,
            paint_positional_sound: false,

            known_bad_assets: Vec::new(),

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dread_level_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    pub fn paint(&self, option: PaintOption) -> bool {
        match option {
            PaintOption::Geometry => self.paint_geometry,
            PaintOption::CollisionCameras => self.paint_collision_cameras,
            PaintOption::Doors => self.paint_doors,
            PaintOption::Collision => self.paint_collision,
            PaintOption::Breakables => self.paint_breakables,
            PaintOption::LogicShapes => self.paint_logic_shapes,
            PaintOption::LogicPaths => self.paint_logic_paths,
            PaintOption::WorldGraph => self.paint_world_graph,
            PaintOption::PositionalSound => self.paint_positional_sound,
        }
    }

    pub fn set_paint(&mut self, option: PaintOption, enabled: bool) {
        let slot = match option {
            PaintOption::Geometry => &mut self.paint_geometry,
            PaintOption::CollisionCameras => &mut self.paint_collision_cameras,
            PaintOption::Doors => &mut self.paint_doors,
            PaintOption::Collision => &mut self.paint_collision,
            PaintOption::Breakables => &mut self.paint_breakables,
            PaintOption::LogicShapes => &mut self.paint_logic_shapes,
            PaintOption::LogicPaths => &mut self.paint_logic_paths,
            PaintOption::WorldGraph => &mut self.paint_world_graph,
            PaintOption::PositionalSound => &mut self.paint_positional_sound,
        };
        *slot = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_paint_first_five_layers() {
        let options = ViewerOptions::default();
        let enabled: Vec<_> = PaintOption::ALL
            .into_iter()
            .filter(|o| options.paint(*o))
            .collect();

        assert_eq!(
            enabled,
            vec![
                PaintOption::Geometry,
                PaintOption::CollisionCameras,
                PaintOption::Doors,
                PaintOption::Collision,
                PaintOption::Breakables,
            ]
        );
        assert!(options.romfs_dir.is_none());
        assert!(options.known_bad_assets.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: ViewerOptions =
            toml::from_str("romfs_dir = \"/data/romfs\"\npaint_world_graph = true\n")
                .expect("TOML sollte parsen");

        assert_eq!(options.romfs_dir.as_deref(), Some("/data/romfs"));
        assert!(options.paint_world_graph);
        assert!(options.paint_doors);
        assert_eq!(options.camera_zoom_max, CAMERA_ZOOM_MAX);
    }

    #[test]
    fn save_and_load_keep_values() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut options = ViewerOptions::default();
        options.set_paint(PaintOption::Doors, false);
        options.known_bad_assets.push("actors/broken.bmsad".into());
        options.save_to_file(&path).expect("Speichern");

        assert_eq!(ViewerOptions::load_from_file(&path), options);
    }

    #[test]
    fn broken_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "paint_doors = [").expect("Schreiben");

        assert_eq!(ViewerOptions::load_from_file(&path), ViewerOptions::default());
    }

    #[test]
    fn every_shape_category_has_a_paint_option() {
        assert_eq!(
            PaintOption::for_category(ShapeCategory::WorldGraph),
            PaintOption::WorldGraph
        );
        assert_eq!(
            PaintOption::for_category(ShapeCategory::Doors).label(),
            "Doors"
        );
    }
}
