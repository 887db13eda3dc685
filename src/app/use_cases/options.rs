//! Use-Case-Funktionen für Viewer-Optionen.

use crate::app::AppState;
use crate::shared::PaintOption;

/// Schaltet eine Zeichen-Ebene und persistiert die Optionen.
pub fn set_paint_option(
    state: &mut AppState,
    option: PaintOption,
    enabled: bool,
) -> anyhow::Result<()> {
    state.options.set_paint(option, enabled);
    log::info!("{}: {}", option.label(), if enabled { "an" } else { "aus" });
    persist(state)
}

/// Schreibt die Optionen an den konfigurierten Pfad, falls vorhanden.
pub fn persist(state: &AppState) -> anyhow::Result<()> {
    match &state.config_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ViewerOptions;

    #[test]
    fn toggle_is_written_to_config_file() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("viewer.toml");
        let mut state = AppState::new();
        state.config_path = Some(path.clone());

        set_paint_option(&mut state, PaintOption::LogicPaths, true).expect("speichern");

        assert!(state.options.paint(PaintOption::LogicPaths));
        let loaded = ViewerOptions::load_from_file(&path);
        assert!(loaded.paint_logic_paths);
    }

    #[test]
    fn without_config_path_nothing_is_written() {
        let mut state = AppState::new();

        set_paint_option(&mut state, PaintOption::Geometry, false).expect("kein Fehler");

        assert!(!state.options.paint_geometry);
    }
}
