//! Handler für RomFS-Auswahl und Szenario-Laden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Scenario;

/// Öffnet den RomFS-Ordnerdialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::scenario::request_rom_dialog(state);
}

/// Wählt ein RomFS-Verzeichnis.
pub fn select(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::scenario::select_rom(state, &path)
}

/// Lädt ein Szenario und propagiert Fehler an den Aufrufer.
pub fn open_scenario(state: &mut AppState, scenario: Scenario) -> anyhow::Result<()> {
    use_cases::scenario::open_scenario(state, scenario)
}
