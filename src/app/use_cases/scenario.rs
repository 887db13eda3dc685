//! Use-Case-Funktionen für RomFS-Auswahl und Szenario-Laden.

use crate::app::AppState;
use crate::core::Scenario;

/// Öffnet den RomFS-Ordnerdialog über UI-State.
pub fn request_rom_dialog(state: &mut AppState) {
    state.ui.show_rom_dialog = true;
}

/// Wählt ein RomFS-Verzeichnis und merkt es sich bei Erfolg in den Optionen.
///
/// Ein ungültiges Verzeichnis ist kein Fehler, sondern eine Statusmeldung.
pub fn select_rom(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    if !state.rom.select_rom(path) {
        state.ui.status_message = Some(format!("Kein gültiges RomFS: {}", path));
        return Ok(());
    }

    state.ui.status_message = None;
    state.options.romfs_dir = Some(path.to_string());
    super::options::persist(state)
}

/// Öffnet ein Szenario und passt die Kamera ein.
///
/// Bei einem Fehler bleibt das bisherige Szenario erhalten; die Meldung
/// landet zusätzlich in der Status-Bar.
pub fn open_scenario(state: &mut AppState, scenario: Scenario) -> anyhow::Result<()> {
    let bounds = match state.rom.open_scenario(scenario) {
        Ok(result) => {
            if !result.issues.is_empty() {
                log::info!(
                    "{}: {} Hinweise beim Verknüpfen der Subareas",
                    scenario,
                    result.issues.len()
                );
            }
            result.map_bounds
        }
        Err(e) => {
            let msg = format!("{} konnte nicht geladen werden: {}", scenario.long_name(), e);
            log::error!("{}", msg);
            state.ui.status_message = Some(msg);
            return Err(e.into());
        }
    };

    state.selection.clear();
    state.ui.status_message = None;
    super::camera::fit_to_bounds(state, bounds);
    Ok(())
}
