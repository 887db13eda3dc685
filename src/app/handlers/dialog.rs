//! Handler für Optionen, Status und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::PaintOption;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Setzt eine Zeichen-Option und persistiert die Optionen.
pub fn set_paint_option(
    state: &mut AppState,
    option: PaintOption,
    enabled: bool,
) -> anyhow::Result<()> {
    use_cases::options::set_paint_option(state, option, enabled)
}

/// Entfernt die Statusmeldung.
pub fn clear_status(state: &mut AppState) {
    state.ui.status_message = None;
}
