//! Ordner-Dialog für die RomFS-Auswahl.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet den ausstehenden RomFS-Dialog und gibt AppIntents zurück.
pub fn handle_rom_dialog(ui_state: &mut UiState, last_dir: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_rom_dialog {
        ui_state.show_rom_dialog = false;

        let mut dialog = rfd::FileDialog::new().set_title("RomFS-Ordner wählen");
        if let Some(dir) = last_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_folder() {
            events.push(AppIntent::RomDirectorySelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
