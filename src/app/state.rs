//! Application State: zentrale Datenhaltung.

use std::path::PathBuf;
use std::rc::Rc;

use super::rom_manager::{RomManager, ScenarioLoadResult, TreeKind};
use super::selection::SelectionCoordinator;
use super::CommandLog;
use crate::core::{ActorObserver, Camera2D};
use crate::shared::ViewerOptions;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der RomFS-Ordnerdialog im nächsten Frame geöffnet werden soll
    pub show_rom_dialog: bool,
    /// Sichtbare Actor-Liste im linken Panel
    pub active_tree: TreeKind,
    /// Statusnachricht (z.B. fehlgeschlagenes Laden)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Szenario-Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// RomFS-Auswahl und aktuelles Szenario
    pub rom: RomManager,
    /// Detail-Datensätze, Fokus und Hover
    pub selection: Rc<SelectionCoordinator>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Zeichen-Schalter, Kamera)
    pub options: ViewerOptions,
    /// Ziel für geänderte Optionen; `None` = nicht persistieren
    pub config_path: Option<PathBuf>,
    /// Command-Log
    pub command_log: CommandLog,
    /// Signalisiert, dass die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt den AppState; das RomFS aus den Optionen wird direkt gewählt.
    pub fn with_options(options: ViewerOptions) -> Self {
        let rom = RomManager::new(&options);
        Self::with_rom(rom, options)
    }

    /// Erstellt den AppState über einem vorbereiteten `RomManager`.
    pub fn with_rom(mut rom: RomManager, options: ViewerOptions) -> Self {
        let selection = Rc::new(SelectionCoordinator::new());
        let observer: Rc<dyn ActorObserver> = selection.clone();
        rom.register_observer(Rc::downgrade(&observer));

        Self {
            rom,
            selection,
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            config_path: None,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Aktuell geöffnetes Szenario.
    pub fn scenario(&self) -> Option<&ScenarioLoadResult> {
        self.rom.current()
    }

    /// Fenstertitel mit Version und geöffnetem Szenario.
    pub fn window_title(&self) -> String {
        let base = format!("Dread Level Viewer v{}", env!("CARGO_PKG_VERSION"));
        match self.scenario() {
            Some(scenario) => format!("{}: {}", base, scenario.scenario.long_name()),
            None => base,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
