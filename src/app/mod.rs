//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod rom_manager;
pub mod selection;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (RomFS, Szenario, View, UI).
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use rom_manager::{
    LoadError, LoadIssue, LoadState, LoadTicket, RomManager, ScenarioLoadResult, SetupBinding,
    SubareaBinding, TreeKind,
};
pub use selection::SelectionCoordinator;
pub use state::{AppState, UiState, ViewState};
