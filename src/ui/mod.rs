//! UI-Komponenten: Menü, Status-Bar, Actor-Listen, Detail-Panel, Input-Handling.

pub mod data_panel;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;
pub mod tree_panel;

pub use data_panel::render_data_panel;
pub use dialogs::handle_rom_dialog;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use tree_panel::{render_tree_panel, TreePanelState};
