//! Use-Case-Funktionen für Actor-Selektion und die Actor-Listen.
//!
//! Aufgeteilt nach Einstiegspunkt:
//! - `actors`: Selektion und Hover direkt über Actor-Referenzen
//! - `trees`: Checkbox, Doppelklick, Hover und Aufklappen in den Listen
//! - `cameras`: Collision-Kamera einer Subarea zeigen

mod actors;
mod cameras;
mod trees;

pub use actors::{set_actor_selection, set_hovered_actor};
pub use cameras::select_camera;
pub use trees::{
    activate_tree_node, set_active_tree, set_tree_checked, set_tree_expanded, set_tree_hovered,
};
