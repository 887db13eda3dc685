//! Dread Level Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, RomManager, SelectionCoordinator, TreeKind,
    UiState, ViewState,
};
pub use core::{
    Actor, ActorRef, ActorTree, AssetSource, GameVersion, MemoryAssetSource, RomFs, Scenario,
};
pub use core::{Camera2D, Rect2, SpatialIndex, SpatialMatch};
pub use shared::{PaintOption, RenderScene, ViewerOptions};
