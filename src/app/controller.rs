//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Fokuswünsche aus Selektion oder Kamera-Auswahl werden danach einmal
    /// auf die Kamera angewendet.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        super::handlers::view::apply_focus_request(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === RomFS & Szenario ===
            AppCommand::RequestRomDialog => handlers::rom::request_dialog(state),
            AppCommand::SelectRom { path } => handlers::rom::select(state, path)?,
            AppCommand::OpenScenario { scenario } => {
                handlers::rom::open_scenario(state, scenario)?
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Selektion ===
            AppCommand::SetActorSelection { actor, change } => {
                handlers::selection::set_actor_selection(state, &actor, change)
            }
            AppCommand::SetHoveredActor { actor } => {
                handlers::selection::set_hovered_actor(state, actor.as_ref())
            }
            AppCommand::SelectCamera {
                setup_id,
                subarea_id,
            } => handlers::selection::select_camera(state, &setup_id, &subarea_id),

            // === Actor-Listen ===
            AppCommand::SetTreeChecked {
                tree,
                node,
                checked,
            } => handlers::selection::set_tree_checked(state, tree, node, checked),
            AppCommand::ActivateTreeNode { tree, node } => {
                handlers::selection::activate_tree_node(state, tree, node)
            }
            AppCommand::SetTreeHovered {
                tree,
                node,
                hovered,
            } => handlers::selection::set_tree_hovered(state, tree, node, hovered),
            AppCommand::SetTreeExpanded {
                tree,
                node,
                expanded,
            } => handlers::selection::set_tree_expanded(state, tree, node, expanded),
            AppCommand::SetActiveTree { tree } => handlers::selection::set_active_tree(state, tree),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::SetPaintOption { option, enabled } => {
                handlers::dialog::set_paint_option(state, option, enabled)?
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::ClearStatus => handlers::dialog::clear_status(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
