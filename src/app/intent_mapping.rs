//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::{AppCommand, AppIntent, AppState};
use crate::core::{ActorRef, DataActivation, SelectionChange, DOT_SIZE};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectRomRequested => vec![AppCommand::RequestRomDialog],
        AppIntent::RomDirectorySelected { path } => vec![AppCommand::SelectRom { path }],
        AppIntent::OpenScenarioRequested { scenario } => {
            vec![AppCommand::OpenScenario { scenario }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::PaintOptionToggled { option, enabled } => {
            vec![AppCommand::SetPaintOption { option, enabled }]
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::ActorPickRequested { world_pos } => pick_candidates(state, world_pos)
            .into_iter()
            .next()
            .map(|actor| AppCommand::SetActorSelection {
                actor,
                change: SelectionChange::Toggle,
            })
            .into_iter()
            .collect(),
        AppIntent::ActorUnselectAtRequested { world_pos } => pick_candidates(state, world_pos)
            .into_iter()
            .filter(|actor| {
                state
                    .rom
                    .get_actor(actor)
                    .is_some_and(|actor| actor.is_selected())
            })
            .map(|actor| AppCommand::SetActorSelection {
                actor,
                change: SelectionChange::Unselect,
            })
            .collect(),
        AppIntent::PointerMoved { world_pos } => {
            let target = world_pos.and_then(|pos| pick_candidates(state, pos).into_iter().next());
            if target == state.selection.hovered() {
                Vec::new()
            } else {
                vec![AppCommand::SetHoveredActor { actor: target }]
            }
        }

        AppIntent::TreeCheckToggled {
            tree,
            node,
            checked,
        } => vec![AppCommand::SetTreeChecked {
            tree,
            node,
            checked,
        }],
        AppIntent::TreeNodeActivated { tree, node } => {
            vec![AppCommand::ActivateTreeNode { tree, node }]
        }
        AppIntent::TreeNodeHovered {
            tree,
            node,
            hovered,
        } => vec![AppCommand::SetTreeHovered {
            tree,
            node,
            hovered,
        }],
        AppIntent::TreeNodeExpanded {
            tree,
            node,
            expanded,
        } => vec![AppCommand::SetTreeExpanded {
            tree,
            node,
            expanded,
        }],
        AppIntent::TreeTabSelected { tree } => vec![AppCommand::SetActiveTree { tree }],

        AppIntent::DataNodeActivated { actor, path } => {
            let activation = state
                .selection
                .records()
                .iter()
                .find(|record| record.actor == actor)
                .map(|record| record.activate(&path))
                .unwrap_or(DataActivation::None);

            match activation {
                DataActivation::UnselectActor(actor) => vec![AppCommand::SetActorSelection {
                    actor,
                    change: SelectionChange::Unselect,
                }],
                DataActivation::SelectActor(actor) => vec![AppCommand::SetActorSelection {
                    actor,
                    change: SelectionChange::Select,
                }],
                DataActivation::SelectCamera {
                    setup_id,
                    subarea_id,
                } => vec![AppCommand::SelectCamera {
                    setup_id,
                    subarea_id,
                }],
                DataActivation::None => Vec::new(),
            }
        }
        AppIntent::StatusDismissed => vec![AppCommand::ClearStatus],
    }
}

/// Sichtbare (gecheckte) Actors unter dem Cursor, nach Distanz sortiert.
///
/// Der Radius ist mindestens die Punktgröße, damit Punkte auch weit
/// herausgezoomt auf ihrer ganzen Fläche treffbar bleiben.
fn pick_candidates(state: &AppState, world_pos: Vec2) -> Vec<ActorRef> {
    let Some(scenario) = state.scenario() else {
        return Vec::new();
    };

    let radius = state
        .view
        .camera
        .pick_radius_world(
            state.view.viewport_size[1],
            state.options.selection_pick_radius_px,
        )
        .max(DOT_SIZE);

    scenario
        .spatial
        .within_radius(world_pos, radius)
        .into_iter()
        .filter(|m| {
            scenario
                .get_actor(&m.actor)
                .is_some_and(|actor| actor.is_checked())
        })
        .map(|m| m.actor)
        .collect()
}
