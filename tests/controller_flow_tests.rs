mod common;

use common::{entity, write_romfs, CAMERA, SCENARIO, SETUP};
use dread_level_viewer::app::build_render_scene;
use dread_level_viewer::core::ActorTree;
use dread_level_viewer::{
    AppCommand, AppController, AppIntent, AppState, PaintOption, TreeKind, ViewerOptions,
};
use glam::Vec2;

/// Controller und State mit geöffnetem Demo-Szenario aus einem RomFS-Ordner.
fn opened(dir: &tempfile::TempDir) -> (AppController, AppState) {
    write_romfs(dir.path());
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RomDirectorySelected {
                path: dir.path().to_string_lossy().into_owned(),
            },
        )
        .expect("RomDirectorySelected");
    controller
        .handle_intent(&mut state, AppIntent::OpenScenarioRequested { scenario: SCENARIO })
        .expect("OpenScenarioRequested");

    (controller, state)
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_invalid_rom_directory_only_sets_status() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RomDirectorySelected {
                path: dir.path().to_string_lossy().into_owned(),
            },
        )
        .expect("kein harter Fehler");

    assert!(state.ui.status_message.is_some());
    assert!(!state.rom.is_rom_selected());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SelectRom { .. })
    ));

    controller
        .handle_intent(&mut state, AppIntent::StatusDismissed)
        .expect("StatusDismissed");
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_open_scenario_without_rom_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result =
        controller.handle_intent(&mut state, AppIntent::OpenScenarioRequested { scenario: SCENARIO });

    assert!(result.is_err());
    assert!(state.ui.status_message.is_some());
    assert!(state.scenario().is_none());
}

#[test]
fn test_full_flow_opens_scenario_and_fits_camera() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (_controller, state) = opened(&dir);

    let scenario = state.scenario().expect("Szenario geöffnet");
    assert_eq!(scenario.scenario, SCENARIO);
    assert_eq!(state.view.camera.position, scenario.map_bounds.center());
    assert!(state.window_title().contains(SCENARIO.long_name()));
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_double_click_selects_actor_and_focuses_camera() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ActorPickRequested {
                world_pos: Vec2::new(1005.0, -3.0),
            },
        )
        .expect("ActorPickRequested");

    assert!(state.selection.is_loaded(&entity("switch_001")));
    assert_eq!(state.view.camera.position, Vec2::new(1000.0, 0.0));

    let scene = build_render_scene(&state, [800.0, 600.0]);
    let dot = scene
        .actors
        .iter()
        .find(|dot| dot.actor == entity("switch_001"))
        .expect("Punkt im Bild");
    assert!(dot.selected);
}

#[test]
fn test_data_root_double_click_unselects_actor() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ActorPickRequested {
                world_pos: Vec2::ZERO,
            },
        )
        .expect("ActorPickRequested");
    assert_eq!(state.selection.record_count(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DataNodeActivated {
                actor: entity("door_001"),
                path: Vec::new(),
            },
        )
        .expect("DataNodeActivated");

    assert_eq!(state.selection.record_count(), 0);
    assert!(!state
        .rom
        .get_actor(&entity("door_001"))
        .expect("Actor")
        .is_selected());
}

#[test]
fn test_right_click_unselects_actor_under_cursor() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);
    let door = Vec2::ZERO;
    controller
        .handle_intent(&mut state, AppIntent::ActorPickRequested { world_pos: door })
        .expect("ActorPickRequested");

    controller
        .handle_intent(&mut state, AppIntent::ActorUnselectAtRequested { world_pos: door })
        .expect("ActorUnselectAtRequested");

    assert!(!state.selection.is_loaded(&entity("door_001")));
}

#[test]
fn test_unchecking_layer_hides_dots() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);
    let layer = state
        .scenario()
        .and_then(|s| s.entity_tree.find_child(ActorTree::ROOT, "rEntitiesLayer"))
        .expect("Layer-Knoten");

    controller
        .handle_intent(
            &mut state,
            AppIntent::TreeCheckToggled {
                tree: TreeKind::Entities,
                node: layer,
                checked: false,
            },
        )
        .expect("TreeCheckToggled");

    let scene = build_render_scene(&state, [800.0, 600.0]);
    assert!(scene
        .actors
        .iter()
        .all(|dot| dot.actor.layer != "rEntitiesLayer"));
    assert!(!scene.actors.is_empty());
}

#[test]
fn test_expanding_camera_node_shows_camera_outline() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);
    state.options.paint_collision_cameras = false;
    let node = state
        .scenario()
        .and_then(|s| s.subarea_tree.find_camera_node(SETUP, CAMERA))
        .expect("Kamera-Knoten");

    assert!(build_render_scene(&state, [800.0, 600.0]).cameras.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::TreeNodeExpanded {
                tree: TreeKind::Subareas,
                node,
                expanded: true,
            },
        )
        .expect("TreeNodeExpanded");

    let scene = build_render_scene(&state, [800.0, 600.0]);
    assert_eq!(scene.cameras.len(), 1);
    assert_eq!(scene.cameras[0].name, CAMERA);
}

#[test]
fn test_paint_option_is_persisted_to_config() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let config = dir.path().join("viewer.toml");
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.config_path = Some(config.clone());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PaintOptionToggled {
                option: PaintOption::Doors,
                enabled: false,
            },
        )
        .expect("PaintOptionToggled");

    assert!(!state.options.paint_doors);
    let reloaded = ViewerOptions::load_from_file(&config);
    assert!(!reloaded.paint_doors);
    assert!(reloaded.paint_geometry);
}

#[test]
fn test_command_log_records_every_command() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let (mut controller, mut state) = opened(&dir);
    let before = state.command_log.len();

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomInRequested");
    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCameraRequested");

    let entries = &state.command_log.entries()[before..];
    assert_eq!(entries, &[AppCommand::ZoomIn, AppCommand::ResetCamera]);
}
