//! Gemeinsame Test-Fixtures: ein kleines Szenario im Speicher.

use serde_json::json;

use super::rom_manager::RomManager;
use super::AppState;
use crate::core::{ActorRef, GameVersion, MemoryAssetSource, Scenario};
use crate::shared::ViewerOptions;

pub const SCENARIO: Scenario = Scenario::Hanubia;
pub const CAMERA: &str = "collision_camera_001";
pub const SETUP: &str = "Default";

pub fn entity(name: &str) -> ActorRef {
    ActorRef::new(SCENARIO, "rEntitiesLayer", "default", name)
}

pub fn light(name: &str) -> ActorRef {
    ActorRef::new(SCENARIO, "rLightsLayer", "cave", name)
}

/// Zwei Entities, ein Licht, eine Kamera und ein Setup mit zwei Subareas.
pub fn demo_source() -> MemoryAssetSource {
    let mut source = MemoryAssetSource::new(GameVersion::Dread210);
    source.insert_json(
        &SCENARIO.scenario_file("brfld"),
        &json!({ "Root": { "pScenario": {
            "sLevelID": "c10_samus",
            "sScenarioID": SCENARIO.id(),
            "vLayerFiles": [],
            "rEntitiesLayer": {
                "dctSublayers": { "default": { "dctActors": {
                    "door_001": { "sName": "door_001", "vPos": [0.0, 0.0, 0.0], "oActorDefLink": "" },
                    "switch_001": { "sName": "switch_001", "vPos": [1000.0, 0.0, 0.0], "oActorDefLink": "" }
                }}},
                "dctActorGroups": {
                    "eg_collision_camera_001": [
                        "Root:pScenario:rEntitiesLayer:dctSublayers:default:dctActors:door_001",
                        "Root:pScenario:rEntitiesLayer:dctSublayers:default:dctActors:ghost_001"
                    ]
                }
            },
            "rLightsLayer": {
                "dctSublayers": { "cave": { "dctActors": {
                    "lamp_001": { "sName": "lamp_001", "vPos": [0.0, 500.0, 0.0], "oActorDefLink": "" }
                }}},
                "dctActorGroups": {
                    "lg_collision_camera_001": [
                        "Root:pScenario:rLightsLayer:dctSublayers:cave:dctActors:lamp_001"
                    ]
                }
            }
        }}}),
    );
    source.insert_json(
        &SCENARIO.scenario_file("bmmap"),
        &json!({ "Root": { "gridDef": { "vGridMin": [-500.0, -500.0], "vGridMax": [1500.0, 1000.0] } } }),
    );
    source.insert_json(
        &SCENARIO.scenario_file("bmsnav"),
        &json!({
            "aNavmeshGeos": [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]],
            "areas": [{ "vertices": [0, 1, 2] }]
        }),
    );
    source.insert_json(
        &SCENARIO.scenario_file("bmscc"),
        &json!({ "layers": [{ "name": "default", "entries": [{
            "name": CAMERA,
            "type": "POLYCOLLECTION2D",
            "data": { "position": [-200.0, -200.0], "polys": [{ "points": [
                { "x": 0.0, "y": 0.0 }, { "x": 400.0, "y": 0.0 },
                { "x": 400.0, "y": 900.0 }, { "x": 0.0, "y": 900.0 }
            ], "loop": true }]}
        }]}]}),
    );
    source.insert_json(
        &SCENARIO.scenario_file("brsa"),
        &json!({ "Root": { "pSubareaManager": { "vSubareaSetups": [{
            "sId": SETUP,
            "vSubareaConfigs": [
                { "sId": CAMERA, "asItemsIds": ["", "lg_collision_camera_001", "", "", "eg_collision_camera_001"] },
                { "sId": "collision_camera_099", "asItemsIds": ["", "", "", "", "eg_missing"] }
            ]
        }]}}}),
    );
    source
}

/// RomManager mit geöffnetem Demo-Szenario.
pub fn loaded_rom() -> RomManager {
    let mut rom = RomManager::from_source(Box::new(demo_source()), Vec::<String>::new());
    if let Err(e) = rom.open_scenario(SCENARIO) {
        panic!("Demo-Szenario sollte laden: {e}");
    }
    rom
}

/// AppState mit geöffnetem Demo-Szenario und bekanntem Viewport.
pub fn loaded_state() -> AppState {
    let mut state = AppState::with_rom(loaded_rom(), ViewerOptions::default());
    state.view.viewport_size = [800.0, 600.0];
    state.view.camera.zoom = 40.0;
    state
}
