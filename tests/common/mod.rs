//! Gemeinsame Fixtures der Integrationstests: ein kleines Szenario als
//! JSON-Dumps, wahlweise im Speicher oder als RomFS-Verzeichnis.

#![allow(dead_code)]

use std::path::Path;

use dread_level_viewer::{ActorRef, GameVersion, MemoryAssetSource, Scenario};
use serde_json::{json, Value};

pub const SCENARIO: Scenario = Scenario::Hanubia;
pub const CAMERA: &str = "collision_camera_001";
pub const SETUP: &str = "Default";

pub fn entity(name: &str) -> ActorRef {
    ActorRef::new(SCENARIO, "rEntitiesLayer", "default", name)
}

pub fn light(name: &str) -> ActorRef {
    ActorRef::new(SCENARIO, "rLightsLayer", "cave", name)
}

pub fn sound(name: &str) -> ActorRef {
    ActorRef::new(SCENARIO, "rSoundsLayer", "ambience", name)
}

fn link(layer: &str, sublayer: &str, name: &str) -> String {
    format!("Root:pScenario:{layer}:dctSublayers:{sublayer}:dctActors:{name}")
}

/// Alle Dateien des Demo-Szenarios (Pfad ohne `.json`, Inhalt).
pub fn demo_files() -> Vec<(String, Value)> {
    vec![
        (
            SCENARIO.scenario_file("brfld"),
            json!({ "Root": { "pScenario": {
                "rEntitiesLayer": {
                    "dctSublayers": { "default": { "dctActors": {
                        "door_001": { "sName": "door_001", "vPos": [0.0, 0.0, 0.0], "oActorDefLink": "" },
                        "switch_001": { "sName": "switch_001", "vPos": [1000.0, 0.0, 0.0], "oActorDefLink": "" }
                    }}},
                    "dctActorGroups": {
                        "eg_collision_camera_001": [
                            link("rEntitiesLayer", "default", "door_001"),
                            link("rEntitiesLayer", "default", "ghost_001")
                        ]
                    }
                },
                "rSoundsLayer": {
                    "dctSublayers": { "ambience": { "dctActors": {
                        "hum_001": {
                            "sName": "hum_001",
                            "vPos": [500.0, 500.0, 0.0],
                            "oActorDefLink": "",
                            "pComponents": { "SOUND": {
                                "@type": "CPositionalSoundComponent",
                                "fMinAtt": 100.0,
                                "fMaxAtt": 400.0
                            }}
                        }
                    }}},
                    "dctActorGroups": {
                        "sg_collision_camera_001": [link("rSoundsLayer", "ambience", "hum_001")]
                    }
                },
                "rLightsLayer": {
                    "dctSublayers": { "cave": { "dctActors": {
                        "lamp_001": { "sName": "lamp_001", "vPos": [0.0, 500.0, 0.0], "oActorDefLink": "" }
                    }}},
                    "dctActorGroups": {
                        "lg_collision_camera_001": [link("rLightsLayer", "cave", "lamp_001")]
                    }
                }
            }}}),
        ),
        (
            SCENARIO.scenario_file("bmmap"),
            json!({ "Root": { "gridDef": { "vGridMin": [-500.0, -500.0], "vGridMax": [1500.0, 1000.0] } } }),
        ),
        (
            SCENARIO.scenario_file("bmsnav"),
            json!({
                "aNavmeshGeos": [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]],
                "areas": [{ "vertices": [0, 1, 2] }]
            }),
        ),
        (
            SCENARIO.scenario_file("bmscc"),
            json!({ "layers": [{ "name": "default", "entries": [{
                "name": CAMERA,
                "type": "POLYCOLLECTION2D",
                "data": { "position": [-200.0, -200.0], "polys": [{ "points": [
                    { "x": 0.0, "y": 0.0 }, { "x": 400.0, "y": 0.0 },
                    { "x": 400.0, "y": 900.0 }, { "x": 0.0, "y": 900.0 }
                ], "loop": true }]}
            }]}]}),
        ),
        (
            SCENARIO.scenario_file("brsa"),
            json!({ "Root": { "pSubareaManager": { "vSubareaSetups": [{
                "sId": SETUP,
                "vSubareaConfigs": [{
                    "sId": CAMERA,
                    "asItemsIds": [
                        "",
                        "lg_collision_camera_001",
                        "sg_collision_camera_001",
                        "",
                        "eg_collision_camera_001"
                    ]
                }]
            }]}}}),
        ),
    ]
}

pub fn memory_source() -> MemoryAssetSource {
    let mut source = MemoryAssetSource::new(GameVersion::Dread200);
    for (path, value) in demo_files() {
        source.insert_json(&path, &value);
    }
    source
}

/// Schreibt das Demo-Szenario als extrahiertes RomFS nach `root`.
pub fn write_romfs(root: &Path) {
    for (path, value) in demo_files() {
        let file = root.join(format!("{path}.json"));
        let parent = file.parent().expect("Dateipfad mit Verzeichnis");
        std::fs::create_dir_all(parent).expect("Verzeichnis anlegen");
        std::fs::write(&file, value.to_string()).expect("Datei schreiben");
    }
}

/// Legt ein weiteres, minimales Szenario in `source` ab.
///
/// `layers` wird als `pScenario` übernommen; Karte, Navmesh und Kameras
/// bleiben leer. Ohne `brsa` fehlt die Subarea-Datei.
pub fn insert_minimal_scenario(
    source: &mut MemoryAssetSource,
    scenario: Scenario,
    layers: Value,
    brsa: Option<Value>,
) {
    source.insert_json(&scenario.scenario_file("brfld"), &json!({ "Root": { "pScenario": layers } }));
    source.insert_json(
        &scenario.scenario_file("bmmap"),
        &json!({ "Root": { "gridDef": { "vGridMin": [0.0, 0.0], "vGridMax": [1000.0, 1000.0] } } }),
    );
    source.insert_json(
        &scenario.scenario_file("bmsnav"),
        &json!({ "aNavmeshGeos": [], "areas": [] }),
    );
    source.insert_json(&scenario.scenario_file("bmscc"), &json!({ "layers": [] }));
    if let Some(brsa) = brsa {
        source.insert_json(&scenario.scenario_file("brsa"), &brsa);
    }
}
