//! RomFS-Auswahl und Laden eines Szenarios.
//!
//! Ein Ladevorgang läuft in drei Schritten: `begin_load` vergibt eine
//! Generation, `build_scenario` baut das Ergebnis ohne Zustand zu verändern,
//! `commit` tauscht es ein. Schlägt der Aufbau fehl, bleibt das vorherige
//! Szenario sichtbar.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::actor_tree::{camera_label, entity_path, subarea_path};
use crate::core::assets::{
    ActorDefinition, CollisionGeometry, LevelLayout, MapGrid, NavMesh, SubareaSetups,
};
use crate::core::map_geometry::padded_bounds;
use crate::core::shapes::{actor_shapes, Shape};
use crate::core::{
    Actor, ActorLink, ActorObserver, ActorRef, ActorTree, AssetError, AssetResolver, AssetSource,
    CollisionCameraItem, GameVersion, LinkError, MapGeometry, Rect2, RomFs, Scenario,
    SpatialIndex,
};
use crate::shared::ViewerOptions;

/// Wurzel-Label der Entity-Liste.
pub const ENTITY_TREE_ROOT: &str = "BRFLD";
/// Wurzel-Label der Subarea-Liste.
pub const SUBAREA_TREE_ROOT: &str = "Setups";

/// Fortschritt des aktuellen Ladevorgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    LoadingLayers,
    LoadingCollisionCameras,
    LoadingSubareas,
    Ready,
    Failed,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Kein RomFS ausgewählt")]
    NoRomSelected,
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("Ladevorgang {generation} für {scenario} wurde durch einen neueren ersetzt")]
    Stale { scenario: Scenario, generation: u64 },
}

/// Nicht fatales Problem beim Verknüpfen der Subareas.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadIssue {
    /// Subarea-Datei nicht ladbar; Subarea-Liste bleibt leer.
    SubareasUnavailable { path: String },
    MissingActorGroup { layer: String, group: String },
    MalformedLink { group: String, link: String, error: LinkError },
    UnknownActor { group: String, actor: ActorRef },
}

/// Eine Subarea mit gebundener Kamera und ihren Actor-Gruppen.
#[derive(Debug, Clone, PartialEq)]
pub struct SubareaBinding {
    pub id: String,
    /// Name der Collision-Kamera; `None`, wenn keine gleichnamige existiert.
    pub camera: Option<String>,
    /// (Layer, Gruppenname)
    pub actor_groups: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupBinding {
    pub id: String,
    pub subareas: Vec<SubareaBinding>,
}

/// Die beiden Actor-Listen eines Szenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TreeKind {
    #[default]
    Entities,
    Subareas,
}

impl TreeKind {
    pub fn label(self) -> &'static str {
        match self {
            TreeKind::Entities => "Actors",
            TreeKind::Subareas => "Subareas",
        }
    }
}

/// Berechtigung, ein gebautes Ergebnis einzutauschen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub scenario: Scenario,
}

/// Alles, was zu einem geöffneten Szenario gehört.
///
/// Wird bei jedem Öffnen vollständig neu gebaut und ersetzt.
pub struct ScenarioLoadResult {
    pub scenario: Scenario,
    pub generation: u64,
    pub actors: IndexMap<ActorRef, Rc<Actor>>,
    pub collision_cameras: IndexMap<String, Rc<CollisionCameraItem>>,
    pub setups: Vec<SetupBinding>,
    pub entity_tree: ActorTree,
    pub subarea_tree: ActorTree,
    pub map_bounds: Rect2,
    pub map_geometry: MapGeometry,
    pub spatial: SpatialIndex,
    /// Vorberechnete Shapes, nur für Actors mit Geometrie.
    pub shapes: IndexMap<ActorRef, Vec<Shape>>,
    pub issues: Vec<LoadIssue>,
}

impl ScenarioLoadResult {
    pub fn get_actor(&self, reference: &ActorRef) -> Option<&Rc<Actor>> {
        self.actors.get(reference)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn tree(&self, kind: TreeKind) -> &ActorTree {
        match kind {
            TreeKind::Entities => &self.entity_tree,
            TreeKind::Subareas => &self.subarea_tree,
        }
    }

    pub fn tree_mut(&mut self, kind: TreeKind) -> &mut ActorTree {
        match kind {
            TreeKind::Entities => &mut self.entity_tree,
            TreeKind::Subareas => &mut self.subarea_tree,
        }
    }

    pub fn collision_camera(&self, name: &str) -> Option<&Rc<CollisionCameraItem>> {
        self.collision_cameras.get(name)
    }

    pub fn selected_actors(&self) -> impl Iterator<Item = &Rc<Actor>> {
        self.actors.values().filter(|actor| actor.is_selected())
    }
}

impl std::fmt::Debug for ScenarioLoadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioLoadResult")
            .field("scenario", &self.scenario)
            .field("generation", &self.generation)
            .field("actors", &self.actors.len())
            .field("collision_cameras", &self.collision_cameras.len())
            .field("issues", &self.issues.len())
            .finish()
    }
}

/// Verwaltet das gewählte RomFS und das aktuell geöffnete Szenario.
pub struct RomManager {
    resolver: Option<AssetResolver>,
    /// Zuletzt gültiger Pfad für einen erneuten Auswahlversuch
    path: Option<String>,
    known_bad: Vec<String>,
    state: Cell<LoadState>,
    generation: u64,
    current: Option<ScenarioLoadResult>,
    /// Beobachter, die an jeden neu gebauten Actor gehängt werden
    observers: Vec<Weak<dyn ActorObserver>>,
}

impl RomManager {
    /// Erstellt den Manager und wählt das RomFS aus den Optionen, falls gesetzt.
    pub fn new(options: &ViewerOptions) -> Self {
        let mut manager = Self::empty(options.known_bad_assets.clone());
        if let Some(path) = options.romfs_dir.as_deref() {
            log::info!("RomFS-Pfad aus Optionen: {}", path);
            manager.select_rom(path);
        }
        manager
    }

    /// Erstellt den Manager direkt über einer Asset-Quelle.
    pub fn from_source<I, S>(source: Box<dyn AssetSource>, known_bad: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known_bad: Vec<String> = known_bad
            .into_iter()
            .map(|path| path.as_ref().to_string())
            .collect();
        let mut manager = Self::empty(known_bad);
        manager.resolver = Some(AssetResolver::new(source, &manager.known_bad));
        manager
    }

    fn empty(known_bad: Vec<String>) -> Self {
        Self {
            resolver: None,
            path: None,
            known_bad,
            state: Cell::new(LoadState::Idle),
            generation: 0,
            current: None,
            observers: Vec::new(),
        }
    }

    /// Wählt ein extrahiertes RomFS. Gibt `false` zurück, wenn es ungültig ist;
    /// Resolver und Pfad sind danach zurückgesetzt.
    pub fn select_rom(&mut self, path: &str) -> bool {
        match RomFs::open(path) {
            Ok(romfs) => {
                log::info!("RomFS gewählt: {} (Version {})", path, romfs.version());
                self.resolver = Some(AssetResolver::new(Box::new(romfs), &self.known_bad));
                self.path = Some(path.to_string());
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                self.resolver = None;
                self.path = None;
                false
            }
        }
    }

    /// Stellt sicher, dass ein Resolver existiert; versucht einmal die
    /// erneute Auswahl des letzten Pfads.
    pub fn assert_rom_selected(&mut self) -> bool {
        if self.resolver.is_some() {
            return true;
        }
        match self.path.clone() {
            Some(path) => self.select_rom(&path),
            None => false,
        }
    }

    pub fn is_rom_selected(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn rom_path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn version(&self) -> Option<GameVersion> {
        self.resolver.as_ref().map(AssetResolver::version)
    }

    /// Szenarien, die in der erkannten Spielversion existieren.
    pub fn available_scenarios(&self) -> Vec<Scenario> {
        self.version()
            .map(|version| Scenario::available(version).collect())
            .unwrap_or_default()
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<&ScenarioLoadResult> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ScenarioLoadResult> {
        self.current.as_mut()
    }

    pub fn is_scenario_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Hängt einen Beobachter an alle aktuellen und künftigen Actors.
    pub fn register_observer(&mut self, observer: Weak<dyn ActorObserver>) {
        if let Some(current) = &self.current {
            for actor in current.actors.values() {
                actor.subscribe(observer.clone());
            }
        }
        self.observers.push(observer);
    }

    pub fn get_actor(&self, reference: &ActorRef) -> Option<&Rc<Actor>> {
        self.current.as_ref()?.get_actor(reference)
    }

    /// Löst eine Actor-Definition auf; ein führendes `actordef:` wird entfernt.
    pub fn get_actor_def(&self, link: &str) -> Result<Rc<ActorDefinition>, LoadError> {
        let resolver = self.resolver.as_ref().ok_or(LoadError::NoRomSelected)?;
        let path = crate::core::actor::strip_actordef_prefix(link);
        Ok(resolver.resolve::<ActorDefinition>(path)?)
    }

    /// Öffnet ein Szenario vollständig und tauscht es bei Erfolg ein.
    pub fn open_scenario(&mut self, scenario: Scenario) -> Result<&ScenarioLoadResult, LoadError> {
        let ticket = self.begin_load(scenario)?;
        let result = self.build_scenario(&ticket)?;
        self.commit(ticket, result)?;
        self.current.as_ref().ok_or(LoadError::NoRomSelected)
    }

    /// Startet einen Ladevorgang und vergibt eine neue Generation.
    pub fn begin_load(&mut self, scenario: Scenario) -> Result<LoadTicket, LoadError> {
        if !self.assert_rom_selected() {
            log::warn!("Kein RomFS ausgewählt, {} wird nicht geladen", scenario);
            self.state.set(LoadState::Failed);
            return Err(LoadError::NoRomSelected);
        }

        self.generation += 1;
        log::info!(
            "Lade Szenario {} ({}), Generation {}",
            scenario.long_name(),
            scenario,
            self.generation
        );
        Ok(LoadTicket {
            generation: self.generation,
            scenario,
        })
    }

    /// Tauscht ein gebautes Ergebnis ein, sofern kein neuerer Ladevorgang begonnen hat.
    pub fn commit(
        &mut self,
        ticket: LoadTicket,
        result: ScenarioLoadResult,
    ) -> Result<(), LoadError> {
        if ticket.generation != self.generation {
            log::warn!(
                "Veraltetes Ergebnis für {} verworfen (Generation {}, aktuell {})",
                ticket.scenario,
                ticket.generation,
                self.generation
            );
            return Err(LoadError::Stale {
                scenario: ticket.scenario,
                generation: ticket.generation,
            });
        }

        log::info!(
            "Szenario {} geladen: {} Actors, {} Kameras, {} Setups, {} Probleme",
            result.scenario,
            result.actors.len(),
            result.collision_cameras.len(),
            result.setups.len(),
            result.issues.len()
        );
        self.current = Some(result);
        self.state.set(LoadState::Ready);
        Ok(())
    }

    /// Baut das Ergebnis für `ticket`, ohne das aktuelle Szenario anzutasten.
    ///
    /// Bei einem Fehler steht der Ladezustand danach auf `Failed`.
    pub fn build_scenario(&self, ticket: &LoadTicket) -> Result<ScenarioLoadResult, LoadError> {
        let result = self.build_steps(ticket);
        if let Err(e) = &result {
            log::warn!("Szenario {} konnte nicht gebaut werden: {}", ticket.scenario, e);
            self.state.set(LoadState::Failed);
        }
        result
    }

    fn build_steps(&self, ticket: &LoadTicket) -> Result<ScenarioLoadResult, LoadError> {
        let resolver = self.resolver.as_ref().ok_or(LoadError::NoRomSelected)?;
        let scenario = ticket.scenario;

        self.state.set(LoadState::LoadingLayers);
        let layout = resolver.resolve::<LevelLayout>(&scenario.scenario_file("brfld"))?;
        let mut actors = IndexMap::with_capacity(layout.actor_count());
        let mut entity_tree = ActorTree::new(ENTITY_TREE_ROOT);
        for (layer_name, layer) in &layout.layers {
            for (sublayer_name, sublayer) in &layer.sublayers {
                for (actor_name, placement) in &sublayer.actors {
                    let reference = ActorRef::new(scenario, layer_name, sublayer_name, actor_name);
                    let actor = Rc::new(Actor::new(reference.clone(), placement.clone(), resolver));
                    for observer in &self.observers {
                        actor.subscribe(observer.clone());
                    }
                    entity_tree.add_actor(&entity_path(&reference), &actor);
                    actors.insert(reference, actor);
                }
            }
        }
        log::debug!("{}: {} Actors gebaut", scenario, actors.len());

        let grid = resolver.resolve::<MapGrid>(&scenario.scenario_file("bmmap"))?;
        let navmesh = resolver.resolve::<NavMesh>(&scenario.scenario_file("bmsnav"))?;
        let map_bounds = padded_bounds(&grid.root.grid_def);
        let map_geometry = MapGeometry::from_navmesh(&navmesh);

        self.state.set(LoadState::LoadingCollisionCameras);
        let cameras_asset = resolver.resolve::<CollisionGeometry>(&scenario.scenario_file("bmscc"))?;
        let collision_cameras: IndexMap<String, Rc<CollisionCameraItem>> = cameras_asset
            .layers
            .first()
            .map(|layer| layer.entries.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                let camera = CollisionCameraItem::from_entry(entry);
                (entry.name.clone(), Rc::new(camera))
            })
            .collect();

        self.state.set(LoadState::LoadingSubareas);
        let mut issues = Vec::new();
        let mut subarea_tree = ActorTree::new(SUBAREA_TREE_ROOT);
        let brsa_path = scenario.scenario_file("brsa");
        let setups = match resolver.resolve::<SubareaSetups>(&brsa_path) {
            Ok(subareas) => link_subareas(
                scenario,
                &subareas,
                &layout,
                &actors,
                &collision_cameras,
                &mut subarea_tree,
                &mut issues,
            ),
            Err(e) => {
                log::warn!("Subareas nicht verfügbar: {}", e);
                issues.push(LoadIssue::SubareasUnavailable { path: brsa_path });
                Vec::new()
            }
        };

        let spatial = SpatialIndex::from_positions(
            actors
                .iter()
                .map(|(reference, actor)| (reference.clone(), actor.position())),
        );
        let shapes = actors
            .iter()
            .filter_map(|(reference, actor)| {
                let shapes = actor_shapes(actor);
                (!shapes.is_empty()).then(|| (reference.clone(), shapes))
            })
            .collect();

        Ok(ScenarioLoadResult {
            scenario,
            generation: ticket.generation,
            actors,
            collision_cameras,
            setups,
            entity_tree,
            subarea_tree,
            map_bounds,
            map_geometry,
            spatial,
            shapes,
            issues,
        })
    }
}

/// Verknüpft Subareas mit Kameras und Actors und füllt die Subarea-Liste.
///
/// Fehlende Gruppen, fehlerhafte Links und unbekannte Actors werden einzeln
/// protokolliert und übersprungen.
fn link_subareas(
    scenario: Scenario,
    subareas: &SubareaSetups,
    layout: &LevelLayout,
    actors: &IndexMap<ActorRef, Rc<Actor>>,
    cameras: &IndexMap<String, Rc<CollisionCameraItem>>,
    tree: &mut ActorTree,
    issues: &mut Vec<LoadIssue>,
) -> Vec<SetupBinding> {
    let mut setups = Vec::with_capacity(subareas.setups().len());

    for setup in subareas.setups() {
        tree.ensure_path(&[setup.id.as_str()]);
        let mut bindings = Vec::with_capacity(setup.configs.len());

        for config in &setup.configs {
            let camera = cameras.get(&config.id);
            let label = camera_label(&config.id, camera.map(Rc::as_ref));
            let camera_node = tree.ensure_path(&[setup.id.as_str(), label.as_str()]);
            if let Some(camera) = camera {
                tree.bind_camera(camera_node, camera.clone());
            }

            let mut groups = Vec::new();
            for (layer, group) in config.actor_groups() {
                groups.push((layer.to_string(), group.to_string()));
                let Some(links) = layout.actor_group(group, layer) else {
                    log::info!("Fehlende Actor-Gruppe: {} ({})", group, layer);
                    issues.push(LoadIssue::MissingActorGroup {
                        layer: layer.to_string(),
                        group: group.to_string(),
                    });
                    continue;
                };

                for link in links {
                    let parsed = match link.parse::<ActorLink>() {
                        Ok(parsed) => parsed,
                        Err(error) => {
                            log::warn!("Ungültiger Actor-Link '{}' in {}: {}", link, group, error);
                            issues.push(LoadIssue::MalformedLink {
                                group: group.to_string(),
                                link: link.clone(),
                                error,
                            });
                            continue;
                        }
                    };

                    let reference = ActorRef::from_link(scenario, &parsed);
                    let Some(actor) = actors.get(&reference) else {
                        log::warn!("Actor nicht gefunden! 0 passende Actors für {}", reference);
                        issues.push(LoadIssue::UnknownActor {
                            group: group.to_string(),
                            actor: reference,
                        });
                        continue;
                    };

                    actor.add_subarea_membership(&setup.id, &config.id);
                    tree.add_actor(&subarea_path(&setup.id, &label, layer), actor);
                }
            }

            bindings.push(SubareaBinding {
                id: config.id.clone(),
                camera: camera.map(|camera| camera.name().to_string()),
                actor_groups: groups,
            });
        }

        setups.push(SetupBinding {
            id: setup.id.clone(),
            subareas: bindings,
        });
    }

    setups
}
