//! Asset-Zugriff: Quelle (RomFS oder Speicher), Cache und Typprüfung.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

use super::AssetKind;
use crate::core::{GameVersion, Scenario};

/// Fehler beim Auflösen eines Assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset nicht gefunden: {path}")]
    NotFound { path: String },
    #[error("Asset {path} ist kein {expected}")]
    TypeMismatch { path: String, expected: &'static str },
    #[error("Asset {path} ist beschädigt: {source}")]
    Parse {
        path: String,
        #[source]
        source: Arc<serde_json::Error>,
    },
    #[error("Asset {path} ist als defekt bekannt und wird übersprungen")]
    KnownBad { path: String },
    #[error("Asset {path} konnte nicht gelesen werden: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub fn path(&self) -> &str {
        match self {
            AssetError::NotFound { path }
            | AssetError::TypeMismatch { path, .. }
            | AssetError::Parse { path, .. }
            | AssetError::KnownBad { path }
            | AssetError::Io { path, .. } => path,
        }
    }
}

/// Fehler bei der Auswahl eines RomFS-Verzeichnisses.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("Kein gültiges RomFS: {} ({reason})", .path.display())]
    InvalidRoot { path: PathBuf, reason: &'static str },
}

/// Liefert Rohdaten eines Assets anhand seines normalisierten Pfads.
pub trait AssetSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;

    /// Spielversion, aus der die Daten stammen.
    fn version(&self) -> GameVersion;
}

/// Extrahiertes RomFS auf der Platte.
///
/// Zu jedem Binär-Asset `<pfad>` liegt dessen JSON-Dump als `<pfad>.json`.
#[derive(Debug, Clone)]
pub struct RomFs {
    root: PathBuf,
    version: GameVersion,
}

impl RomFs {
    /// Verzeichnis mit allen Levels relativ zum Root.
    pub const LEVELS_DIR: &'static str = "maps/levels/c10_samus";

    /// Öffnet ein RomFS und bestimmt dessen Version.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, RomError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(RomError::InvalidRoot {
                path: root,
                reason: "kein Verzeichnis",
            });
        }
        if !root.join(Self::LEVELS_DIR).is_dir() {
            return Err(RomError::InvalidRoot {
                path: root,
                reason: "maps/levels/c10_samus fehlt",
            });
        }

        let has_boss_rush = Scenario::ALL
            .into_iter()
            .filter(|s| s.is_boss_rush())
            .any(|s| root.join(s.directory()).is_dir());
        let version = if has_boss_rush {
            GameVersion::Dread210
        } else {
            GameVersion::Dread200
        };

        Ok(Self { root, version })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for RomFs {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let file = self.root.join(format!("{}.json", path));
        std::fs::read(&file).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound {
                    path: path.to_string(),
                }
            } else {
                AssetError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }

    fn version(&self) -> GameVersion {
        self.version
    }
}

/// Asset-Quelle im Speicher, für Tests und Benchmarks.
#[derive(Debug, Clone)]
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
    version: GameVersion,
}

impl MemoryAssetSource {
    pub fn new(version: GameVersion) -> Self {
        Self {
            files: HashMap::new(),
            version,
        }
    }

    /// Legt ein Asset unter seinem normalisierten Pfad ab.
    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) {
        self.files.insert(normalize_path(path), bytes.into());
    }

    /// Legt einen JSON-Wert als Asset ab.
    pub fn insert_json(&mut self, path: &str, value: &serde_json::Value) {
        self.insert(path, value.to_string());
    }

    pub fn remove(&mut self, path: &str) -> bool {
        self.files.remove(&normalize_path(path)).is_some()
    }
}

impl AssetSource for MemoryAssetSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }

    fn version(&self) -> GameVersion {
        self.version
    }
}

/// Vereinheitlicht Pfadtrenner (`\` → `/`) und entfernt führende Slashes.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Löst Assets typisiert auf und cached sie pro Pfad.
///
/// Ein Pfad wird höchstens einmal gelesen und dekodiert, solange der
/// Resolver lebt; das gilt auch für Dateien, die nicht dekodierbar sind.
/// Pfade auf der Liste bekannter defekter Assets werden nie gelesen.
pub struct AssetResolver {
    source: Box<dyn AssetSource>,
    known_bad: HashSet<String>,
    cache: RefCell<HashMap<String, Rc<dyn Any>>>,
    failed: RefCell<HashMap<String, Arc<serde_json::Error>>>,
    parse_count: Cell<usize>,
}

impl AssetResolver {
    pub fn new<I, S>(source: Box<dyn AssetSource>, known_bad: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source,
            known_bad: known_bad
                .into_iter()
                .map(|path| normalize_path(path.as_ref()))
                .collect(),
            cache: RefCell::new(HashMap::new()),
            failed: RefCell::new(HashMap::new()),
            parse_count: Cell::new(0),
        }
    }

    pub fn version(&self) -> GameVersion {
        self.source.version()
    }

    pub fn is_known_bad(&self, path: &str) -> bool {
        self.known_bad.contains(&normalize_path(path))
    }

    /// Liefert das Asset unter `path` als Typ `T`.
    pub fn resolve<T: AssetKind>(&self, path: &str) -> Result<Rc<T>, AssetError> {
        let path = normalize_path(path);

        if self.known_bad.contains(&path) {
            return Err(AssetError::KnownBad { path });
        }

        let expected_suffix = format!(".{}", T::EXTENSION);
        if !path.ends_with(&expected_suffix) {
            return Err(AssetError::TypeMismatch {
                path,
                expected: T::KIND,
            });
        }

        let cached = self.cache.borrow().get(&path).cloned();
        if let Some(asset) = cached {
            log::debug!("Asset aus Cache: {}", path);
            return asset
                .downcast::<T>()
                .map_err(|_| AssetError::TypeMismatch {
                    path,
                    expected: T::KIND,
                });
        }

        let failed = self.failed.borrow().get(&path).cloned();
        if let Some(source) = failed {
            log::debug!("Asset bereits als beschädigt bekannt: {}", path);
            return Err(AssetError::Parse { path, source });
        }

        let bytes = self.source.read(&path)?;
        self.parse_count.set(self.parse_count.get() + 1);
        let asset = match T::parse(&bytes) {
            Ok(asset) => Rc::new(asset),
            Err(e) => {
                let source = Arc::new(e);
                self.failed.borrow_mut().insert(path.clone(), source.clone());
                return Err(AssetError::Parse { path, source });
            }
        };

        let erased: Rc<dyn Any> = asset.clone();
        self.cache.borrow_mut().insert(path, erased);
        Ok(asset)
    }

    /// Anzahl der Assets im Cache.
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Anzahl der Dekodierversuche seit Erstellung, erfolgreich oder nicht.
    pub fn parse_count(&self) -> usize {
        self.parse_count.get()
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field("version", &self.version())
            .field("known_bad", &self.known_bad)
            .field("cached", &self.cached_count())
            .finish()
    }
}
