//! Szenario-Katalog (Level-IDs) und Spielversionen.

use std::fmt;

/// Bekannte Versionen des extrahierten RomFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameVersion {
    Dread100,
    Dread101,
    Dread200,
    Dread210,
}

impl GameVersion {
    /// Versions-String für Logs und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            GameVersion::Dread100 => "1.0.0",
            GameVersion::Dread101 => "1.0.1",
            GameVersion::Dread200 => "2.0.0",
            GameVersion::Dread210 => "2.1.0",
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Level ("Szenario") mit fester interner ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scenario {
    Artaria,
    Burenia,
    Cataris,
    Dairon,
    Elun,
    Ferenia,
    Ghavoran,
    Hanubia,
    Itorash,
    CorpiusBossRush,
    KraidBossRush,
    ArtariaCentralUnitBossRush,
    DrogygaBossRush,
    GoldRobotBossRush,
    EscueBossRush,
    ExperimentZ57BossRush,
    DoubleRobotsBossRush,
    GolzunaBossRush,
    EliteChozoBossRush,
    FereniaCentralUnitBossRush,
    CommanderBossRush,
}

impl Scenario {
    /// Alle Szenarien in Menü-Reihenfolge.
    pub const ALL: [Scenario; 21] = [
        Scenario::Artaria,
        Scenario::Burenia,
        Scenario::Cataris,
        Scenario::Dairon,
        Scenario::Elun,
        Scenario::Ferenia,
        Scenario::Ghavoran,
        Scenario::Hanubia,
        Scenario::Itorash,
        Scenario::CorpiusBossRush,
        Scenario::KraidBossRush,
        Scenario::ArtariaCentralUnitBossRush,
        Scenario::DrogygaBossRush,
        Scenario::GoldRobotBossRush,
        Scenario::EscueBossRush,
        Scenario::ExperimentZ57BossRush,
        Scenario::DoubleRobotsBossRush,
        Scenario::GolzunaBossRush,
        Scenario::EliteChozoBossRush,
        Scenario::FereniaCentralUnitBossRush,
        Scenario::CommanderBossRush,
    ];

    /// Interne Level-ID (Verzeichnis- und Dateiname im RomFS).
    pub fn id(self) -> &'static str {
        match self {
            Scenario::Artaria => "s010_cave",
            Scenario::Burenia => "s040_aqua",
            Scenario::Cataris => "s020_magma",
            Scenario::Dairon => "s030_baselab",
            Scenario::Elun => "s060_quarantine",
            Scenario::Ferenia => "s070_basesanc",
            Scenario::Ghavoran => "s050_forest",
            Scenario::Hanubia => "s080_shipyard",
            Scenario::Itorash => "s090_skybase",
            Scenario::CorpiusBossRush => "s201_bossrush_scorpius",
            Scenario::KraidBossRush => "s202_bossrush_kraid",
            Scenario::ArtariaCentralUnitBossRush => "s203_bossrush_cu_artaria",
            Scenario::DrogygaBossRush => "s204_bossrush_drogyga",
            Scenario::GoldRobotBossRush => "s205_bossrush_strong_rcs",
            Scenario::EscueBossRush => "s206_bossrush_escue",
            Scenario::ExperimentZ57BossRush => "s207_bossrush_cooldownx",
            Scenario::DoubleRobotsBossRush => "s208_bossrush_strong_rcs_x2",
            Scenario::GolzunaBossRush => "s209_bossrush_golzuna",
            Scenario::EliteChozoBossRush => "s210_bossrush_elite_cwx",
            Scenario::FereniaCentralUnitBossRush => "s211_bossrush_cu_ferenia",
            Scenario::CommanderBossRush => "s212_bossrush_commander",
        }
    }

    /// Sucht ein Szenario anhand seiner internen ID.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Anzeigename für Menü und Fenstertitel.
    pub fn long_name(self) -> &'static str {
        match self {
            Scenario::Artaria => "Artaria",
            Scenario::Burenia => "Burenia",
            Scenario::Cataris => "Cataris",
            Scenario::Dairon => "Dairon",
            Scenario::Elun => "Elun",
            Scenario::Ferenia => "Ferenia",
            Scenario::Ghavoran => "Ghavoran",
            Scenario::Hanubia => "Hanubia",
            Scenario::Itorash => "Itorash",
            Scenario::CorpiusBossRush => "Corpius Boss Rush",
            Scenario::KraidBossRush => "Kraid Boss Rush",
            Scenario::ArtariaCentralUnitBossRush => "Artaria Central Unit Boss Rush",
            Scenario::DrogygaBossRush => "Drogyga Boss Rush",
            Scenario::GoldRobotBossRush => "Gold Robot Boss Rush",
            Scenario::EscueBossRush => "Escue Boss Rush",
            Scenario::ExperimentZ57BossRush => "Experiment Z57 Boss Rush",
            Scenario::DoubleRobotsBossRush => "Double Robots Boss Rush",
            Scenario::GolzunaBossRush => "Golzuna Boss Rush",
            Scenario::EliteChozoBossRush => "Elite Chozo Boss Rush",
            Scenario::FereniaCentralUnitBossRush => "Ferenia Central Unit Boss Rush",
            Scenario::CommanderBossRush => "Commander Boss Rush",
        }
    }

    /// Boss-Rush-Szenarien existieren erst ab Version 2.1.0.
    pub fn is_boss_rush(self) -> bool {
        self.id().contains("_bossrush_")
    }

    /// Prüft, ob das Szenario in der gegebenen RomFS-Version enthalten ist.
    pub fn available_in(self, version: GameVersion) -> bool {
        !self.is_boss_rush() || version == GameVersion::Dread210
    }

    /// Alle Szenarien, die in `version` verfügbar sind.
    pub fn available(version: GameVersion) -> impl Iterator<Item = Scenario> {
        Self::ALL.into_iter().filter(move |s| s.available_in(version))
    }

    /// Verzeichnis des Szenarios relativ zum RomFS-Root.
    pub fn directory(self) -> String {
        format!("maps/levels/c10_samus/{}", self.id())
    }

    /// Pfad einer Szenario-Datei mit der gegebenen Endung, z.B. `brfld`.
    pub fn scenario_file(self, extension: &str) -> String {
        format!("{}/{}.{}", self.directory(), self.id(), extension)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
