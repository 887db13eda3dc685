//! Actor-Identität und Parser für Actor-Links (`Root:pScenario:...`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Scenario;

/// Anzahl der durch `:` getrennten Tokens eines Actor-Links.
pub const LINK_TOKEN_COUNT: usize = 7;

/// Feste Schlüsselwörter eines Actor-Links als (Position, Wort).
const LINK_KEYWORDS: [(usize, &str); 4] = [
    (0, "Root"),
    (1, "pScenario"),
    (3, "dctSublayers"),
    (5, "dctActors"),
];

/// Eindeutige Identität eines Actors innerhalb eines geöffneten Szenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorRef {
    pub scenario: Scenario,
    pub layer: String,
    pub sublayer: String,
    pub name: String,
}

impl ActorRef {
    /// Erstellt eine neue Referenz.
    pub fn new(
        scenario: Scenario,
        layer: impl Into<String>,
        sublayer: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            scenario,
            layer: layer.into(),
            sublayer: sublayer.into(),
            name: name.into(),
        }
    }

    /// Bindet einen geparsten Link an ein Szenario.
    pub fn from_link(scenario: Scenario, link: &ActorLink) -> Self {
        Self::new(
            scenario,
            link.layer.clone(),
            link.sublayer.clone(),
            link.name.clone(),
        )
    }

    /// `layer/sublayer/name` ohne Szenario, für Logs und Tooltips.
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.layer, self.sublayer, self.name)
    }

    /// Link-Darstellung dieser Referenz.
    pub fn to_link(&self) -> ActorLink {
        ActorLink {
            layer: self.layer.clone(),
            sublayer: self.sublayer.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scenario, self.path())
    }
}

/// Fehler beim Zerlegen eines Actor-Links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Actor-Link hat {found} statt {LINK_TOKEN_COUNT} Tokens")]
    TokenCount { found: usize },
    #[error("Actor-Link erwartet '{expected}' an Position {position}, gefunden '{found}'")]
    Keyword {
        position: usize,
        expected: &'static str,
        found: String,
    },
}

/// Geparster Actor-Link `Root:pScenario:<layer>:dctSublayers:<sublayer>:dctActors:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorLink {
    pub layer: String,
    pub sublayer: String,
    pub name: String,
}

impl ActorLink {
    /// Schnelle Vorprüfung für Werte im Daten-Panel.
    pub fn looks_like_link(value: &str) -> bool {
        value.starts_with("Root:") && value.matches(':').count() > 5
    }
}

impl FromStr for ActorLink {
    type Err = LinkError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = value.split(':').collect();
        if tokens.len() != LINK_TOKEN_COUNT {
            return Err(LinkError::TokenCount {
                found: tokens.len(),
            });
        }

        for (position, expected) in LINK_KEYWORDS {
            if tokens[position] != expected {
                return Err(LinkError::Keyword {
                    position,
                    expected,
                    found: tokens[position].to_string(),
                });
            }
        }

        Ok(Self {
            layer: tokens[2].to_string(),
            sublayer: tokens[4].to_string(),
            name: tokens[6].to_string(),
        })
    }
}

impl fmt::Display for ActorLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Root:pScenario:{}:dctSublayers:{}:dctActors:{}",
            self.layer, self.sublayer, self.name
        )
    }
}
