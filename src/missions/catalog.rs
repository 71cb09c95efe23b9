//! Mission kinds and the fixed catalog.
//!
//! Missions are tagged variants carrying their own parameters rather
//! than free text; evaluation dispatches on the variant, and each
//! variant renders its catalog wording via `Display`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Faction tag targeted by the catalog's elimination mission.
pub const RED_FACTION: &str = "red";

/// Name targeted by the catalog's conquer-named mission.
pub const FORTRESS_NAME: &str = "Fortaleza";

/// A victory condition assigned once to the player.
///
/// Three of the five kinds ([`ControlTerritories`](Mission::ControlTerritories),
/// [`TotalTroops`](Mission::TotalTroops), [`ConquerNamed`](Mission::ConquerNamed))
/// have no evaluation logic and never complete; see
/// [`is_mission_complete`](crate::missions::is_mission_complete).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Hold `run` consecutive store positions with one faction.
    /// Adjacency is positional (storage order), not geographic.
    ConsecutiveTerritories { run: usize },
    /// Leave the given faction with no troops anywhere on the map.
    EliminateFaction { color: String },
    /// Control at least `minimum` territories. Never completes.
    ControlTerritories { minimum: usize },
    /// Hold more than `minimum` troops in total. Never completes.
    TotalTroops { minimum: u32 },
    /// Conquer the territory with the given name. Never completes.
    ConquerNamed { name: String },
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::ConsecutiveTerritories { run } => {
                write!(f, "Conquer {} territories in a row", run)
            }
            Mission::EliminateFaction { color } => {
                write!(f, "Eliminate all {}-colored troops", color)
            }
            Mission::ControlTerritories { minimum } => {
                write!(f, "Control at least {} territories", minimum)
            }
            Mission::TotalTroops { minimum } => {
                write!(f, "Have more than {} total troops", minimum)
            }
            Mission::ConquerNamed { name } => {
                write!(f, "Conquer the territory named {}", name)
            }
        }
    }
}

/// The fixed, ordered set of five missions.
///
/// Read-only after construction; assignment draws uniformly and returns
/// a clone, retaining nothing.
#[derive(Clone, Debug)]
pub struct MissionCatalog {
    missions: [Mission; 5],
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self {
            missions: [
                Mission::ConsecutiveTerritories { run: 3 },
                Mission::EliminateFaction {
                    color: RED_FACTION.to_string(),
                },
                Mission::ControlTerritories { minimum: 4 },
                Mission::TotalTroops { minimum: 10 },
                Mission::ConquerNamed {
                    name: FORTRESS_NAME.to_string(),
                },
            ],
        }
    }
}

impl MissionCatalog {
    /// Create the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog entries in their fixed order.
    #[must_use]
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Draw one mission uniformly via the injected RNG.
    pub fn assign_random(&self, rng: &mut GameRng) -> Mission {
        let mission = self.missions[rng.pick_index(self.missions.len())].clone();
        tracing::debug!(%mission, "mission assigned");
        mission
    }
}
