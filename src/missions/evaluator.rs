//! Mission evaluation against current territory state.

use crate::map::TerritoryStore;

use super::catalog::Mission;

/// Check whether a mission is complete given the store's current state.
///
/// Pure: reads the store, mutates nothing, callable any number of times.
///
/// Only two of the five kinds are evaluated; the original game never
/// implemented the other three, so they report incomplete unconditionally.
/// The tagged representation keeps that gap visible in the match below
/// instead of hiding it in a text-dispatch fall-through.
#[must_use]
pub fn is_mission_complete(mission: &Mission, store: &TerritoryStore) -> bool {
    match mission {
        Mission::EliminateFaction { color } => {
            // A territory of the target color with zero troops does not
            // block completion.
            !store.iter().any(|t| t.is_faction(color) && t.troops() > 0)
        }
        Mission::ConsecutiveTerritories { run } => {
            if *run == 0 {
                return false;
            }
            let colors: Vec<_> = store.colors().collect();
            colors.windows(*run).any(|window| {
                window
                    .first()
                    .and_then(|c| *c)
                    .map(|first| window.iter().all(|c| *c == Some(first)))
                    .unwrap_or(false)
            })
        }
        // Not yet implemented; always incomplete.
        Mission::ControlTerritories { .. }
        | Mission::TotalTroops { .. }
        | Mission::ConquerNamed { .. } => false,
    }
}
