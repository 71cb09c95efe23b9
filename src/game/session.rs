//! Game session: the call surface for setup, game-loop, and display
//! collaborators.
//!
//! The session owns the territory store, the player's mission, and the
//! RNG handle. Attack indices cross this boundary 1-based (the human's
//! view); everything below it is 0-based.

use crate::combat::{resolve_attack, AttackOutcome};
use crate::core::{GameError, GameRng, Result};
use crate::map::{Territory, TerritoryStore};
use crate::missions::{is_mission_complete, Mission, MissionCatalog};

/// Builder for a [`GameSession`].
///
/// Mirrors the setup flow: a territory quantity first, then one
/// (name, color, troops) tuple per slot in index order.
///
/// ```
/// use war_sim::game::GameBuilder;
///
/// let session = GameBuilder::new(2)
///     .territory("Alfa", "blue", 5)
///     .territory("Bravo", "red", 3)
///     .build(42)
///     .unwrap();
/// assert_eq!(session.territory_count(), 2);
/// ```
pub struct GameBuilder {
    quantity: usize,
    registrations: Vec<(String, String, u32)>,
    mission: Option<Mission>,
}

impl GameBuilder {
    /// Start a setup for `quantity` territories.
    #[must_use]
    pub fn new(quantity: usize) -> Self {
        Self {
            quantity,
            registrations: Vec::new(),
            mission: None,
        }
    }

    /// Add the next territory in index order.
    #[must_use]
    pub fn territory(
        mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        troops: u32,
    ) -> Self {
        self.registrations.push((name.into(), color.into(), troops));
        self
    }

    /// Fix the player's mission instead of drawing one at random.
    #[must_use]
    pub fn mission(mut self, mission: Mission) -> Self {
        self.mission = Some(mission);
        self
    }

    /// Build with a fresh RNG from the given seed.
    pub fn build(self, seed: u64) -> Result<GameSession> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build, drawing the mission (unless fixed) from the given RNG.
    ///
    /// Fails with [`GameError::Validation`] on a zero quantity, a
    /// registration count that does not match the quantity, or any
    /// malformed territory tuple; with [`GameError::AllocationFailure`]
    /// when the map cannot be allocated. No partially-built session
    /// escapes a failure.
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<GameSession> {
        let mut store = TerritoryStore::with_capacity(self.quantity)?;

        if self.registrations.len() != self.quantity {
            return Err(GameError::Validation(format!(
                "expected {} territories, got {}",
                self.quantity,
                self.registrations.len()
            )));
        }

        for (index, (name, color, troops)) in self.registrations.into_iter().enumerate() {
            store.register(index, Territory::new(name, color, troops)?)?;
        }

        let mission = match self.mission {
            Some(mission) => mission,
            None => MissionCatalog::new().assign_random(&mut rng),
        };

        Ok(GameSession {
            store,
            mission,
            rng,
            last_outcome: None,
        })
    }
}

/// A running simulation: registered territories, an assigned mission,
/// and the RNG driving combat.
#[derive(Debug)]
pub struct GameSession {
    store: TerritoryStore,
    mission: Mission,
    rng: GameRng,
    last_outcome: Option<AttackOutcome>,
}

impl GameSession {
    /// Resolve an attack between two territories, by 1-based indices.
    ///
    /// Both indices are validated against `[1, quantity]` before any
    /// store access; a failed attack ([`GameError::IndexOutOfRange`],
    /// [`GameError::SameFaction`]) mutates nothing and the loop may
    /// continue. The returned outcome is also retained for
    /// [`last_outcome`](Self::last_outcome).
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<&AttackOutcome> {
        let attacker_index = self.to_store_index(attacker)?;
        let defender_index = self.to_store_index(defender)?;

        let outcome = resolve_attack(&mut self.store, attacker_index, defender_index, &mut self.rng)?;
        Ok(&*self.last_outcome.insert(outcome))
    }

    /// Translate a 1-based player-facing index to a store index.
    fn to_store_index(&self, index: usize) -> Result<usize> {
        let len = self.store.len();
        if index == 0 || index > len {
            return Err(GameError::IndexOutOfRange { index, len });
        }
        Ok(index - 1)
    }

    /// The player's mission. Its `Display` form is the text to show.
    #[must_use]
    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// Whether the mission is complete against the current state.
    ///
    /// The game-loop collaborator checks this after every attack and
    /// ends the loop when it turns true.
    #[must_use]
    pub fn mission_complete(&self) -> bool {
        is_mission_complete(&self.mission, &self.store)
    }

    /// Number of territories (fixed at setup).
    #[must_use]
    pub fn territory_count(&self) -> usize {
        self.store.len()
    }

    /// The full territory list in index order, for rendering.
    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.store.iter()
    }

    /// A territory by 1-based index.
    pub fn territory(&self, index: usize) -> Result<&Territory> {
        self.store.get(self.to_store_index(index)?)
    }

    /// The most recent attack's dice and post-state summary, if any
    /// attack has resolved.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&AttackOutcome> {
        self.last_outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatSide;

    fn four_territory_builder() -> GameBuilder {
        GameBuilder::new(4)
            .territory("Alfa", "blue", 9)
            .territory("Bravo", "red", 3)
            .territory("Charlie", "green", 2)
            .territory("Delta", "red", 4)
    }

    #[test]
    fn test_build_assigns_catalog_mission() {
        let session = four_territory_builder().build(42).unwrap();
        let catalog = MissionCatalog::new();
        assert!(catalog.missions().contains(session.mission()));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = four_territory_builder().build(42).unwrap();
        let b = four_territory_builder().build(42).unwrap();
        assert_eq!(a.mission(), b.mission());
    }

    #[test]
    fn test_build_rejects_count_mismatch() {
        let err = GameBuilder::new(3)
            .territory("Alfa", "blue", 5)
            .build(42)
            .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }

    #[test]
    fn test_build_rejects_zero_quantity() {
        let err = GameBuilder::new(0).build(42).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }

    #[test]
    fn test_build_rejects_bad_territory() {
        let err = GameBuilder::new(1).territory("", "blue", 5).build(42).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }

    #[test]
    fn test_attack_uses_one_based_indices() {
        let mut session = four_territory_builder()
            .mission(Mission::ConquerNamed {
                name: "Alfa".to_string(),
            })
            .build(42)
            .unwrap();

        let outcome = session.attack(1, 2).unwrap();
        assert!(matches!(
            outcome.winner,
            CombatSide::Attacker | CombatSide::Defender
        ));
        assert!(session.last_outcome().is_some());
    }

    #[test]
    fn test_attack_rejects_zero_index() {
        let mut session = four_territory_builder().build(42).unwrap();
        let err = session.attack(0, 2).unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 0, len: 4 });
    }

    #[test]
    fn test_attack_rejects_index_past_quantity() {
        let mut session = four_territory_builder().build(42).unwrap();
        let err = session.attack(1, 5).unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 5, len: 4 });
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn test_territory_accessor_is_one_based() {
        let session = four_territory_builder().build(42).unwrap();
        assert_eq!(session.territory(1).unwrap().name(), "Alfa");
        assert_eq!(session.territory(4).unwrap().name(), "Delta");
        assert!(session.territory(5).is_err());
    }

    #[test]
    fn test_fixed_mission_checked_after_attacks() {
        let mut session = GameBuilder::new(2)
            .territory("Alfa", "blue", 8)
            .territory("Bravo", "red", 1)
            .mission(Mission::EliminateFaction {
                color: "red".to_string(),
            })
            .build(42)
            .unwrap();

        assert!(!session.mission_complete());

        // Keep attacking until the red territory is conquered; troop
        // counts only move on resolution, so this terminates.
        for _ in 0..200 {
            let _ = session.attack(1, 2);
            if session.mission_complete() {
                break;
            }
        }
        assert!(session.mission_complete());
    }
}
