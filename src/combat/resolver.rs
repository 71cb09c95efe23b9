//! Attack resolution between two territories.
//!
//! One attack is one pair of opposed die rolls:
//! - Both sides roll a d6 through the injected [`GameRng`].
//! - The defender wins ties; the attacker wins only on a strictly
//!   higher roll.
//! - Attacker victory transfers ownership: the defender takes the
//!   attacker's color and half the attacker's troops (floor). The
//!   attacker's own count stays as it was.
//! - Defender victory (or tie) costs the attacker exactly one troop,
//!   never dropping below zero.
//!
//! Every rejection (bad index, same faction) happens before any write,
//! so a failed attack leaves the store untouched.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};
use crate::map::{Territory, TerritoryStore};

/// Which side won an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatSide {
    Attacker,
    Defender,
}

/// Full report of one resolved attack.
///
/// Carries both dice and post-state clones of both territories so the
/// caller can render the outcome without re-reading the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The winning side (defender on ties).
    pub winner: CombatSide,
    /// The attacker's die (1..=6).
    pub attacker_roll: u8,
    /// The defender's die (1..=6).
    pub defender_roll: u8,
    /// Attacking territory after resolution.
    pub attacker: Territory,
    /// Defending territory after resolution.
    pub defender: Territory,
}

/// Resolve one attack between two store slots (0-based indices).
///
/// Fails without mutating anything when an index is out of range, when
/// both indices name the same slot, or when both territories belong to
/// the same faction ([`GameError::SameFaction`]).
pub fn resolve_attack(
    store: &mut TerritoryStore,
    attacker_index: usize,
    defender_index: usize,
    rng: &mut GameRng,
) -> Result<AttackOutcome> {
    let (attacker, defender) = store.pair_mut(attacker_index, defender_index)?;

    if attacker.color() == defender.color() {
        return Err(GameError::SameFaction(attacker.color().to_string()));
    }

    let attacker_roll = rng.roll_die();
    let defender_roll = rng.roll_die();

    let winner = if attacker_roll > defender_roll {
        // Conquest: the defender switches sides with half the attacker's
        // troops. The attacker's count is intentionally left unchanged;
        // the one-sided rule is the documented behavior.
        defender.set_color(attacker.color().to_string());
        defender.set_troops(attacker.troops() / 2);
        CombatSide::Attacker
    } else {
        attacker.lose_troop();
        CombatSide::Defender
    };

    tracing::debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        attacker_roll,
        defender_roll,
        ?winner,
        "attack resolved"
    );

    Ok(AttackOutcome {
        winner,
        attacker_roll,
        defender_roll,
        attacker: attacker.clone(),
        defender: defender.clone(),
    })
}
