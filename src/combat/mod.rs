//! Combat: pairwise attack resolution with opposed d6 rolls.

pub mod resolver;

pub use resolver::{resolve_attack, AttackOutcome, CombatSide};
