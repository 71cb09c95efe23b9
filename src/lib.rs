//! # war-sim
//!
//! A minimal turn-based territory-conquest simulation engine.
//!
//! A fixed set of territories, each owned by a faction color and holding
//! a troop count, is attacked pairwise under a randomized d6 rule, while
//! a single player pursues a randomly drawn mission checked after every
//! attack. The interactive front end is out of scope: callers supply
//! structured registration data and attack requests, and read structured
//! state back for rendering.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the only randomness is an explicit, seedable
//!    [`GameRng`] handle. A fixed seed reproduces an entire game.
//!
//! 2. **Atomic operations**: every rejected operation (bad index, same
//!    faction, malformed registration) fails before any field write, so
//!    the territory store is never left half-mutated.
//!
//! 3. **Fixed-size map**: the store is sized once at setup; indices stay
//!    stable for the whole run and troop counts are unsigned, so they
//!    can never go negative.
//!
//! ## Modules
//!
//! - `core`: error taxonomy and deterministic RNG
//! - `map`: `Territory` and the fixed-size `TerritoryStore`
//! - `combat`: pairwise attack resolution (defender wins ties)
//! - `missions`: the five-entry catalog, random assignment, evaluation
//! - `game`: `GameBuilder` / `GameSession` facade for callers
//!
//! ## Quick start
//!
//! ```
//! use war_sim::game::GameBuilder;
//!
//! let mut session = GameBuilder::new(3)
//!     .territory("Alfa", "blue", 9)
//!     .territory("Bravo", "red", 3)
//!     .territory("Fortaleza", "green", 4)
//!     .build(42)
//!     .unwrap();
//!
//! println!("Mission: {}", session.mission());
//!
//! let outcome = session.attack(1, 2).unwrap();
//! println!(
//!     "dice {} vs {}, {:?} wins",
//!     outcome.attacker_roll, outcome.defender_roll, outcome.winner
//! );
//!
//! if session.mission_complete() {
//!     println!("Mission complete!");
//! }
//! ```

pub mod combat;
pub mod core;
pub mod game;
pub mod map;
pub mod missions;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Result};

pub use crate::map::{Territory, TerritoryStore, MAX_TAG_LEN};

pub use crate::combat::{resolve_attack, AttackOutcome, CombatSide};

pub use crate::missions::{
    is_mission_complete, Mission, MissionCatalog, FORTRESS_NAME, RED_FACTION,
};

pub use crate::game::{GameBuilder, GameSession};
