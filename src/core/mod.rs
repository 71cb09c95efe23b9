//! Core building blocks: error taxonomy and deterministic RNG.
//!
//! These are domain-agnostic: the map, combat, and mission modules all
//! build on them.

pub mod error;
pub mod rng;

pub use error::{GameError, Result};
pub use rng::GameRng;
