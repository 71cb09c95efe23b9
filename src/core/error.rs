//! Error taxonomy for the simulation core.
//!
//! Every rejected operation leaves the territory store untouched: all
//! checks run before any field write, so there is no partial state to
//! roll back. Only `AllocationFailure` is fatal, and only at setup time;
//! the library reports it and the caller decides to exit.

use thiserror::Error;

/// Errors reported by the simulation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed setup input: empty name or color, overlong name,
    /// non-positive quantity, incomplete registration, or access to a
    /// slot that was never registered. Recoverable at the boundary by
    /// re-prompting.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Territory index outside the valid range. Carries the index as the
    /// caller supplied it (1-based at the session boundary, 0-based at
    /// the store) and the number of slots.
    #[error("territory index {index} out of range ({len} territories)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Attack attempted between two territories of the same faction.
    /// Friendly fire is disallowed; nothing is mutated.
    #[error("cannot attack a territory of the same faction ({0})")]
    SameFaction(String),

    /// The territory map could not be allocated at setup. The only fatal
    /// condition in the system.
    #[error("failed to allocate territory map for {0} territories")]
    AllocationFailure(usize),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, GameError>;
