//! Session facade: builder-based setup and the game-loop call surface.

pub mod session;

pub use session::{GameBuilder, GameSession};
