//! The territory value type.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Maximum length, in characters, of a territory name or faction color.
pub const MAX_TAG_LEN: usize = 30;

/// A named unit of the map with an owning faction and a troop count.
///
/// Territories are created once during setup and mutated only by combat
/// resolution (ownership transfer, troop changes). The troop count is
/// unsigned, so it can never go negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    color: String,
    troops: u32,
}

impl Territory {
    /// Create a territory, validating its fields.
    ///
    /// Fails with [`GameError::Validation`] when the name or color is
    /// empty or exceeds [`MAX_TAG_LEN`] characters.
    pub fn new(name: impl Into<String>, color: impl Into<String>, troops: u32) -> Result<Self> {
        let name = name.into();
        let color = color.into();

        if name.is_empty() {
            return Err(GameError::Validation("territory name is empty".to_string()));
        }
        if name.chars().count() > MAX_TAG_LEN {
            return Err(GameError::Validation(format!(
                "territory name {:?} exceeds {} characters",
                name, MAX_TAG_LEN
            )));
        }
        if color.is_empty() {
            return Err(GameError::Validation("faction color is empty".to_string()));
        }
        if color.chars().count() > MAX_TAG_LEN {
            return Err(GameError::Validation(format!(
                "faction color {:?} exceeds {} characters",
                color, MAX_TAG_LEN
            )));
        }

        Ok(Self { name, color, troops })
    }

    /// The territory's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning faction's color tag.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Current troop count.
    #[must_use]
    pub fn troops(&self) -> u32 {
        self.troops
    }

    /// Whether this territory belongs to the given faction.
    #[must_use]
    pub fn is_faction(&self, color: &str) -> bool {
        self.color == color
    }

    pub(crate) fn set_color(&mut self, color: String) {
        self.color = color;
    }

    pub(crate) fn set_troops(&mut self, troops: u32) {
        self.troops = troops;
    }

    /// Remove one troop, saturating at zero.
    pub(crate) fn lose_troop(&mut self) {
        self.troops = self.troops.saturating_sub(1);
    }
}
