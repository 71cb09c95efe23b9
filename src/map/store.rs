//! Fixed-size, ordered territory storage.
//!
//! The store is sized once at creation and never grows or shrinks:
//! registration writes into pre-allocated slots, and indices stay stable
//! for the whole run. Combat mutates slots in place through
//! bounds-checked access; nothing else writes after setup.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

use super::territory::Territory;

/// Ordered collection of territories with stable indices.
///
/// All index parameters are 0-based; the 1-based boundary for human
/// players lives in [`crate::game::GameSession`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerritoryStore {
    slots: Vec<Option<Territory>>,
}

impl TerritoryStore {
    /// Allocate a store with `quantity` empty slots.
    ///
    /// Fails with [`GameError::Validation`] when `quantity` is zero and
    /// with [`GameError::AllocationFailure`] when the map cannot be
    /// allocated (the only fatal condition in the system).
    pub fn with_capacity(quantity: usize) -> Result<Self> {
        if quantity == 0 {
            return Err(GameError::Validation(
                "territory quantity must be positive".to_string(),
            ));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(quantity)
            .map_err(|_| GameError::AllocationFailure(quantity))?;
        slots.resize_with(quantity, || None);

        Ok(Self { slots })
    }

    /// Number of slots (fixed at creation).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: the store is created with at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Write a fully-formed territory at a pre-allocated slot.
    ///
    /// Re-registering a filled slot overwrites it; registration is the
    /// setup phase's only writer.
    pub fn register(&mut self, index: usize, territory: Territory) -> Result<()> {
        let len = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        tracing::debug!(index, name = territory.name(), color = territory.color(), troops = territory.troops(), "territory registered");
        *slot = Some(territory);
        Ok(())
    }

    /// Whether every slot has been registered.
    #[must_use]
    pub fn is_fully_registered(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Bounds-checked read access.
    pub fn get(&self, index: usize) -> Result<&Territory> {
        let len = self.len();
        self.slots
            .get(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?
            .as_ref()
            .ok_or_else(|| GameError::Validation(format!("territory slot {} is not registered", index)))
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory> {
        let len = self.len();
        self.slots
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?
            .as_mut()
            .ok_or_else(|| GameError::Validation(format!("territory slot {} is not registered", index)))
    }

    /// Distinct mutable access to two slots, for combat resolution.
    ///
    /// Fails with [`GameError::Validation`] when `a == b`; bounds and
    /// registration are checked like [`get_mut`](Self::get_mut).
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Territory, &mut Territory)> {
        let len = self.len();
        if a == b {
            return Err(GameError::Validation(format!(
                "attacker and defender are the same territory ({})",
                a
            )));
        }
        for index in [a, b] {
            if index >= len {
                return Err(GameError::IndexOutOfRange { index, len });
            }
        }

        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = self.slots.split_at_mut(hi);
        let lo_slot = left[lo]
            .as_mut()
            .ok_or_else(|| GameError::Validation(format!("territory slot {} is not registered", lo)))?;
        let hi_slot = right[0]
            .as_mut()
            .ok_or_else(|| GameError::Validation(format!("territory slot {} is not registered", hi)))?;

        if a < b {
            Ok((lo_slot, hi_slot))
        } else {
            Ok((hi_slot, lo_slot))
        }
    }

    /// Iterate registered territories in index order.
    ///
    /// Vacant slots (possible only mid-setup) are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Faction colors in index order, one entry per slot.
    ///
    /// A vacant slot yields `None`; used by mission evaluation, which
    /// cares about positional adjacency.
    pub(crate) fn colors(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots.iter().map(|s| s.as_ref().map(Territory::color))
    }
}
