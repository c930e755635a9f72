//! Item registry - every classifiable item, in one frozen random order
//!
//! Rounds never pick items themselves; round `n` takes the `n`-th contiguous
//! slice of the shuffled order, so slices are disjoint by construction.

use tui_sort_types::{CategoryId, ItemId};

use crate::error::RegistryError;
use crate::rng::SimpleRng;

/// A draggable object. Its category is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub category: CategoryId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    /// Shuffle `items` once with `rng`.
    pub fn new(mut items: Vec<Item>, rng: &mut SimpleRng) -> Self {
        rng.shuffle(&mut items);
        Self { items }
    }

    /// Keep the caller's order as the play order.
    pub fn from_ordered(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items `[round_index * per_round, (round_index + 1) * per_round)`.
    ///
    /// `round_index` is zero-based: round number 1 reads the first slice.
    pub fn slice_for_round(
        &self,
        round_index: usize,
        per_round: usize,
    ) -> Result<&[Item], RegistryError> {
        let start = round_index.saturating_mul(per_round);
        let end = start.saturating_add(per_round);
        self.items
            .get(start..end)
            .ok_or(RegistryError::OutOfRange {
                start,
                end,
                len: self.items.len(),
            })
    }

    /// Full rounds this registry can supply.
    pub fn max_rounds(&self, per_round: usize) -> usize {
        if per_round == 0 {
            return 0;
        }
        self.items.len() / per_round
    }

    /// Reorder for a fresh game.
    pub fn reshuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.items);
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
