//! Render-facing copy of the game state.
//!
//! A snapshot holds only what a frontend draws: visible items, bins, score and
//! round. Removed items never appear in it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tui_sort_types::{CategoryId, ItemId, Rect};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemView {
    pub id: ItemId,
    pub category: CategoryId,
    pub label: String,
    pub bounds: Rect,
    pub dragged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetView {
    pub category: CategoryId,
    pub label: String,
    pub bounds: Rect,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Visible items only; removed items never appear here.
    pub items: Vec<ItemView>,
    pub targets: Vec<TargetView>,
    pub score: i32,
    pub round: u32,
    pub total_rounds: u32,
    pub finished: bool,
    pub episode_id: u32,
    pub matched_drops: u32,
    pub mismatched_drops: u32,
}

impl GameSnapshot {
    /// Reset while keeping the allocations.
    pub fn clear(&mut self) {
        self.items.clear();
        self.targets.clear();
        self.score = 0;
        self.round = 0;
        self.total_rounds = 0;
        self.finished = false;
        self.episode_id = 0;
        self.matched_drops = 0;
        self.mismatched_drops = 0;
    }

    pub fn dragged_item(&self) -> Option<&ItemView> {
        self.items.iter().find(|i| i.dragged)
    }

    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
