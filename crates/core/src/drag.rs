//! Drag controller - turns pointer transitions into item motion and drop outcomes
//!
//! The controller owns nothing but the reference to the item being dragged. It
//! moves items inside the round it is handed and reports what a release landed
//! on; deciding what a drop is worth (score, removal, round end) belongs to
//! [`crate::game_state::GameState`].

use tui_sort_types::{CategoryId, Delta, ItemId, Point};

use crate::round::{RoundState, SlotIndex};
use crate::targets::DropTargetSet;

/// How a release resolved against the drop targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropOutcome {
    /// Released over the bin of the item's own category.
    Matched,
    /// Released over a bin of another category.
    Mismatched,
    /// Released where no bin is.
    NoTarget,
}

/// A resolved release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropReport {
    pub slot: SlotIndex,
    pub item: ItemId,
    pub target: Option<CategoryId>,
    pub outcome: DropOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    dragged: Option<SlotIndex>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<SlotIndex> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Grab the first active item under `pos`.
    ///
    /// Ignored while another item is already held.
    pub fn pointer_down(&mut self, round: &RoundState, pos: Point) -> bool {
        if self.dragged.is_some() {
            return false;
        }
        match round.slot_at(pos) {
            Some(slot) => {
                self.dragged = Some(slot);
                true
            }
            None => false,
        }
    }

    /// Move the held item by the pointer's relative motion.
    pub fn pointer_move(&self, round: &mut RoundState, delta: Delta) -> bool {
        match self.dragged {
            Some(slot) if !delta.is_zero() => round.translate(slot, delta),
            _ => false,
        }
    }

    /// Release the held item at `pos`.
    ///
    /// The item is always sent home; a matched item is removed by the caller
    /// afterwards, so the reset is invisible for it. Returns `None` when nothing
    /// was held.
    pub fn pointer_up(
        &mut self,
        round: &mut RoundState,
        targets: &DropTargetSet,
        pos: Point,
    ) -> Option<DropReport> {
        let slot = self.dragged.take()?;
        let item = round.slot(slot).map(|s| (s.item.id, s.item.category));
        round.reset(slot);
        let (item, category) = item?;

        let report = match targets.target_at(pos) {
            Some(target) if target.accepts(category) => DropReport {
                slot,
                item,
                target: Some(target.category),
                outcome: DropOutcome::Matched,
            },
            Some(target) => DropReport {
                slot,
                item,
                target: Some(target.category),
                outcome: DropOutcome::Mismatched,
            },
            None => DropReport {
                slot,
                item,
                target: None,
                outcome: DropOutcome::NoTarget,
            },
        };
        Some(report)
    }

    /// Forget the held item without resolving a drop.
    pub fn release(&mut self) {
        self.dragged = None;
    }
}
