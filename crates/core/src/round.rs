//! Round state - the items in play for one round
//!
//! Every item of the round's slice gets a slot. Slots are never reordered or
//! dropped while the round lasts, so a slot index stays a valid reference to the
//! same item until the round is replaced. A correctly sorted item flips its slot
//! to [`ItemState::Removed`] instead of disappearing from the vector.

use tui_sort_types::{Delta, ItemId, Layout, Point, Rect, Size};

use crate::registry::Item;

/// Index of a slot within the current round.
pub type SlotIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemState {
    Active { position: Point },
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub item: Item,
    /// Where the item returns after every drop that does not remove it.
    pub home: Point,
    pub state: ItemState,
}

impl Slot {
    pub fn is_active(&self) -> bool {
        matches!(self.state, ItemState::Active { .. })
    }

    pub fn position(&self) -> Option<Point> {
        match self.state {
            ItemState::Active { position } => Some(position),
            ItemState::Removed => None,
        }
    }

    pub fn bounds(&self, size: Size) -> Option<Rect> {
        self.position().map(|p| Rect::new(p, size))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    number: u32,
    slots: Vec<Slot>,
    item_size: Size,
}

impl RoundState {
    /// Place `items` on the start row, left to right in slice order.
    pub fn new(number: u32, items: &[Item], layout: &Layout) -> Self {
        let slots = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let home = layout.item_home(i);
                Slot {
                    item: item.clone(),
                    home,
                    state: ItemState::Active { position: home },
                }
            })
            .collect();

        Self {
            number,
            slots,
            item_size: layout.item_size,
        }
    }

    /// 1-indexed round number.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn item_size(&self) -> Size {
        self.item_size
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: SlotIndex) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Items still in play, in slot order.
    pub fn active_items(&self) -> impl Iterator<Item = (SlotIndex, &Slot)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.active_count() == 0
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.active_items().any(|(_, s)| s.item.id == id)
    }

    /// First active slot whose box contains `p`.
    pub fn slot_at(&self, p: Point) -> Option<SlotIndex> {
        let size = self.item_size;
        self.active_items()
            .find(|(_, s)| s.bounds(size).is_some_and(|r| r.contains(p)))
            .map(|(i, _)| i)
    }

    pub fn bounds(&self, index: SlotIndex) -> Option<Rect> {
        self.slots.get(index)?.bounds(self.item_size)
    }

    /// Shift an active item by `delta`.
    pub fn translate(&mut self, index: SlotIndex, delta: Delta) -> bool {
        match self.slots.get_mut(index) {
            Some(Slot {
                state: ItemState::Active { position },
                ..
            }) => {
                *position = position.translate(delta);
                true
            }
            _ => false,
        }
    }

    /// Send an active item back to its home position.
    pub fn reset(&mut self, index: SlotIndex) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_active() => {
                slot.state = ItemState::Active {
                    position: slot.home,
                };
                true
            }
            _ => false,
        }
    }

    /// Take an item out of play for the rest of the round.
    pub fn remove(&mut self, index: SlotIndex) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_active() => {
                slot.state = ItemState::Removed;
                true
            }
            _ => false,
        }
    }
}
