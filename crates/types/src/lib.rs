//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond simple geometry, making them
//! usable in any context (core rules, input mapping, terminal rendering).
//!
//! # Coordinates
//!
//! The play field is measured in terminal cells. `x` grows to the right and `y`
//! grows downwards. Coordinates are signed so that an item dragged past the left
//! or top edge keeps a meaningful position.
//!
//! # Default layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ITEM_SIZE` | 14x5 | Box of a draggable item |
//! | `ITEM_ORIGIN` | (2, 3) | Top-left of the first item on the start row |
//! | `ITEM_SPACING` | 2 | Horizontal gap between items |
//! | `BIN_SIZE` | 18x7 | Box of a drop target |
//! | `BIN_ORIGIN` | (2, 14) | Top-left of the first drop target |
//! | `BIN_SPACING` | 2 | Horizontal gap between drop targets |
//!
//! # Game rules
//!
//! - `DEFAULT_ITEMS_PER_ROUND`: 5 items per round
//! - `DEFAULT_TOTAL_ROUNDS`: 10 rounds per game
//! - `TICK_MS`: 16ms fixed frame interval
//!
//! # Examples
//!
//! ```
//! use tui_sort_types::{Delta, Point, Rect, Size};
//!
//! let r = Rect::new(Point::new(2, 3), Size::new(4, 2));
//! assert!(r.contains(Point::new(2, 3)));
//! assert!(r.contains(Point::new(5, 4)));
//! assert!(!r.contains(Point::new(6, 4)));
//!
//! let moved = r.translate(Delta::new(-2, 1));
//! assert_eq!(moved.origin, Point::new(0, 4));
//! ```

use serde::{Deserialize, Serialize};

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Items handed out per round.
pub const DEFAULT_ITEMS_PER_ROUND: usize = 5;

/// Rounds per game.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;

pub const ITEM_SIZE: Size = Size::new(14, 5);
pub const ITEM_ORIGIN: Point = Point::new(2, 3);
pub const ITEM_SPACING: i32 = 2;

pub const BIN_SIZE: Size = Size::new(18, 7);
pub const BIN_ORIGIN: Point = Point::new(2, 14);
pub const BIN_SPACING: i32 = 2;

/// Stable identity of a classifiable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// Index of a category in the loaded catalog.
///
/// The number of categories is whatever the catalog provides; nothing here
/// assumes a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u16);

impl CategoryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Absolute position on the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, delta: Delta) -> Self {
        Self {
            x: self.x.saturating_add(delta.dx),
            y: self.y.saturating_add(delta.dy),
        }
    }

    /// Relative motion that takes `from` to `self`.
    pub fn delta_from(self, from: Point) -> Delta {
        Delta::new(self.x.saturating_sub(from.x), self.y.saturating_sub(from.y))
    }
}

/// Relative pointer motion since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

impl Size {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.w as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.h as i32)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        contains(*self, p)
    }

    pub fn translate(self, delta: Delta) -> Self {
        Self {
            origin: self.origin.translate(delta),
            size: self.size,
        }
    }
}

/// Pure hit test used for both items and drop targets.
pub fn contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.origin.x && p.x < rect.right() && p.y >= rect.origin.y && p.y < rect.bottom()
}

/// Where things go on the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub item_size: Size,
    pub item_origin: Point,
    pub item_spacing: i32,
    pub bin_size: Size,
    pub bin_origin: Point,
    pub bin_spacing: i32,
}

impl Layout {
    /// Home position of the `index`-th item on the start row.
    pub fn item_home(&self, index: usize) -> Point {
        let step = self.item_size.w as i32 + self.item_spacing;
        Point::new(self.item_origin.x + step * index as i32, self.item_origin.y)
    }

    /// Fixed position of the `index`-th drop target.
    pub fn bin_position(&self, index: usize) -> Point {
        let step = self.bin_size.w as i32 + self.bin_spacing;
        Point::new(self.bin_origin.x + step * index as i32, self.bin_origin.y)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            item_size: ITEM_SIZE,
            item_origin: ITEM_ORIGIN,
            item_spacing: ITEM_SPACING,
            bin_size: BIN_SIZE,
            bin_origin: BIN_ORIGIN,
            bin_spacing: BIN_SPACING,
        }
    }
}

/// Pointer input after the adapter has turned raw terminal events into
/// press / relative motion / release transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Down(Point),
    Move(Delta),
    Up(Point),
}

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Pointer(PointerEvent),
    /// Reshuffle and start over from round one.
    Restart,
}

impl From<PointerEvent> for GameAction {
    fn from(ev: PointerEvent) -> Self {
        GameAction::Pointer(ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(Point::new(0, 0), Size::new(3, 2));
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(!r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let r = Rect::new(Point::new(5, 5), Size::new(0, 0));
        assert!(!r.contains(Point::new(5, 5)));
    }

    #[test]
    fn rect_at_coordinate_limit_saturates() {
        let r = Rect::new(Point::new(i32::MAX - 1, 0), Size::new(14, 5));
        assert_eq!(r.right(), i32::MAX);
        assert!(r.contains(Point::new(i32::MAX - 1, 0)));
        assert!(!r.contains(Point::new(0, 0)));
    }

    #[test]
    fn translate_accumulates() {
        let p = Point::new(10, 10)
            .translate(Delta::new(3, -2))
            .translate(Delta::new(-1, 4));
        assert_eq!(p, Point::new(12, 12));
    }

    #[test]
    fn delta_from_inverts_translate() {
        let a = Point::new(4, 9);
        let b = Point::new(-3, 11);
        assert_eq!(a.translate(b.delta_from(a)), b);
    }

    #[test]
    fn layout_spaces_items_left_to_right() {
        let layout = Layout::default();
        assert_eq!(layout.item_home(0), ITEM_ORIGIN);
        assert_eq!(
            layout.item_home(2),
            Point::new(ITEM_ORIGIN.x + 2 * (ITEM_SIZE.w as i32 + ITEM_SPACING), ITEM_ORIGIN.y)
        );
        assert_eq!(
            layout.bin_position(1),
            Point::new(BIN_ORIGIN.x + BIN_SIZE.w as i32 + BIN_SPACING, BIN_ORIGIN.y)
        );
    }
}
