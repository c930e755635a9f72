//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse events into [`crate::types::PointerEvent`]s and keys into
//! [`crate::types::GameAction`]s. Terminals report absolute cell positions only,
//! so [`PointerTracker`] derives the relative motion the game consumes.

pub mod map;
pub mod pointer;

pub use tui_sort_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
