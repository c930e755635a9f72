//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the sorting rules, round lifecycle and drag-and-drop
//! resolution. It has **no dependencies** on terminals, files or rendering:
//!
//! - **Deterministic**: the one random step, shuffling the item registry, is
//!   driven by a seed carried in [`GameConfig`]
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: any frontend that can report pointer transitions can drive it
//!
//! # Module Structure
//!
//! - [`catalog`]: categories, bins and items supplied at startup
//! - [`registry`]: all items in one frozen shuffled order, sliced per round
//! - [`targets`]: fixed drop targets, first-match-wins hit testing
//! - [`round`]: per-round item slots with `Active`/`Removed` state
//! - [`drag`]: which item is held, relative motion, drop resolution
//! - [`game_state`]: phases, score, round advancement, termination
//! - [`snapshot`]: render-facing view of the state
//!
//! # Rules
//!
//! - Each round hands out `items_per_round` items from the registry
//! - Dropping an item on the bin of its own category scores +1 and removes it
//! - Dropping it on any other bin scores -1 and sends it home
//! - Dropping it anywhere else just sends it home
//! - The round ends when every item is removed; after `total_rounds` rounds
//!   the game is over and nothing changes any more
//!
//! # Example
//!
//! ```
//! use tui_sort_core::{Catalog, GameConfig, GameState};
//! use tui_sort_types::PointerEvent;
//!
//! let mut game = GameState::new(&Catalog::builtin(), GameConfig::default()).unwrap();
//! game.tick(); // starts round 1
//! assert_eq!(game.round(), 1);
//!
//! let layout = game.config().layout;
//! game.apply_pointer(PointerEvent::Down(layout.item_home(0)));
//! assert!(game.dragged().is_some());
//! ```

pub mod catalog;
pub mod config;
pub mod drag;
pub mod error;
pub mod game_state;
pub mod registry;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod targets;

pub use tui_sort_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CategorySpec, ItemSpec};
pub use config::GameConfig;
pub use drag::{DragController, DropOutcome, DropReport};
pub use error::{CatalogError, ConfigError, RegistryError};
pub use game_state::{GameEvent, GameState, Phase};
pub use registry::{Item, ItemRegistry};
pub use rng::SimpleRng;
pub use round::{ItemState, RoundState, Slot, SlotIndex};
pub use snapshot::{GameSnapshot, ItemView, TargetView};
pub use targets::{DropTarget, DropTargetSet};
