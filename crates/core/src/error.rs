//! Error types for game setup.
//!
//! Setup errors are fatal: the game refuses to start rather than running with a
//! catalog it cannot fill. Runtime input never produces an error; a drop on empty
//! space or a second press while dragging are ordinary no-op outcomes.

use tui_sort_types::ItemId;

/// The catalog/config pair cannot produce a playable game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("catalog has no categories")]
    NoCategories,

    #[error("category `{0}` has no items")]
    EmptyCategory(String),

    #[error("catalog has {0} categories, at most 65536 are supported")]
    TooManyCategories(usize),

    #[error("item id {0:?} appears more than once")]
    DuplicateItemId(ItemId),

    #[error("items per round must be at least 1")]
    ZeroItemsPerRound,

    #[error("{rounds} rounds of {per_round} items need {required} items, only {available} available")]
    NotEnoughItems {
        rounds: u32,
        per_round: usize,
        required: usize,
        available: usize,
    },
}

/// A round slice that does not fit in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("round slice {start}..{end} exceeds registry of {len} items")]
    OutOfRange { start: usize, end: usize, len: usize },
}

/// Failure to load a catalog description.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
