//! Terminal sorting game (workspace facade crate).
//!
//! The rules live in `tui_sort_core`; this package re-exports the workspace
//! crates under one roof and adds the pieces only the binary needs: command
//! line parsing and loading a catalog from disk.

pub mod assets;
pub mod cli;

pub use tui_sort_core as core;
pub use tui_sort_input as input;
pub use tui_sort_term as term;
pub use tui_sort_types as types;
