//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed to
//! the terminal backend.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal (raw mode, alternate screen, mouse capture)
//! - [`RenderThrottle`] skips frames whose snapshot did not change

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_sort_core as core;
pub use tui_sort_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, FINISH_TEXT, HINT_TEXT};
pub use render_throttle::RenderThrottle;
pub use renderer::TerminalRenderer;
