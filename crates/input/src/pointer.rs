//! Mouse tracking for terminal environments.
//!
//! Only the left button drags. Press and release pass their absolute position
//! through; drag reports become the delta since the previous report.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Point, PointerEvent};

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last absolute position seen while the button is held.
    last: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    pub fn handle_mouse_event(&mut self, ev: MouseEvent) -> Option<PointerEvent> {
        let pos = Point::new(ev.column as i32, ev.row as i32);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.last = Some(pos);
                Some(PointerEvent::Down(pos))
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.last.replace(pos) {
                Some(prev) => {
                    let delta = pos.delta_from(prev);
                    (!delta.is_zero()).then_some(PointerEvent::Move(delta))
                }
                // Some terminals swallow the press that starts a drag.
                None => Some(PointerEvent::Down(pos)),
            },
            MouseEventKind::Up(MouseButton::Left) => {
                self.last = None;
                Some(PointerEvent::Up(pos))
            }
            _ => None,
        }
    }

    /// Forget any held button, e.g. after the terminal lost focus.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
