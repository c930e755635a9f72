//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Game coordinates are terminal cells, so items and bins are drawn exactly
//! where the pointer hits them. This module is pure (no I/O). It can be
//! unit-tested.

use crate::core::{GameSnapshot, ItemView, TargetView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CategoryId, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(255, 165, 0);
const PAVEMENT: Rgb = Rgb::new(169, 169, 169);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const RED: Rgb = Rgb::new(255, 0, 0);
const ITEM_FILL: Rgb = Rgb::new(250, 245, 235);

const BIN_COLORS: [Rgb; 6] = [
    Rgb::new(40, 110, 200),
    Rgb::new(200, 50, 50),
    Rgb::new(60, 150, 70),
    Rgb::new(90, 90, 90),
    Rgb::new(150, 80, 170),
    Rgb::new(30, 140, 150),
];

pub const FINISH_TEXT: &str = "Congratulations! Every item is sorted!";
pub const HINT_TEXT: &str = "drag items into bins · r restart · q quit";

/// A lightweight terminal renderer for the sorting game.
pub struct GameView {
    /// Rows of grey pavement at the bottom of the play field.
    pavement_rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { pavement_rows: 3 }
    }
}

impl GameView {
    pub fn new(pavement_rows: u16) -> Self {
        Self { pavement_rows }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BLACK, BACKGROUND).into_cell(' '));

        if snap.finished {
            self.draw_summary(fb, snap, viewport);
            return;
        }

        self.draw_pavement(fb, viewport);
        self.draw_status(fb, snap, viewport);

        for target in &snap.targets {
            self.draw_target(fb, target);
        }

        // The held item goes last so it stays on top of bins and other items.
        for item in snap.items.iter().filter(|i| !i.dragged) {
            self.draw_item(fb, item);
        }
        if let Some(item) = snap.dragged_item() {
            self.draw_item(fb, item);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_pavement(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let rows = self.pavement_rows.min(viewport.height);
        let top = (viewport.height - rows) as i32;
        let style = CellStyle::new(BLACK, PAVEMENT);
        fb.fill_rect(0, top, viewport.width, rows, ' ', style);
        if rows > 0 {
            let y = top + (rows as i32) / 2;
            let x = (viewport.width as i32 - HINT_TEXT.chars().count() as i32).max(0) / 2;
            fb.put_str(x, y, HINT_TEXT, CellStyle { dim: true, ..style });
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let score = CellStyle::new(BLUE, BACKGROUND).bold();
        fb.put_str(1, 0, "SCORE:", score);
        fb.put_i32(8, 0, snap.score, score);

        let round = CellStyle::new(RED, BACKGROUND).bold();
        let text = format!("ROUND: {}/{}", snap.round, snap.total_rounds);
        let x = viewport.width as i32 - text.chars().count() as i32 - 1;
        fb.put_str(x.max(0), 0, &text, round);
    }

    fn draw_target(&self, fb: &mut FrameBuffer, target: &TargetView) {
        let color = bin_color(target.category);
        let fill = CellStyle::new(Rgb::new(255, 255, 255), color);
        let border = CellStyle::new(BLACK, color).bold();
        let r = target.bounds;

        fb.fill_rect(r.origin.x, r.origin.y, r.size.w, r.size.h, ' ', fill);
        draw_border(fb, r, border);
        draw_label(fb, r, &target.label, fill.bold());
    }

    fn draw_item(&self, fb: &mut FrameBuffer, item: &ItemView) {
        let fill = CellStyle::new(BLACK, ITEM_FILL);
        let border = CellStyle {
            bold: item.dragged,
            ..CellStyle::new(RED, ITEM_FILL)
        };
        let r = item.bounds;

        fb.fill_rect(r.origin.x, r.origin.y, r.size.w, r.size.h, ' ', fill);
        draw_border(fb, r, border);
        draw_label(fb, r, &item.label, fill);
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let title = CellStyle::new(BLACK, BACKGROUND).bold();
        let score = CellStyle::new(BLUE, BACKGROUND).bold();
        let mid = viewport.height as i32 / 2;

        put_centered(fb, viewport, mid - 2, FINISH_TEXT, title);
        put_centered(fb, viewport, mid, &format!("SCORE: {}", snap.score), score);
        let detail = format!(
            "{} sorted right · {} sorted wrong",
            snap.matched_drops, snap.mismatched_drops
        );
        put_centered(fb, viewport, mid + 1, &detail, CellStyle { dim: true, ..title });
        put_centered(fb, viewport, mid + 3, "q to quit", CellStyle::new(BLACK, BACKGROUND));
    }
}

fn bin_color(category: CategoryId) -> Rgb {
    BIN_COLORS[category.index() % BIN_COLORS.len()]
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: i32, text: &str, style: CellStyle) {
    let x = (viewport.width as i32 - text.chars().count() as i32).max(0) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
    let (w, h) = (r.size.w as i32, r.size.h as i32);
    if w < 2 || h < 2 {
        return;
    }
    let (x, y) = (r.origin.x, r.origin.y);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

/// Word-wrap `label` inside the border of `r`, vertically centered.
fn draw_label(fb: &mut FrameBuffer, r: Rect, label: &str, style: CellStyle) {
    let inner_w = r.size.w.saturating_sub(2) as usize;
    let inner_h = r.size.h.saturating_sub(2) as usize;
    if inner_w == 0 || inner_h == 0 {
        return;
    }

    let lines = wrap(label, inner_w, inner_h);
    let top = r.origin.y.saturating_add(1 + (inner_h - lines.len()) as i32 / 2);
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        let x = r.origin.x.saturating_add(1 + (inner_w - len) as i32 / 2);
        fb.put_str(x, top.saturating_add(i as i32), line, style);
    }
}

fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word: String = word.chars().take(width).collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(max_lines);
    lines
}
