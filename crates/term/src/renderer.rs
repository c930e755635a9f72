//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize) is a full redraw; after
//! that only changed runs of cells are written. Entering the renderer also turns
//! on mouse capture.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    /// Set once `enter` succeeded, so `exit` only undoes what was done.
    active: bool,
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            active: false,
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        self.active = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                // Swap current into prev so next frame can diff without cloning.
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cells into a byte buffer, emitting style changes only when needed.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    /// Print `cells` starting at (`x`, `y`).
    fn run(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Clear the screen and print every row of `fb`.
fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for (y, row) in rows(fb) {
        painter.run(0, y, row)?;
    }
    painter.finish()
}

/// Print only the cells of `next` that differ from `prev`.
///
/// Both buffers must have the same size; `draw_swap` does a full redraw otherwise.
fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for ((y, old), (_, new)) in rows(prev).zip(rows(next)) {
        for (x, len) in changed_runs(old, new) {
            painter.run(x, y, &new[x as usize..(x + len) as usize])?;
        }
    }
    painter.finish()
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = (u16, &[Cell])> {
    let width = fb.width().max(1) as usize;
    (0..fb.height()).zip(fb.cells().chunks(width))
}

/// `(start, len)` of each maximal span where the two rows differ.
fn changed_runs(old: &[Cell], new: &[Cell]) -> Vec<(u16, u16)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (x, (a, b)) in old.iter().zip(new).enumerate() {
        match (a != b, start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                runs.push((s as u16, (x - s) as u16));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s as u16, (new.len() - s) as u16));
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lettered(width: u16, text: &str) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 1);
        fb.put_str(0, 0, text, CellStyle::default());
        fb
    }

    fn cells(text: &str) -> Vec<Cell> {
        text.chars().map(|ch| CellStyle::default().into_cell(ch)).collect()
    }

    #[test]
    fn full_encode_prints_every_cell() {
        let fb = lettered(3, "ABC");
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ABC"));
    }

    #[test]
    fn diff_encode_skips_unchanged_cells() {
        let prev = lettered(3, "ABC");
        let next = lettered(3, "AXC");
        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('X'));
        assert!(!text.contains('A'));
        assert!(!text.contains('C'));
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let fb = lettered(4, "ABCD");
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(['A', 'B', 'C', 'D']));
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        assert_eq!(changed_runs(&cells("......"), &cells(".###.#")), vec![(1, 3), (5, 1)]);
        assert_eq!(changed_runs(&cells("abc"), &cells("abc")), vec![]);
        assert_eq!(changed_runs(&cells("abc"), &cells("xyz")), vec![(0, 3)]);
    }
}
