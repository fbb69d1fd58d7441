//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Frames are diffed against the previously presented one and only the
//! changed horizontal runs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

/// A horizontal span of changed cells on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Last presented frame. `None` forces a full redraw.
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            front: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw everything, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Present `back` and swap it with the previous frame.
    ///
    /// On return `back` holds stale contents that the caller redraws into.
    pub fn present(&mut self, back: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.front.as_ref() {
            Some(front) if front.width() == back.width() && front.height() == back.height() => {
                encode_diff_into(front, back, &mut self.buf)?;
            }
            _ => encode_full_into(back, &mut self.buf)?,
        }
        self.flush_buf()?;

        let mut front = self
            .front
            .take()
            .unwrap_or_else(|| FrameBuffer::new(back.width(), back.height()));
        std::mem::swap(&mut front, back);
        self.front = Some(front);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print_span(fb, 0, y, fb.width(), out)?;
    }
    reset_into(out)
}

/// Encode only the cells that differ between `prev` and `next`.
///
/// Frames of different sizes are redrawn row by row.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        pen.print_span(next, run.x, run.y, run.len, out)?;
    }
    reset_into(out)
}

/// Collect the changed runs between two frames.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| Run { x: 0, y, len: w }).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start = None;
        for x in 0..w {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run { x: s, y, len: w - s });
        }
    }
    runs
}

/// Tracks the active style so runs only emit style changes.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print_span(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16, out: &mut Vec<u8>) -> Result<()> {
        for dx in 0..len {
            let cell = fb.get(x + dx, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(rgb_to_color(style.fg)))?
        .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
