//! GameView: maps a [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameStatus;
use crate::fb::{CellStyle, FrameBuffer};
use crate::screen::Screen;
use crate::types::Rgb;

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the screen state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        screen: &Screen,
        status: GameStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        // Boards wider than the terminal can address are clipped.
        let cols = u16::try_from(screen.width()).unwrap_or(u16::MAX);
        let rows = u16::try_from(screen.height()).unwrap_or(u16::MAX);
        let board_px_w = cols.saturating_mul(self.cell_w);
        let board_px_h = rows.saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..rows {
            for x in 0..cols {
                match screen.cell(x as usize, y as usize).flatten() {
                    Some(color) => self.draw_block(fb, start_x, start_y, x, y, color),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        // Active piece, clipped to the visible grid.
        for (x, y, color) in screen.active() {
            if x >= 0 && y >= 0 && x < cols as i32 && y < rows as i32 {
                self.draw_block(fb, start_x, start_y, x as u16, y as u16, color);
            }
        }

        self.draw_side_panel(fb, screen, viewport, start_x, start_y, frame_w);

        let mid_y = start_y.saturating_add(frame_h / 2);
        match status {
            GameStatus::NotStarted => {
                self.draw_overlay_text(fb, start_x, mid_y, frame_w, "PRESS ENTER");
            }
            GameStatus::Paused => {
                self.draw_overlay_text(fb, start_x, mid_y, frame_w, "PAUSED");
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(fb, start_x, mid_y, frame_w, "GAME OVER");
                if let Some(score) = screen.game_over() {
                    let line = format!("SCORE {score}");
                    self.draw_overlay_text(fb, start_x, mid_y.saturating_add(1), frame_w, &line);
                }
                self.draw_overlay_text(fb, start_x, mid_y.saturating_add(3), frame_w, "ENTER: NEW GAME");
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &Screen, status: GameStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, color: Rgb) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(color, BOARD_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        screen: &Screen,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_u32(panel_x, start_y.saturating_add(1), screen.score(), value);
        fb.put_str(panel_x, start_y.saturating_add(3), "LEVEL", label);
        fb.put_u32(panel_x, start_y.saturating_add(4), screen.level(), value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, frame_w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, y, text, style);
    }
}
