//! Screen: the terminal side of the engine's renderer callbacks.
//!
//! The engine pushes changes as they happen; `Screen` keeps the latest of
//! each so [`crate::GameView`] can draw a whole frame at any time.

use crate::core::{Grid, Renderer, Shape};
use crate::types::{Cell, Rgb};

/// Last known display state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    /// Locked cells, row-major.
    grid: Vec<Cell>,
    /// Absolute cells of the active piece.
    active: Vec<(i32, i32)>,
    active_color: Option<Rgb>,
    score: u32,
    level: u32,
    game_over: Option<u32>,
    ended: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Final score while the game-over overlay is shown
    pub fn game_over(&self) -> Option<u32> {
        self.game_over
    }

    /// Locked cell at (x, y), `None` outside the known grid
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.grid.get(y * self.width + x).copied()
    }

    /// Active piece cells with their color
    pub fn active(&self) -> impl Iterator<Item = (i32, i32, Rgb)> + '_ {
        self.active
            .iter()
            .filter_map(move |&(x, y)| self.active_color.map(|c| (x, y, c)))
    }

    /// Returns true once after each `game_ended` callback.
    pub fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

impl Renderer for Screen {
    fn render_active(&mut self, shape: &Shape, x: i32, y: i32) {
        self.active.clear();
        self.active
            .extend(shape.points().iter().map(|p| (x + p.x, y + p.y)));
        self.active_color = Some(shape.color());
    }

    fn render_grid(&mut self, grid: &Grid) {
        self.width = grid.width();
        self.height = grid.height();
        self.grid.clear();
        self.grid.extend_from_slice(grid.cells());
    }

    fn render_score(&mut self, score: u32) {
        self.score = score;
    }

    fn render_level(&mut self, level: u32) {
        self.level = level;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.active.clear();
        self.active_color = None;
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }

    fn game_ended(&mut self, _final_score: u32) {
        self.ended = true;
    }
}
