//! Presentation boundary.
//!
//! The engine pushes state changes through [`Renderer`] as they happen. It
//! never asks the presentation layer for anything back.

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{Cell, Rgb};

/// Callbacks the engine invokes as a side effect of state changes.
pub trait Renderer {
    /// The active piece moved, rotated or spawned at anchor (x, y).
    fn render_active(&mut self, shape: &Shape, x: i32, y: i32);

    /// The locked cells changed (deposit, line clear, new game).
    fn render_grid(&mut self, grid: &Grid);

    fn render_score(&mut self, score: u32);

    fn render_level(&mut self, level: u32);

    fn show_game_over(&mut self, final_score: u32);

    fn hide_game_over(&mut self);

    /// Emitted once per game when it ends, so a host can re-enable its start control.
    fn game_ended(&mut self, final_score: u32);
}

/// Ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_active(&mut self, _shape: &Shape, _x: i32, _y: i32) {}
    fn render_grid(&mut self, _grid: &Grid) {}
    fn render_score(&mut self, _score: u32) {}
    fn render_level(&mut self, _level: u32) {}
    fn show_game_over(&mut self, _final_score: u32) {}
    fn hide_game_over(&mut self) {}
    fn game_ended(&mut self, _final_score: u32) {}
}

/// One renderer callback, captured with owned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Active {
        cells: Vec<(i32, i32)>,
        color: Rgb,
    },
    Grid(Vec<Cell>),
    Score(u32),
    Level(u32),
    ShowGameOver(u32),
    HideGameOver,
    GameEnded(u32),
}

/// Records every callback in order. Handy for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Most recent score pushed, if any
    pub fn last_score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Score(s) => Some(*s),
            _ => None,
        })
    }

    /// Most recent active-piece cells pushed, if any
    pub fn last_active(&self) -> Option<&[(i32, i32)]> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Active { cells, .. } => Some(cells.as_slice()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render_active(&mut self, shape: &Shape, x: i32, y: i32) {
        self.events.push(RenderEvent::Active {
            cells: shape.points().iter().map(|p| (x + p.x, y + p.y)).collect(),
            color: shape.color(),
        });
    }

    fn render_grid(&mut self, grid: &Grid) {
        self.events.push(RenderEvent::Grid(grid.cells().to_vec()));
    }

    fn render_score(&mut self, score: u32) {
        self.events.push(RenderEvent::Score(score));
    }

    fn render_level(&mut self, level: u32) {
        self.events.push(RenderEvent::Level(level));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.events.push(RenderEvent::ShowGameOver(final_score));
    }

    fn hide_game_over(&mut self) {
        self.events.push(RenderEvent::HideGameOver);
    }

    fn game_ended(&mut self, final_score: u32) {
        self.events.push(RenderEvent::GameEnded(final_score));
    }
}
