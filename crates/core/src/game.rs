//! Game module - the engine state machine
//!
//! Ties together the grid, the active piece, the piece generator, scoring and
//! the gravity scheduler. Every state change is pushed to the [`Renderer`].
//!
//! ```text
//! NotStarted --start--> Running <--pause/resume--> Paused
//!                          |                          |
//!                          +------ lock overflow -----+--> GameOver --start--> Running
//! ```

use std::time::Duration;

use log::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::{Grid, LineClear};
use crate::pieces::PieceGenerator;
use crate::render::Renderer;
use crate::scoring::{calculate_line_score, crosses_breakpoint, gravity_interval};
use crate::shape::Shape;
use crate::timer::{IntervalTimer, Scheduler};
use crate::types::{Command, Direction, SPAWN_ROW};

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// The falling piece: a shape anchored at (x, y) in grid coordinates.
///
/// `y` is negative while the piece still pokes out above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Absolute grid coordinates of every cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .points()
            .iter()
            .map(move |p| (self.x + p.x, self.y + p.y))
    }

    /// Check if every cell, shifted by (dx, dy), lands on a valid coordinate
    pub fn fits(&self, grid: &Grid, dx: i32, dy: i32) -> bool {
        self.cells()
            .all(|(x, y)| grid.is_valid_coordinate(x + dx, y + dy))
    }
}

/// A single game engine instance.
///
/// Owns all game state. Hosts drive it with [`Tetris::apply`] (or the
/// individual command methods) and [`Tetris::advance`] for elapsed time.
#[derive(Debug)]
pub struct Tetris<R, S = IntervalTimer> {
    config: GameConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    pieces: PieceGenerator,
    renderer: R,
    timer: S,
    score: u32,
    level: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl<R: Renderer> Tetris<R, IntervalTimer> {
    /// Build an engine with the default interval timer.
    pub fn with_renderer(config: GameConfig, renderer: R) -> Result<Self, GameError> {
        Self::new(config, renderer, IntervalTimer::new())
    }
}

impl<R: Renderer, S: Scheduler> Tetris<R, S> {
    /// Build an engine. Nothing happens until [`Tetris::start`].
    pub fn new(config: GameConfig, renderer: R, timer: S) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let pieces = PieceGenerator::new(config.shapes.clone(), config.seed)?;

        Ok(Self {
            config,
            grid,
            active: None,
            pieces,
            renderer,
            timer,
            score: 0,
            level: 1,
            started: false,
            paused: false,
            game_over: false,
        })
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if !self.started {
            GameStatus::NotStarted
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.timer
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Gravity interval for the current level
    pub fn speed(&self) -> Duration {
        gravity_interval(
            self.level,
            self.config.max_interval,
            self.config.min_interval,
        )
    }

    /// Apply a host command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDropBegin => self.soft_drop_begin(),
            Command::SoftDropEnd => self.soft_drop_end(),
            Command::Rotate => self.rotate(),
        }
    }

    /// Start a new game, discarding any game in progress.
    pub fn start(&mut self) {
        self.timer.cancel();
        self.grid.reset();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.started = true;
        self.paused = false;
        self.game_over = false;

        info!(
            "starting game on a {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );

        self.renderer.hide_game_over();
        self.renderer.render_grid(&self.grid);
        self.renderer.render_score(self.score);
        self.renderer.render_level(self.level);

        self.spawn_next();

        if !self.game_over {
            self.arm_gravity();
        }
    }

    /// End the current game.
    ///
    /// No-op unless a game is running or paused, so the end-of-game
    /// notifications fire exactly once per game.
    pub fn stop(&mut self) {
        if !self.started || self.game_over {
            return;
        }
        self.timer.cancel();
        self.active = None;
        self.paused = false;
        self.game_over = true;

        info!("game over with score {} at level {}", self.score, self.level);

        self.renderer.show_game_over(self.score);
        self.renderer.game_ended(self.score);
    }

    pub fn pause(&mut self) {
        if self.status() == GameStatus::Running {
            self.paused = true;
            debug!("paused");
        }
    }

    pub fn resume(&mut self) {
        if self.status() == GameStatus::Paused {
            self.paused = false;
            debug!("resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.status() {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Feed host time to the gravity timer and run every due tick.
    pub fn advance(&mut self, elapsed: Duration) {
        self.timer.update(elapsed);
        // Re-arming or cancelling inside `move_down` resets the timer, which
        // ends this loop.
        while self.timer.take_tick() {
            self.move_down();
        }
    }

    /// One gravity tick
    pub fn tick(&mut self) {
        self.move_down();
    }

    /// Spawn a random piece above the grid and take its first step down.
    ///
    /// No-op outside a running game. A piece that cannot take that step never
    /// entered the board: it locks where it is and the game ends.
    pub fn spawn_next(&mut self) {
        if !self.started || self.game_over {
            return;
        }
        let shape = self.pieces.next_shape();
        let piece = ActivePiece::new(shape, self.config.spawn_column(), SPAWN_ROW);
        debug!(
            "spawned {}-cell piece at ({}, {})",
            piece.shape.points().len(),
            piece.x,
            piece.y
        );
        self.renderer.render_active(&piece.shape, piece.x, piece.y);
        self.active = Some(piece);

        if !self.step_down() {
            debug!("spawned piece cannot enter the grid");
            self.lock_active();
            self.stop();
        }
    }

    /// Gravity step: move down one row or lock the piece where it is.
    pub fn move_down(&mut self) {
        if self.paused || self.active.is_none() {
            return;
        }
        if !self.step_down() {
            self.lock_active();
            self.spawn_next();
        }
    }

    pub fn move_left(&mut self) {
        self.move_horizontal(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_horizontal(Direction::Right);
    }

    /// Shift the active piece one column if every cell stays valid.
    pub fn move_horizontal(&mut self, direction: Direction) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        let dx = direction.dx();
        if piece.fits(&self.grid, dx, 0) {
            piece.x += dx;
            self.renderer.render_active(&piece.shape, piece.x, piece.y);
        }
    }

    /// Rotate the active piece clockwise.
    ///
    /// Only overflow past the right edge is corrected, by shifting left.
    /// The left edge and existing cells are not checked.
    pub fn rotate(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        piece.shape.rotate();

        let overflow = piece.x + piece.shape.width() - self.grid.width() as i32;
        if overflow > 0 {
            piece.x -= overflow;
        }
        self.renderer.render_active(&piece.shape, piece.x, piece.y);
    }

    /// Down key pressed: stop gravity and step down once.
    pub fn soft_drop_begin(&mut self) {
        if self.active.is_none() {
            return;
        }
        if self.timer.is_armed() {
            self.timer.cancel();
        }
        self.move_down();
    }

    /// Down key released: restart gravity at the current speed.
    pub fn soft_drop_end(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.arm_gravity();
    }

    fn arm_gravity(&mut self) {
        let interval = self.speed();
        trace!("gravity armed at {:?}", interval);
        self.timer.arm(interval);
    }

    /// Move the active piece down one row if it fits. Returns whether it moved.
    fn step_down(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.fits(&self.grid, 0, 1) {
            return false;
        }
        piece.y += 1;
        self.renderer.render_active(&piece.shape, piece.x, piece.y);
        true
    }

    /// Merge the active piece into the grid and settle the consequences.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let cells: Vec<(i32, i32)> = piece.cells().collect();
        let visible = cells.iter().any(|&(x, y)| self.grid.contains(x, y));
        let outcome = self.grid.deposit(&cells, piece.shape.color());
        self.renderer.render_grid(&self.grid);

        match outcome {
            LineClear::Overflow => {
                debug!("locked at ({}, {}) into the top row", piece.x, piece.y);
                self.stop();
            }
            LineClear::Cleared(_) if !visible => {
                debug!("locked entirely above the grid at ({}, {})", piece.x, piece.y);
                self.stop();
            }
            LineClear::Cleared(rows) => {
                debug!("locked at ({}, {}), {} rows cleared", piece.x, piece.y, rows);
                self.award(rows);
            }
        }
    }

    fn award(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        let old = self.score;
        self.score = old.saturating_add(calculate_line_score(rows));
        self.renderer.render_score(self.score);

        if crosses_breakpoint(old, self.score) {
            self.level += 1;
            info!("level up to {} at score {}", self.level, self.score);
            self.renderer.render_level(self.level);
            self.arm_gravity();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingRenderer, RenderEvent};
    use crate::shape::Shape;
    use crate::types::PALETTE;

    fn single_cell() -> Shape {
        Shape::new([(0, 0)], PALETTE[0]).unwrap()
    }

    fn game_with(shapes: Vec<Shape>, width: usize, height: usize) -> Tetris<RecordingRenderer> {
        let config = GameConfig::default()
            .with_size(width, height)
            .with_shapes(shapes)
            .with_seed(12345);
        Tetris::with_renderer(config, RecordingRenderer::new()).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = game_with(vec![single_cell()], 12, 20);
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.active().is_none());
        assert!(!game.scheduler().is_armed());
        assert!(game.renderer().events().is_empty());
    }

    #[test]
    fn test_start_spawns_and_steps_once() {
        let mut game = game_with(vec![single_cell()], 12, 20);
        game.start();

        assert_eq!(game.status(), GameStatus::Running);
        let piece = game.active().unwrap();
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(
            game.scheduler().interval(),
            Some(Duration::from_millis(750))
        );

        let events = game.renderer().events();
        assert_eq!(events[0], RenderEvent::HideGameOver);
        assert!(matches!(events[1], RenderEvent::Grid(_)));
        assert_eq!(events[2], RenderEvent::Score(0));
        assert_eq!(events[3], RenderEvent::Level(1));
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let mut game = game_with(vec![single_cell()], 12, 20);
        for command in [
            Command::MoveLeft,
            Command::Rotate,
            Command::SoftDropBegin,
            Command::SoftDropEnd,
            Command::Pause,
        ] {
            game.apply(command);
        }
        game.advance(Duration::from_secs(5));
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert!(game.renderer().events().is_empty());
    }

    #[test]
    fn test_gravity_moves_piece() {
        let mut game = game_with(vec![single_cell()], 12, 20);
        game.start();

        game.advance(Duration::from_millis(749));
        assert_eq!(game.active().unwrap().y, 0);
        game.advance(Duration::from_millis(1));
        assert_eq!(game.active().unwrap().y, 1);
        game.advance(Duration::from_millis(1500));
        assert_eq!(game.active().unwrap().y, 3);
    }

    #[test]
    fn test_horizontal_blocked_by_wall_and_cells() {
        let mut game = game_with(vec![single_cell()], 3, 5);
        game.start();
        assert_eq!(game.active().unwrap().x, 0);

        game.move_left();
        assert_eq!(game.active().unwrap().x, 0);

        game.grid_mut().set(1, 0, Some(PALETTE[1]));
        game.move_right();
        assert_eq!(game.active().unwrap().x, 0);
    }

    #[test]
    fn test_rotate_clamps_right_edge() {
        let bar = Shape::new([(0, 0), (0, 1), (0, 2), (0, 3)], PALETTE[1]).unwrap();
        let mut game = game_with(vec![bar], 12, 20);
        game.start();
        for _ in 0..10 {
            game.move_right();
        }
        assert_eq!(game.active().unwrap().x, 11);

        game.rotate();
        let piece = game.active().unwrap();
        assert_eq!(piece.shape.dimensions(), (4, 1));
        assert_eq!(piece.x, 8);
    }

    #[test]
    fn test_rotate_ignores_collisions() {
        let bar = Shape::new([(0, 0), (0, 1), (0, 2), (0, 3)], PALETTE[1]).unwrap();
        let mut game = game_with(vec![bar.clone()], 12, 20);
        game.start();
        game.grid_mut().set(7, 10, Some(PALETTE[0]));
        game.set_active(ActivePiece::new(bar, 6, 10));

        game.rotate();
        let piece = game.active().unwrap();
        assert_eq!((piece.x, piece.y), (6, 10));
        assert!(!piece.fits(game.grid(), 0, 0));
    }

    #[test]
    fn test_lock_clears_row_and_scores() {
        let mut game = game_with(vec![single_cell()], 3, 4);
        game.start();
        game.grid_mut().set(1, 3, Some(PALETTE[2]));
        game.grid_mut().set(2, 3, Some(PALETTE[2]));

        // Fall to the bottom row, then lock.
        game.advance(Duration::from_millis(750 * 4));

        assert_eq!(game.score(), 10);
        assert_eq!(game.level(), 1);
        assert!(game.grid().is_row_empty(3));
        assert_eq!(game.renderer().last_score(), Some(10));
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_zero_row_lock_is_silent() {
        let mut game = game_with(vec![single_cell()], 3, 4);
        game.start();
        game.renderer_mut().drain();

        game.advance(Duration::from_millis(750 * 4));
        assert_eq!(game.score(), 0);
        let events = game.renderer().events();
        assert_eq!(events.iter().filter(|e| matches!(e, RenderEvent::Score(_))).count(), 0);
        assert_eq!(events.iter().filter(|e| matches!(e, RenderEvent::Level(_))).count(), 0);
        assert_eq!(game.grid().get(0, 3), Some(Some(PALETTE[0])));
    }

    #[test]
    fn test_level_up_rearms_faster() {
        let mut game = game_with(vec![single_cell()], 3, 4);
        game.start();
        game.score = 95;
        game.grid_mut().set(1, 3, Some(PALETTE[2]));
        game.grid_mut().set(2, 3, Some(PALETTE[2]));

        game.advance(Duration::from_millis(750 * 4));

        assert_eq!(game.score(), 105);
        assert_eq!(game.level(), 2);
        assert_eq!(game.scheduler().interval(), Some(game.speed()));
        assert!(game.speed() < Duration::from_millis(750));
        assert_eq!(
            game.renderer()
                .count(|e| matches!(e, RenderEvent::Level(2))),
            1
        );
    }

    #[test]
    fn test_overflow_ends_game_once() {
        let mut game = game_with(vec![single_cell()], 2, 2);
        game.start();
        // First piece lands at row 1, the second one stops on it in row 0.
        game.advance(Duration::from_millis(750 * 3));

        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(game.active().is_none());
        assert!(!game.scheduler().is_armed());
        assert_eq!(game.renderer().count(|e| matches!(e, RenderEvent::GameEnded(_))), 1);
        assert_eq!(
            game.renderer().count(|e| matches!(e, RenderEvent::ShowGameOver(0))),
            1
        );

        game.stop();
        game.advance(Duration::from_secs(10));
        assert_eq!(game.renderer().count(|e| matches!(e, RenderEvent::GameEnded(_))), 1);
    }

    #[test]
    fn test_pause_absorbs_ticks() {
        let mut game = game_with(vec![single_cell()], 12, 20);
        game.start();
        game.pause();
        assert_eq!(game.status(), GameStatus::Paused);
        assert!(game.scheduler().is_armed());

        game.advance(Duration::from_secs(10));
        assert_eq!(game.active().unwrap().y, 0);

        game.resume();
        game.advance(Duration::from_millis(750));
        assert_eq!(game.active().unwrap().y, 1);
    }

    #[test]
    fn test_soft_drop_cancels_and_rearms() {
        let mut game = game_with(vec![single_cell()], 12, 20);
        game.start();

        game.soft_drop_begin();
        assert!(!game.scheduler().is_armed());
        assert_eq!(game.active().unwrap().y, 1);

        game.advance(Duration::from_secs(10));
        assert_eq!(game.active().unwrap().y, 1);

        game.soft_drop_end();
        assert_eq!(
            game.scheduler().interval(),
            Some(Duration::from_millis(750))
        );
    }

    #[test]
    fn test_piece_locked_above_grid_ends_game() {
        let wide = Shape::new([(0, 0), (1, 0), (2, 0)], PALETTE[3]).unwrap();
        // The spawn column leaves no room for a 3-wide piece on a 2-wide board.
        let mut game = game_with(vec![wide], 2, 4);
        game.start();
        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(!game.scheduler().is_armed());
    }

    #[test]
    fn test_spawn_before_start_is_ignored() {
        let mut game = game_with(vec![single_cell()], 4, 4);
        game.spawn_next();
        assert!(game.active().is_none());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert!(game.renderer().events().is_empty());
    }
}
