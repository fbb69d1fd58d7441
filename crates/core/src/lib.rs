//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the
//! shapes, scoring and the engine state machine. It has no knowledge of
//! terminals, keyboards or wall-clock time, which keeps it:
//!
//! - **Deterministic**: a seed fixes the piece sequence and time is injected
//! - **Testable**: every rule can be driven from plain unit tests
//! - **Portable**: any presentation layer can implement [`Renderer`]
//!
//! # Module Structure
//!
//! - [`shape`]: piece layouts, bounding boxes and clockwise rotation
//! - [`grid`]: the playfield, deposits, line clears and overflow detection
//! - [`scoring`]: line-clear points, level breakpoints and gravity speed
//! - [`timer`]: the injectable gravity [`Scheduler`]
//! - [`pieces`]: uniform random piece selection
//! - [`render`]: the presentation callbacks
//! - [`config`]: board size, intervals, seed and shape catalog
//! - [`game`]: the [`Tetris`] engine
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use falling_blocks_core::{GameConfig, GameStatus, RecordingRenderer, Tetris};
//! use falling_blocks_types::Command;
//!
//! let config = GameConfig::default().with_seed(12345);
//! let mut game = Tetris::with_renderer(config, RecordingRenderer::new()).unwrap();
//! game.apply(Command::Start);
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//! game.advance(Duration::from_millis(750));
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod render;
pub mod scoring;
pub mod shape;
pub mod timer;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{GameError, GridError, InvalidShapeError};
pub use game::{ActivePiece, GameStatus, Tetris};
pub use grid::{Grid, LineClear};
pub use pieces::PieceGenerator;
pub use render::{NullRenderer, RecordingRenderer, RenderEvent, Renderer};
pub use scoring::{calculate_line_score, crosses_breakpoint, gravity_interval};
pub use shape::{standard_shapes, Point, Shape};
pub use timer::{IntervalTimer, Scheduler};
