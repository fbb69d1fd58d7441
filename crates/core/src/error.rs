//! Construction-time errors.
//!
//! Only building things can fail. Once a game is running, illegal moves are
//! rejected or clamped silently and game over is a state, not an error.

use std::time::Duration;

/// A shape could not be built from the given points.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum InvalidShapeError {
    #[error("invalid points array: a shape needs at least one cell")]
    Empty,
    #[error("invalid point ({x}, {y}): shape offsets must be non-negative")]
    NegativeOffset { x: i32, y: i32 },
}

/// A grid could not be allocated.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroSize { width: usize, height: usize },
}

/// A game could not be built from its configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Shape(#[from] InvalidShapeError),
    #[error("shape catalog is empty")]
    EmptyShapeCatalog,
    #[error("minimum interval {min:?} must be shorter than maximum interval {max:?}")]
    IntervalOrder { min: Duration, max: Duration },
    #[error("minimum interval must be non-zero")]
    ZeroInterval,
}
