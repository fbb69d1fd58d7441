//! Game configuration.

use std::time::Duration;

use crate::error::{GameError, GridError};
use crate::shape::{standard_shapes, Shape};
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};

/// Everything a [`crate::Tetris`] needs to know before the first game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Gravity interval at level 1.
    pub max_interval: Duration,
    /// Floor the interval approaches at high levels.
    pub min_interval: Duration,
    /// RNG seed for piece selection; `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Shapes the generator draws from.
    pub shapes: Vec<Shape>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            max_interval: Duration::from_millis(MAX_INTERVAL_MS),
            min_interval: Duration::from_millis(MIN_INTERVAL_MS),
            seed: None,
            shapes: standard_shapes(),
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_intervals(mut self, max: Duration, min: Duration) -> Self {
        self.max_interval = max;
        self.min_interval = min;
        self
    }

    /// Column new pieces are anchored at
    pub fn spawn_column(&self) -> i32 {
        (self.width / 2).saturating_sub(1) as i32
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::ZeroSize {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.shapes.is_empty() {
            return Err(GameError::EmptyShapeCatalog);
        }
        if self.min_interval.is_zero() {
            return Err(GameError::ZeroInterval);
        }
        if self.min_interval >= self.max_interval {
            return Err(GameError::IntervalOrder {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (12, 20));
        assert_eq!(config.spawn_column(), 5);
    }

    #[test]
    fn test_spawn_column_tracks_width() {
        assert_eq!(GameConfig::default().with_size(10, 20).spawn_column(), 4);
        assert_eq!(GameConfig::default().with_size(1, 20).spawn_column(), 0);
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            GameConfig::default().with_size(0, 20).validate(),
            Err(GameError::Grid(GridError::ZeroSize { .. }))
        ));
        assert_eq!(
            GameConfig::default().with_shapes(Vec::new()).validate(),
            Err(GameError::EmptyShapeCatalog)
        );
        let slow = Duration::from_millis(100);
        assert!(matches!(
            GameConfig::default().with_intervals(slow, slow).validate(),
            Err(GameError::IntervalOrder { .. })
        ));
        assert_eq!(
            GameConfig::default()
                .with_intervals(slow, Duration::ZERO)
                .validate(),
            Err(GameError::ZeroInterval)
        );
    }
}
