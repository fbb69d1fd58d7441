//! Shape module - one piece type's cell layout and color
//!
//! Points are offsets relative to the shape's own origin (top-left of its
//! bounding box), always non-negative. Rotation is done in place and keeps
//! that invariant by recomputing the bounding box.

use crate::error::InvalidShapeError;
use crate::types::{Rgb, PALETTE};

/// A cell offset inside a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A piece type: its cells, its color and the derived bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    points: Vec<Point>,
    color: Rgb,
    width: i32,
    height: i32,
}

impl Shape {
    /// Build a shape from relative points.
    ///
    /// Fails when `points` is empty or any offset is negative.
    pub fn new<P: Into<Point>>(
        points: impl IntoIterator<Item = P>,
        color: Rgb,
    ) -> Result<Self, InvalidShapeError> {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(InvalidShapeError::Empty);
        }
        if let Some(p) = points.iter().find(|p| p.x < 0 || p.y < 0) {
            return Err(InvalidShapeError::NegativeOffset { x: p.x, y: p.y });
        }

        let mut shape = Self {
            points,
            color,
            width: 0,
            height: 0,
        };
        shape.recompute_dimensions();
        Ok(shape)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bounding box as (width, height): max offset + 1 on each axis
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Rotate 90° clockwise about the bounding box.
    ///
    /// Transpose, recompute the box, then mirror horizontally. Collisions are
    /// the caller's problem.
    pub fn rotate(&mut self) {
        for p in &mut self.points {
            std::mem::swap(&mut p.x, &mut p.y);
        }

        self.recompute_dimensions();

        for p in &mut self.points {
            p.x = self.width - 1 - p.x;
        }
    }

    fn recompute_dimensions(&mut self) {
        let (max_x, max_y) = self
            .points
            .iter()
            .fold((0, 0), |(mx, my), p| (mx.max(p.x), my.max(p.y)));
        self.width = max_x + 1;
        self.height = max_y + 1;
    }
}

/// The five shapes the game ships with, one palette color each
pub fn standard_shapes() -> Vec<Shape> {
    const LAYOUTS: [[(i32, i32); 4]; 5] = [
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (2, 1)],
    ];

    LAYOUTS
        .iter()
        .zip(PALETTE)
        .map(|(layout, color)| Shape {
            points: layout.iter().copied().map(Point::from).collect(),
            color,
            width: layout.iter().map(|p| p.0).max().unwrap_or(0) + 1,
            height: layout.iter().map(|p| p.1).max().unwrap_or(0) + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(points: &[Point]) -> Vec<Point> {
        let mut v = points.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_empty_points_rejected() {
        let points: [(i32, i32); 0] = [];
        assert_eq!(
            Shape::new(points, PALETTE[0]),
            Err(InvalidShapeError::Empty)
        );
    }

    #[test]
    fn test_negative_offset_rejected() {
        assert_eq!(
            Shape::new([(0, 0), (-1, 0)], PALETTE[0]),
            Err(InvalidShapeError::NegativeOffset { x: -1, y: 0 })
        );
    }

    #[test]
    fn test_dimensions() {
        let bar = Shape::new([(0, 0), (0, 1), (0, 2), (0, 3)], PALETTE[1]).unwrap();
        assert_eq!(bar.dimensions(), (1, 4));

        let single = Shape::new([(0, 0)], PALETTE[1]).unwrap();
        assert_eq!(single.dimensions(), (1, 1));
    }

    #[test]
    fn test_rotate_vertical_bar_becomes_horizontal() {
        let mut bar = Shape::new([(0, 0), (0, 1), (0, 2), (0, 3)], PALETTE[1]).unwrap();
        bar.rotate();
        assert_eq!(bar.dimensions(), (4, 1));
        assert_eq!(
            sorted(bar.points()),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_rotate_is_clockwise() {
        // #.
        // #.
        // ##
        let mut l = Shape::new([(0, 0), (0, 1), (0, 2), (1, 2)], PALETTE[3]).unwrap();
        l.rotate();
        // ###
        // #..
        assert_eq!(l.dimensions(), (3, 2));
        assert_eq!(
            sorted(l.points()),
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_four_rotations_restore_standard_shapes() {
        for shape in standard_shapes() {
            let mut rotated = shape.clone();
            for _ in 0..4 {
                rotated.rotate();
            }
            assert_eq!(sorted(rotated.points()), sorted(shape.points()));
            assert_eq!(rotated.dimensions(), shape.dimensions());
        }
    }

    #[test]
    fn test_standard_shapes_use_palette() {
        let shapes = standard_shapes();
        assert_eq!(shapes.len(), PALETTE.len());
        for (shape, color) in shapes.iter().zip(PALETTE) {
            assert_eq!(shape.color(), color);
            assert_eq!(shape.points().len(), 4);
        }
        assert_eq!(shapes[4].dimensions(), (3, 2));
    }
}
