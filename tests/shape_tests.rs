use falling_blocks::core::{standard_shapes, Point, Shape};
use falling_blocks::types::PALETTE;
use proptest::prelude::*;

fn sorted(shape: &Shape) -> Vec<Point> {
    let mut points = shape.points().to_vec();
    points.sort();
    points
}

/// Shapes whose bounding box starts at the origin on both axes.
fn normalized_shape() -> impl Strategy<Value = Shape> {
    prop::collection::vec((0i32..5, 0i32..5), 1..8).prop_map(|raw| {
        let min_x = raw.iter().map(|p| p.0).min().unwrap_or(0);
        let min_y = raw.iter().map(|p| p.1).min().unwrap_or(0);
        Shape::new(raw.iter().map(|&(x, y)| (x - min_x, y - min_y)), PALETTE[0]).unwrap()
    })
}

#[test]
fn standard_catalog_has_five_distinct_colors() {
    let shapes = standard_shapes();
    assert_eq!(shapes.len(), 5);
    let colors: Vec<_> = shapes.iter().map(Shape::color).collect();
    assert_eq!(colors, PALETTE.to_vec());
}

#[test]
fn square_is_rotation_invariant() {
    let mut square = standard_shapes()
        .into_iter()
        .find(|s| s.dimensions() == (2, 2))
        .unwrap();
    let before = sorted(&square);
    square.rotate();
    assert_eq!(sorted(&square), before);
}

proptest! {
    #[test]
    fn rotation_swaps_dimensions_and_stays_in_box(mut shape in normalized_shape(), turns in 1usize..8) {
        let count = shape.points().len();
        for _ in 0..turns {
            let (w, h) = shape.dimensions();
            shape.rotate();
            prop_assert_eq!(shape.dimensions(), (h, w));
        }
        prop_assert_eq!(shape.points().len(), count);
        for p in shape.points() {
            prop_assert!(p.x >= 0 && p.x < shape.width());
            prop_assert!(p.y >= 0 && p.y < shape.height());
        }
    }

    #[test]
    fn four_rotations_are_identity(mut shape in normalized_shape()) {
        let before = sorted(&shape);
        for _ in 0..4 {
            shape.rotate();
        }
        prop_assert_eq!(sorted(&shape), before);
    }

    #[test]
    fn negative_offsets_are_rejected(x in -5i32..0, y in 0i32..5) {
        prop_assert!(Shape::new([(0, 0), (x, y)], PALETTE[1]).is_err());
    }
}
