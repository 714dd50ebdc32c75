//! 2D grid coordinates and shape normalization.

use std::ops::Add;

/// A zero-based grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Translates points so the minimum x and y values are both zero, then sorts
/// them row by row (y, then x).
///
/// Two shapes that differ only by translation normalize to the same points.
pub fn normalize_to_origin(mut points: Vec<Point>) -> Vec<Point> {
    let Some(min_x) = points.iter().map(|p| p.x).min() else {
        return points;
    };
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);

    for point in &mut points {
        point.x -= min_x;
        point.y -= min_y;
    }

    points.sort_by_key(|p| (p.y, p.x));
    points
}
