//! Value types: `Point` and `Segment`.
//!
//! Both are `Copy` and never mutated after construction; shapes hold them by value.

use nalgebra::Vector2;

/// Immutable 2D coordinate.
///
/// Coordinates are expected to be finite; NaN/∞ propagate through every
/// derived quantity without being rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }
    /// Position vector from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        self.v
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { v }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.v
    }
}

/// Directed pair of endpoints. Endpoints may coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    first: Point,
    second: Point,
}

impl Segment {
    #[inline]
    pub fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }
    #[inline]
    pub fn endpoint_one(&self) -> Point {
        self.first
    }
    #[inline]
    pub fn endpoint_two(&self) -> Point {
        self.second
    }
    /// `second − first`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.second.v - self.first.v
    }
    /// Euclidean length `sqrt(dx² + dy²)`; 0 for a degenerate segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}
