//! Ellipse and circle: closed-form area only, no containment.

use crate::primitives::Point;

/// π as `4·atan(1)`.
#[inline]
fn pi() -> f64 {
    4.0 * 1f64.atan()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    semi_major: f64,
    semi_minor: f64,
    center: Point,
}

impl Ellipse {
    pub fn new(semi_major: f64, semi_minor: f64, center: Point) -> Self {
        Self {
            semi_major,
            semi_minor,
            center,
        }
    }
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }
    pub fn center(&self) -> Point {
        self.center
    }
    /// `π · a · b`.
    #[inline]
    pub fn area(&self) -> f64 {
        pi() * self.semi_major * self.semi_minor
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
    center: Point,
}

impl Circle {
    pub fn new(radius: f64, center: Point) -> Self {
        Self { radius, center }
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn center(&self) -> Point {
        self.center
    }
    /// `π · r²`.
    #[inline]
    pub fn area(&self) -> f64 {
        pi() * self.radius * self.radius
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Self {
        Ellipse::new(c.radius, c.radius, c.center)
    }
}
