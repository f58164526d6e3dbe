//! Concrete shapes and the closed `Shape` variant that dispatches over them.
//!
//! - Polygons (`Triangle`, `Rectangle`) own ordered vertices plus boundary edges,
//!   where edge `i` joins vertex `i` to vertex `i+1 mod n`.
//! - Curved shapes (`Ellipse`, `Circle`) only carry axes and a center.
//!
//! Validity comes in two separately named flavours:
//! - `is_structurally_valid`: edge-count (arity) check only, nothing geometric.
//! - `check_geometry`: opt-in geometric check (connectivity, area, right angles).
//!
//! Containment is a capability of `Rectangle` only; `Shape::contains_point`
//! answers `None` for every other variant.

mod ellipse;
mod rectangle;
mod triangle;

pub use ellipse::{Circle, Ellipse};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::cfg::ContainmentCfg;
use crate::error::GeometryError;
use crate::primitives::{Point, Segment};

/// Tolerance for "these two vertices coincide" in `check_geometry`.
const VERTEX_EPS: f64 = 1e-9;
/// Relative tolerance for zero area and right angles in `check_geometry`.
const SHAPE_REL_EPS: f64 = 1e-9;

/// Edges `v[i] → v[i+1 mod n]` for an ordered vertex list.
pub fn closing_edges(vertices: &[Point]) -> Vec<Segment> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

#[inline]
fn coincide(a: Point, b: Point) -> bool {
    (a.to_vector() - b.to_vector()).norm() <= VERTEX_EPS
}

/// Exactly `vertices.len()` edges, edge `i` joining vertex `i` and `i+1 mod n`
/// (either orientation).
fn check_closed_loop(vertices: &[Point], edges: &[Segment]) -> Result<(), GeometryError> {
    let n = vertices.len();
    if edges.len() != n {
        return Err(GeometryError::WrongEdgeCount {
            expected: n,
            got: edges.len(),
        });
    }
    for (i, e) in edges.iter().enumerate() {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        let (p, q) = (e.endpoint_one(), e.endpoint_two());
        let forward = coincide(p, a) && coincide(q, b);
        let backward = coincide(p, b) && coincide(q, a);
        if !(forward || backward) {
            return Err(GeometryError::DisconnectedEdge { index: i });
        }
    }
    Ok(())
}

/// Variant tag of a `Shape`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Ellipse,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of supported shapes.
#[derive(Clone, Debug)]
pub enum Shape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Triangle(t) => t.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Ellipse(e) => e.area(),
            Shape::Circle(c) => c.area(),
        }
    }

    /// Recorded side count for polygons; `None` for curved shapes.
    pub fn side_count(&self) -> Option<usize> {
        match self {
            Shape::Triangle(t) => Some(t.side_count()),
            Shape::Rectangle(r) => Some(r.side_count()),
            Shape::Ellipse(_) | Shape::Circle(_) => None,
        }
    }

    /// Arity check for polygons; `None` for curved shapes.
    pub fn is_structurally_valid(&self) -> Option<bool> {
        match self {
            Shape::Triangle(t) => Some(t.is_structurally_valid()),
            Shape::Rectangle(r) => Some(r.is_structurally_valid()),
            Shape::Ellipse(_) | Shape::Circle(_) => None,
        }
    }

    /// Containment decision where the shape supports one (`Rectangle`), else `None`.
    pub fn contains_point(&self, p: Point, cfg: &ContainmentCfg) -> Option<bool> {
        match self {
            Shape::Rectangle(r) => Some(r.contains_point_with(p, cfg)),
            Shape::Triangle(_) | Shape::Ellipse(_) | Shape::Circle(_) => None,
        }
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}
impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}
impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}
impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
