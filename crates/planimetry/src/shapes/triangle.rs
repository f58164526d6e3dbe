//! Triangle with Heron's-formula area.
//!
//! Side lengths and the semi-perimeter are derived once at construction from
//! edges 0..3 and cached; the shape is immutable afterwards.

use super::{check_closed_loop, closing_edges, SHAPE_REL_EPS};
use crate::cfg::HeronMode;
use crate::error::GeometryError;
use crate::primitives::{Point, Segment};

#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    sides: [f64; 3],
    semi_perimeter: f64,
}

impl Triangle {
    pub const SIDES: usize = 3;

    /// Build from ordered vertices and boundary edges.
    ///
    /// Only arity is checked: at least 3 vertices and 3 edges. Whether the edges
    /// actually connect the vertices is the caller's business (see `check_geometry`).
    pub fn new(vertices: Vec<Point>, edges: Vec<Segment>) -> Result<Self, GeometryError> {
        if vertices.len() < Self::SIDES {
            return Err(GeometryError::TooFewVertices {
                needed: Self::SIDES,
                got: vertices.len(),
            });
        }
        if edges.len() < Self::SIDES {
            return Err(GeometryError::TooFewEdges {
                needed: Self::SIDES,
                got: edges.len(),
            });
        }
        Ok(Self::derive(vertices, edges))
    }

    /// Triangle `a → b → c → a`.
    pub fn from_vertices(a: Point, b: Point, c: Point) -> Self {
        let vertices = vec![a, b, c];
        let edges = closing_edges(&vertices);
        Self::derive(vertices, edges)
    }

    fn derive(vertices: Vec<Point>, edges: Vec<Segment>) -> Self {
        let sides = [edges[0].length(), edges[1].length(), edges[2].length()];
        // Semi-perimeter for Heron's formula.
        let semi_perimeter = (sides[0] + sides[1] + sides[2]) / 2.0;
        Self {
            vertices,
            edges,
            sides,
            semi_perimeter,
        }
    }

    #[inline]
    pub fn side_count(&self) -> usize {
        Self::SIDES
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }
    /// Cached lengths of edges 0, 1, 2.
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
    pub fn semi_perimeter(&self) -> f64 {
        self.semi_perimeter
    }

    /// Heron's formula `sqrt(s(s−a)(s−b)(s−c))`, unguarded.
    ///
    /// For (near-)collinear vertices the radicand may round below zero and the
    /// result is NaN. Use `area_with(HeronMode::Clamped)` to get 0 instead.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area_with(HeronMode::Unguarded)
    }

    pub fn area_with(&self, mode: HeronMode) -> f64 {
        let s = self.semi_perimeter;
        let [a, b, c] = self.sides;
        let radicand = s * (s - a) * (s - b) * (s - c);
        match mode {
            HeronMode::Unguarded => radicand.sqrt(),
            HeronMode::Clamped => radicand.max(0.0).sqrt(),
        }
    }

    /// Arity check: exactly 3 edges. Says nothing about the triangle inequality
    /// or collinearity.
    #[inline]
    pub fn is_structurally_valid(&self) -> bool {
        self.edges.len() == Self::SIDES
    }

    /// Geometric check: 3 vertices, edges form the closed loop over them, and
    /// the area is non-zero.
    pub fn check_geometry(&self) -> Result<(), GeometryError> {
        if self.vertices.len() != Self::SIDES {
            return Err(GeometryError::WrongVertexCount {
                expected: Self::SIDES,
                got: self.vertices.len(),
            });
        }
        check_closed_loop(&self.vertices, &self.edges)?;
        let s = self.semi_perimeter;
        let area = self.area_with(HeronMode::Clamped);
        if !(area > SHAPE_REL_EPS * s * s) {
            return Err(GeometryError::Degenerate);
        }
        Ok(())
    }
}
