//! Four-sided polygon with length × height area and fan-decomposition containment.
//!
//! `length` and `height` are the lengths of edges 0 and 1, which are assumed to
//! be adjacent and perpendicular. Nothing enforces that at construction; use
//! `check_geometry` when the input is untrusted.

use super::triangle::Triangle;
use super::{check_closed_loop, closing_edges, SHAPE_REL_EPS};
use crate::cfg::{ContainmentCfg, HeronMode};
use crate::error::GeometryError;
use crate::primitives::{Point, Segment};

/// Vertex pairs `(i, i+1 mod 4)` forming the rectangle's edges.
const FAN: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

#[derive(Debug)]
pub struct Rectangle {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    length: f64,
    height: f64,
}

impl Rectangle {
    pub const SIDES: usize = 4;

    /// Build from ordered vertices and boundary edges.
    ///
    /// Rejects fewer than 4 vertices (containment walks vertices 0..4) or fewer
    /// than 2 edges (edges 0 and 1 give length and height). A surplus or shortage
    /// of edges beyond that only shows up in `is_structurally_valid`.
    pub fn new(vertices: Vec<Point>, edges: Vec<Segment>) -> Result<Self, GeometryError> {
        if vertices.len() < Self::SIDES {
            return Err(GeometryError::TooFewVertices {
                needed: Self::SIDES,
                got: vertices.len(),
            });
        }
        if edges.len() < 2 {
            return Err(GeometryError::TooFewEdges {
                needed: 2,
                got: edges.len(),
            });
        }
        Ok(Self::derive(vertices, edges))
    }

    /// Rectangle over `v[0] → v[1] → v[2] → v[3] → v[0]`.
    pub fn from_vertices(vertices: [Point; 4]) -> Self {
        let vertices = vertices.to_vec();
        let edges = closing_edges(&vertices);
        Self::derive(vertices, edges)
    }

    fn derive(vertices: Vec<Point>, edges: Vec<Segment>) -> Self {
        let length = edges[0].length();
        let height = edges[1].length();
        Self {
            vertices,
            edges,
            length,
            height,
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
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.length * self.height
    }

    /// Arity check: exactly 4 edges. Angles are not inspected.
    #[inline]
    pub fn is_structurally_valid(&self) -> bool {
        self.edges.len() == Self::SIDES
    }

    /// Boundary-inclusive containment with `ContainmentCfg::default()`
    /// (absolute 1e-3, clamped Heron).
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_with(p, &ContainmentCfg::default())
    }

    /// Containment by triangle fan.
    ///
    /// For each edge `(v_i, v_{i+1})` the triangle `(v_i, v_{i+1}, p)` is built
    /// and its Heron area taken. The four areas tile the rectangle exactly when
    /// `p` is inside or on the boundary; outside, they overcount. `p` is
    /// contained iff the sum matches `area()` within `cfg.tolerance`.
    ///
    /// A point on an edge makes that edge's fan triangle collinear, whose
    /// radicand may round below zero. With `HeronMode::Clamped` (the default)
    /// that sub-area is 0; with `Unguarded` it is NaN and the result is `false`,
    /// even for boundary points of rotated rectangles.
    ///
    /// Does not consult `is_structurally_valid`.
    pub fn contains_point_with(&self, p: Point, cfg: &ContainmentCfg) -> bool {
        let sub = FAN.map(|(i, j)| self.fan_area(i, j, p, cfg.heron));
        let total: f64 = sub.iter().sum();
        let area = self.area();
        let inside = cfg.tolerance.matches(total, area);
        tracing::trace!(
            x = p.x(),
            y = p.y(),
            ?sub,
            total,
            area,
            inside,
            "rectangle_containment"
        );
        inside
    }

    /// Heron area of the transient triangle `(v_i, v_j, p)`.
    fn fan_area(&self, i: usize, j: usize, p: Point, mode: HeronMode) -> f64 {
        Triangle::from_vertices(self.vertices[i], self.vertices[j], p).area_with(mode)
    }

    /// Geometric check: 4 vertices, edges close the loop, non-zero area, and a
    /// right angle at every corner.
    pub fn check_geometry(&self) -> Result<(), GeometryError> {
        if self.vertices.len() != Self::SIDES {
            return Err(GeometryError::WrongVertexCount {
                expected: Self::SIDES,
                got: self.vertices.len(),
            });
        }
        check_closed_loop(&self.vertices, &self.edges)?;
        let scale = self.length.max(self.height);
        if !(self.area() > SHAPE_REL_EPS * scale * scale) {
            return Err(GeometryError::Degenerate);
        }
        for i in 0..Self::SIDES {
            let prev = self.vertices[(i + Self::SIDES - 1) % Self::SIDES].to_vector();
            let here = self.vertices[i].to_vector();
            let next = self.vertices[(i + 1) % Self::SIDES].to_vector();
            let (u, w) = (here - prev, next - here);
            if u.dot(&w).abs() > SHAPE_REL_EPS * u.norm() * w.norm() {
                return Err(GeometryError::NotRightAngle { index: i });
            }
        }
        Ok(())
    }
}

impl Clone for Rectangle {
    /// Copies vertices and edges; length and height are re-derived from the copy.
    fn clone(&self) -> Self {
        Self::derive(self.vertices.clone(), self.edges.clone())
    }
}
