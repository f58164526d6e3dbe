//! JSON shape descriptions.
//!
//! ```json
//! {"kind": "rectangle", "vertices": [[8, 0], [4, 0], [4, 4], [8, 4]]}
//! {"kind": "circle", "radius": 2.0, "center": [0, 0]}
//! ```
//!
//! Polygons take an optional `edges` list (pairs of points); without it the
//! closing edges `v[i] → v[i+1 mod n]` are used.

use anyhow::{Context, Result};
use planimetry::{closing_edges, Circle, Ellipse, Point, Rectangle, Segment, Shape, Triangle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

type Xy = [f64; 2];

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Triangle {
        vertices: Vec<Xy>,
        #[serde(default)]
        edges: Option<Vec<[Xy; 2]>>,
    },
    Rectangle {
        vertices: Vec<Xy>,
        #[serde(default)]
        edges: Option<Vec<[Xy; 2]>>,
    },
    Ellipse {
        semi_major: f64,
        semi_minor: f64,
        center: Xy,
    },
    Circle {
        radius: f64,
        center: Xy,
    },
}

#[inline]
fn point([x, y]: Xy) -> Point {
    Point::new(x, y)
}

fn polygon_parts(vertices: &[Xy], edges: &Option<Vec<[Xy; 2]>>) -> (Vec<Point>, Vec<Segment>) {
    let pts: Vec<Point> = vertices.iter().copied().map(point).collect();
    let segs = match edges {
        Some(es) => es
            .iter()
            .map(|[a, b]| Segment::new(point(*a), point(*b)))
            .collect(),
        None => closing_edges(&pts),
    };
    (pts, segs)
}

impl ShapeSpec {
    pub fn build(&self) -> Result<Shape> {
        let shape: Shape = match self {
            ShapeSpec::Triangle { vertices, edges } => {
                let (pts, segs) = polygon_parts(vertices, edges);
                Triangle::new(pts, segs).context("building triangle")?.into()
            }
            ShapeSpec::Rectangle { vertices, edges } => {
                let (pts, segs) = polygon_parts(vertices, edges);
                Rectangle::new(pts, segs)
                    .context("building rectangle")?
                    .into()
            }
            ShapeSpec::Ellipse {
                semi_major,
                semi_minor,
                center,
            } => Ellipse::new(*semi_major, *semi_minor, point(*center)).into(),
            ShapeSpec::Circle { radius, center } => Circle::new(*radius, point(*center)).into(),
        };
        Ok(shape)
    }
}

/// Read and build the shape described by the JSON file at `path`.
pub fn load_shape<P: AsRef<Path>>(path: P) -> Result<Shape> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spec: ShapeSpec =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    spec.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planimetry::{ContainmentCfg, ShapeKind};
    use std::io::Write;

    fn write_json(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_rectangle_with_closing_edges() {
        let f = write_json(r#"{"kind":"rectangle","vertices":[[8,0],[4,0],[4,4],[8,4]]}"#);
        let shape = load_shape(f.path()).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert!((shape.area() - 16.0).abs() < 1e-12);
        assert_eq!(shape.is_structurally_valid(), Some(true));
        let cfg = ContainmentCfg::default();
        assert_eq!(shape.contains_point(Point::new(6.0, 2.0), &cfg), Some(true));
    }

    #[test]
    fn explicit_edges_drive_arity_check() {
        let f = write_json(
            r#"{"kind":"triangle","vertices":[[0,0],[3,0],[0,4]],
                "edges":[[[0,0],[3,0]],[[3,0],[0,4]],[[0,4],[0,0]],[[0,0],[3,0]]]}"#,
        );
        let shape = load_shape(f.path()).unwrap();
        assert_eq!(shape.is_structurally_valid(), Some(false));
        assert!((shape.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn circle_has_no_containment() {
        let f = write_json(r#"{"kind":"circle","radius":1.0,"center":[0,0]}"#);
        let shape = load_shape(f.path()).unwrap();
        assert!((shape.area() - std::f64::consts::PI).abs() < 1e-12);
        let cfg = ContainmentCfg::default();
        assert_eq!(shape.contains_point(Point::new(0.0, 0.0), &cfg), None);
    }

    #[test]
    fn short_polygons_and_bad_json_are_errors() {
        let f = write_json(r#"{"kind":"rectangle","vertices":[[0,0],[1,0],[1,1]]}"#);
        let err = load_shape(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("need at least 4 vertices"));

        let g = write_json(r#"{"kind":"hexagon"}"#);
        assert!(load_shape(g.path()).is_err());
        assert!(load_shape("/nonexistent/shape.json").is_err());
    }
}
