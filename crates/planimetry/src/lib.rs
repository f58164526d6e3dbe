//! Small 2D geometry engine: points, segments, triangles, rectangles, ellipses.
//!
//! Areas come from closed forms (Heron, length × height, π·a·b). The one
//! non-trivial predicate is rectangle containment, decided by decomposing the
//! rectangle into four triangles around the query point and comparing summed
//! areas under a tolerance (see `shapes::Rectangle::contains_point`).
//!
//! All values are immutable after construction, so every type is `Send + Sync`
//! and queries are pure functions of their inputs.

pub mod cfg;
pub mod error;
pub mod primitives;
pub mod rand;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ContainmentCfg, HeronMode, Tolerance, DEFAULT_AREA_EPS};
pub use error::GeometryError;
pub use primitives::{Point, Segment};
pub use shapes::{closing_edges, Circle, Ellipse, Rectangle, Shape, ShapeKind, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ContainmentCfg, HeronMode, Tolerance, DEFAULT_AREA_EPS};
    pub use crate::error::GeometryError;
    pub use crate::primitives::{Point, Segment};
    pub use crate::rand::{draw_rectangle, ReplayToken, RectCfg};
    pub use crate::shapes::{
        closing_edges, Circle, Ellipse, Rectangle, Shape, ShapeKind, Triangle,
    };
    pub use nalgebra::Vector2 as Vec2;
}
