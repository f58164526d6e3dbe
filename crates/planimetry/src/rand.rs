//! Seeded random rectangles and query points (replay tokens).
//!
//! Model
//! - A rectangle is drawn as a frame: center in `[-center_max, center_max]²`,
//!   half extents in `[half_extent_min, half_extent_max]`, optional rotation.
//! - Vertices are emitted counterclockwise, so edges 0 and 1 are adjacent and
//!   perpendicular as `Rectangle` assumes.
//! - Query points are drawn in the frame's normalized coordinates `[-1, 1]²`,
//!   which makes "inside" and "outside" known by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Matrix2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitives::Point;
use crate::shapes::Rectangle;

/// Rectangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    pub half_extent_min: f64,
    pub half_extent_max: f64,
    /// Centers are drawn from `[-center_max, center_max]²`.
    pub center_max: f64,
    /// Rotate by a uniform angle in `[0, 2π)`; otherwise axis-aligned.
    pub random_rotation: bool,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            half_extent_min: 0.5,
            half_extent_max: 4.0,
            center_max: 10.0,
            random_rotation: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// RNG stream owned by this token.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn rectangle together with the frame it was built from.
#[derive(Clone, Debug)]
pub struct RectSample {
    pub rect: Rectangle,
    pub center: Vector2<f64>,
    /// Columns are the frame's unit axes.
    pub rotation: Matrix2<f64>,
    pub half_extents: Vector2<f64>,
}

impl RectSample {
    /// Map normalized frame coordinates (`[-1, 1]²` spans the rectangle) to the plane.
    pub fn frame_to_world(&self, u: Vector2<f64>) -> Point {
        let local = u.component_mul(&self.half_extents);
        Point::from(self.center + self.rotation * local)
    }

    /// Point strictly inside, at least `margin` (fraction of each half extent) from the boundary.
    pub fn interior_point<R: Rng>(&self, rng: &mut R, margin: f64) -> Point {
        let m = (1.0 - margin).clamp(0.0, 1.0);
        let u = Vector2::new(
            rng.gen_range(-1.0f64..=1.0) * m,
            rng.gen_range(-1.0f64..=1.0) * m,
        );
        self.frame_to_world(u)
    }

    /// Point outside, beyond one side by at least `gap` (fraction of that half extent).
    pub fn exterior_point<R: Rng>(&self, rng: &mut R, gap: f64) -> Point {
        let gap = gap.max(0.0);
        let beyond = 1.0 + gap + rng.gen::<f64>();
        let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let free = rng.gen_range(-2.0f64..=2.0);
        let u = if rng.gen::<bool>() {
            Vector2::new(sign * beyond, free)
        } else {
            Vector2::new(free, sign * beyond)
        };
        self.frame_to_world(u)
    }
}

/// Draw a rectangle (CCW vertices) from the token's RNG stream.
pub fn draw_rectangle(cfg: RectCfg, tok: ReplayToken) -> RectSample {
    let mut rng = tok.to_std_rng();
    let lo = cfg.half_extent_min.max(1e-9);
    let hi = cfg.half_extent_max.max(lo);
    let half_extents = Vector2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi));
    let c = cfg.center_max.abs();
    let center = Vector2::new(rng.gen_range(-c..=c), rng.gen_range(-c..=c));
    let theta = if cfg.random_rotation {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let (s, co) = theta.sin_cos();
    let rotation = Matrix2::new(co, -s, s, co);
    let corner = |ux: f64, uy: f64| {
        Point::from(center + rotation * Vector2::new(ux, uy).component_mul(&half_extents))
    };
    let rect = Rectangle::from_vertices([
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]);
    RectSample {
        rect,
        center,
        rotation,
        half_extents,
    }
}

/// `n` query points with known labels: even slots interior, odd slots exterior.
pub fn labelled_queries(sample: &RectSample, tok: ReplayToken, n: usize) -> Vec<(Point, bool)> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|k| {
            if k % 2 == 0 {
                (sample.interior_point(&mut rng, 0.05), true)
            } else {
                (sample.exterior_point(&mut rng, 0.1), false)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let tok = ReplayToken::new(7, 3);
        let a = draw_rectangle(RectCfg::default(), tok);
        let b = draw_rectangle(RectCfg::default(), tok);
        assert_eq!(a.rect.vertices(), b.rect.vertices());
        let c = draw_rectangle(RectCfg::default(), ReplayToken::new(7, 4));
        assert_ne!(a.rect.vertices(), c.rect.vertices());
    }

    #[test]
    fn drawn_rectangles_are_geometric_rectangles() {
        for index in 0..32 {
            let s = draw_rectangle(RectCfg::default(), ReplayToken::new(11, index));
            assert!(s.rect.check_geometry().is_ok());
            let expected = 4.0 * s.half_extents.x * s.half_extents.y;
            assert!((s.rect.area() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn axis_aligned_when_rotation_disabled() {
        let cfg = RectCfg {
            random_rotation: false,
            ..RectCfg::default()
        };
        let s = draw_rectangle(cfg, ReplayToken::new(1, 0));
        let v = s.rect.vertices();
        assert!((v[0].y() - v[1].y()).abs() < 1e-12);
        assert!((v[1].x() - v[2].x()).abs() < 1e-12);
    }

    #[test]
    fn labelled_queries_alternate() {
        let s = draw_rectangle(RectCfg::default(), ReplayToken::new(5, 5));
        let q = labelled_queries(&s, ReplayToken::new(5, 6), 10);
        assert_eq!(q.len(), 10);
        assert!(q.iter().step_by(2).all(|(_, inside)| *inside));
        assert!(q.iter().skip(1).step_by(2).all(|(_, inside)| !*inside));
    }
}
