//! Tolerances for area comparisons.
//!
//! - `ContainmentCfg`: the knobs of the rectangle containment decision.
//! - `Tolerance`: absolute (default, `DEFAULT_AREA_EPS`) or area-relative slack.
//! - `HeronMode`: whether Heron's radicand is clamped at zero.

/// Default absolute slack for `|Σ sub-areas − area|`, in squared coordinate units.
///
/// Absolute, not relative: tuned for coordinates of magnitude ~1–10. Very large
/// shapes accumulate more rounding than this, very small ones fit inside it.
pub const DEFAULT_AREA_EPS: f64 = 1e-3;

/// How the area mismatch is compared against the slack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Fixed slack in squared coordinate units.
    Absolute(f64),
    /// Slack as a fraction of the reference area.
    Relative(f64),
}

impl Tolerance {
    /// Slack to use against a shape with area `reference`.
    #[inline]
    pub fn slack(&self, reference: f64) -> f64 {
        match *self {
            Tolerance::Absolute(eps) => eps,
            Tolerance::Relative(frac) => frac * reference.abs(),
        }
    }

    /// `|value − reference| < slack(reference)`.
    #[inline]
    pub fn matches(&self, value: f64, reference: f64) -> bool {
        (value - reference).abs() < self.slack(reference)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_AREA_EPS)
    }
}

/// Treatment of the radicand `s(s−a)(s−b)(s−c)` in Heron's formula.
///
/// Near-collinear triangles can produce a slightly negative radicand. With
/// `Unguarded` its square root is NaN, and a NaN sub-area makes containment
/// report `false`. `Clamped` takes `max(radicand, 0)` first.
///
/// `Triangle::area` is always unguarded; containment clamps unless told otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeronMode {
    #[default]
    Unguarded,
    Clamped,
}

/// Containment decision configuration.
///
/// Defaults to absolute `DEFAULT_AREA_EPS` and clamped Heron sub-areas, so a
/// point on a rotated edge (collinear fan triangle) stays contained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainmentCfg {
    pub tolerance: Tolerance,
    pub heron: HeronMode,
}

impl Default for ContainmentCfg {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            heron: HeronMode::Clamped,
        }
    }
}

impl ContainmentCfg {
    /// Absolute tolerance `eps`, clamped Heron.
    #[inline]
    pub fn absolute(eps: f64) -> Self {
        Self {
            tolerance: Tolerance::Absolute(eps),
            ..Self::default()
        }
    }

    /// Relative tolerance `frac` of the rectangle area, clamped Heron.
    #[inline]
    pub fn relative(frac: f64) -> Self {
        Self {
            tolerance: Tolerance::Relative(frac),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_heron(mut self, heron: HeronMode) -> Self {
        self.heron = heron;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_absolute_milli() {
        let cfg = ContainmentCfg::default();
        assert_eq!(cfg.tolerance, Tolerance::Absolute(1e-3));
        assert_eq!(cfg.heron, HeronMode::Clamped);
        assert_eq!(HeronMode::default(), HeronMode::Unguarded);
    }

    #[test]
    fn relative_slack_scales_with_area() {
        let t = Tolerance::Relative(1e-4);
        assert!((t.slack(1e6) - 100.0).abs() < 1e-9);
        assert!(t.matches(1e6 + 50.0, 1e6));
        assert!(!Tolerance::Absolute(1e-3).matches(1e6 + 50.0, 1e6));
    }

    #[test]
    fn nan_never_matches() {
        assert!(!Tolerance::default().matches(f64::NAN, 16.0));
    }
}
