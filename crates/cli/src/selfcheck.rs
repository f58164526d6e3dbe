//! Fixed rectangle scenarios with human-readable pass/fail lines.

use anyhow::Result;
use planimetry::{closing_edges, Point, Rectangle, DEFAULT_AREA_EPS};

/// Result of one numbered scenario.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub number: usize,
    pub passed: bool,
    pub message: &'static str,
}

impl Outcome {
    pub fn line(&self) -> String {
        let verdict = if self.passed { "Passes" } else { "Fails" };
        format!("Test {} {} - {}", self.number, verdict, self.message)
    }
}

/// `observed` is checked against `expected`; the message describes what was observed.
struct Case {
    observed: bool,
    expected: bool,
    if_true: &'static str,
    if_false: &'static str,
}

fn rectangle(vertices: [Point; 4]) -> Result<Rectangle> {
    Ok(Rectangle::new(vertices.to_vec(), closing_edges(&vertices))?)
}

fn area_matches(r: &Rectangle, expected: f64) -> bool {
    (r.area() - expected).abs() < DEFAULT_AREA_EPS
}

/// Run all scenarios in order.
pub fn run() -> Result<Vec<Outcome>> {
    const MATCH: &str = "areas match.";
    const NO_MATCH: &str = "areas don't match.";
    const SHOULD_NOT_MATCH: &str = "areas shouldn't match.";
    const IN: &str = "point detected in rectangle.";
    const OUT: &str = "point not detected in rectangle.";

    let first = rectangle([
        Point::new(8.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(8.0, 4.0),
    ])?;
    let second = first.clone();
    let third = rectangle([
        Point::new(0.0, 2.0),
        Point::new(1.0, 3.0),
        Point::new(2.0, 2.0),
        Point::new(1.0, 1.0),
    ])?;

    let area = |r: &Rectangle, a: f64, expected: bool| Case {
        observed: area_matches(r, a),
        expected,
        if_true: MATCH,
        if_false: if expected { NO_MATCH } else { SHOULD_NOT_MATCH },
    };
    let contains = |r: &Rectangle, x: f64, y: f64, expected: bool| Case {
        observed: r.contains_point(Point::new(x, y)),
        expected,
        if_true: IN,
        if_false: OUT,
    };

    let cases = vec![
        area(&first, 16.0, true),
        area(&second, 16.0, true),
        area(&first, 17.0, false),
        Case {
            observed: first.is_structurally_valid(),
            expected: true,
            if_true: "rectangle has 4 sides.",
            if_false: "rectangle doesn't have 4 sides.",
        },
        contains(&first, 0.0, 0.0, false),
        contains(&first, 6.0, 2.0, true),
        contains(&first, 4.0, 0.0, true),
        contains(&first, 4.1, 0.1, true),
        contains(&first, 3.9, -0.1, false),
        contains(&third, 1.0, 2.0, true),
        contains(&third, 0.0, 0.0, false),
    ];

    Ok(cases
        .into_iter()
        .enumerate()
        .map(|(i, c)| Outcome {
            number: i + 1,
            passed: c.observed == c.expected,
            message: if c.observed { c.if_true } else { c.if_false },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scenarios_pass() {
        let outcomes = run().unwrap();
        assert_eq!(outcomes.len(), 11);
        for o in &outcomes {
            assert!(o.passed, "{}", o.line());
        }
    }

    #[test]
    fn lines_read_like_a_report() {
        let outcomes = run().unwrap();
        assert_eq!(outcomes[0].line(), "Test 1 Passes - areas match.");
        assert_eq!(outcomes[1].line(), "Test 2 Passes - areas match.");
        assert_eq!(outcomes[2].line(), "Test 3 Passes - areas shouldn't match.");
        assert_eq!(
            outcomes[3].line(),
            "Test 4 Passes - rectangle has 4 sides."
        );
        assert_eq!(
            outcomes[8].line(),
            "Test 9 Passes - point not detected in rectangle."
        );
    }
}
