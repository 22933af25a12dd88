use nalgebra::matrix;

use crate::cfg::LpCfg;
use crate::model::{Constraint, Point, Relation};

/// Boundary line `a·x1 + b·x2 = c` with `>=` rows negated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Equality form of a constraint's boundary. `>=` rows are negated so every
/// row reads as a `<=`/`=` row; the line itself is unchanged.
#[inline]
pub fn canonical_form(c: &Constraint) -> CanonicalLine {
    match c.relation {
        Relation::Ge => CanonicalLine {
            a: -c.a1,
            b: -c.a2,
            c: -c.b,
        },
        Relation::Le | Relation::Eq => CanonicalLine {
            a: c.a1,
            b: c.a2,
            c: c.b,
        },
    }
}

/// Cramer's rule on two boundary lines. `None` if `|det| < eps` (parallel or
/// coincident).
pub fn intersect_pair(l1: CanonicalLine, l2: CanonicalLine, eps: f64) -> Option<Point> {
    let det = matrix![l1.a, l1.b; l2.a, l2.b].determinant();
    if det.abs() < eps {
        return None;
    }
    let x1 = (l1.c * l2.b - l2.c * l1.b) / det;
    let x2 = (l1.a * l2.c - l2.a * l1.c) / det;
    Some(Point::new(x1, x2))
}

/// Intersections of every pair `i < j` of boundary lines, in `(i, j)` order.
/// Duplicates from different pairs are kept.
pub fn pairwise_intersections(constraints: &[Constraint], cfg: LpCfg) -> Vec<Point> {
    let lines: Vec<CanonicalLine> = constraints.iter().map(canonical_form).collect();
    let k = lines.len();
    let mut pts = Vec::with_capacity(k * k.saturating_sub(1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            match intersect_pair(lines[i], lines[j], cfg.eps) {
                Some(p) => pts.push(p),
                None => tracing::trace!(i, j, "parallel boundary lines skipped"),
            }
        }
    }
    pts
}
