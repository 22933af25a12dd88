//! Problem and solution records.
//!
//! - `Constraint`: `a1·x1 + a2·x2 <rel> b`.
//! - `ObjectiveFunction`: `c1·x1 + c2·x2` with a direction.
//! - `Solution`: terminal snapshot produced by `solve::solve`.
//!
//! All records are plain values; nothing here holds solver state.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::LpCfg;

/// Optimization direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "max", alias = "maximize")]
    Maximize,
    #[serde(rename = "min", alias = "minimize")]
    Minimize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Maximize => f.write_str("max"),
            Direction::Minimize => f.write_str("min"),
        }
    }
}

/// Constraint relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "<=", alias = "≤")]
    Le,
    #[serde(rename = ">=", alias = "≥")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => f.write_str("<="),
            Relation::Ge => f.write_str(">="),
            Relation::Eq => f.write_str("="),
        }
    }
}

/// A point `(x1, x2)` in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

impl Point {
    #[inline]
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x1, self.x2)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x1, p, self.x2),
            None => write!(f, "({}, {})", self.x1, self.x2),
        }
    }
}

/// Linear constraint `a1·x1 + a2·x2 <relation> b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub a1: f64,
    pub a2: f64,
    pub relation: Relation,
    pub b: f64,
}

impl Constraint {
    #[inline]
    pub fn new(a1: f64, a2: f64, relation: Relation, b: f64) -> Self {
        Self { a1, a2, relation, b }
    }
    #[inline]
    pub fn le(a1: f64, a2: f64, b: f64) -> Self {
        Self::new(a1, a2, Relation::Le, b)
    }
    #[inline]
    pub fn ge(a1: f64, a2: f64, b: f64) -> Self {
        Self::new(a1, a2, Relation::Ge, b)
    }
    #[inline]
    pub fn equality(a1: f64, a2: f64, b: f64) -> Self {
        Self::new(a1, a2, Relation::Eq, b)
    }

    /// `x1 >= 0`.
    pub const X1_NON_NEGATIVE: Constraint = Constraint {
        a1: 1.0,
        a2: 0.0,
        relation: Relation::Ge,
        b: 0.0,
    };
    /// `x2 >= 0`.
    pub const X2_NON_NEGATIVE: Constraint = Constraint {
        a1: 0.0,
        a2: 1.0,
        relation: Relation::Ge,
        b: 0.0,
    };

    /// Exact structural match against `x1 >= 0` or `x2 >= 0`.
    ///
    /// No tolerance: `1.0000001·x1 >= 0` is a user constraint, not an implied one.
    #[inline]
    pub fn is_non_negativity(&self) -> bool {
        *self == Self::X1_NON_NEGATIVE || *self == Self::X2_NON_NEGATIVE
    }

    /// Coefficient vector `(a1, a2)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a1, self.a2)
    }

    /// Left-hand side `a1·x1 + a2·x2`.
    #[inline]
    pub fn lhs(&self, p: Point) -> f64 {
        self.normal().dot(&p.to_vector())
    }

    /// Relation check with slack `eps`.
    #[inline]
    pub fn satisfied_eps(&self, p: Point, eps: f64) -> bool {
        let v = self.lhs(p);
        match self.relation {
            Relation::Le => v <= self.b + eps,
            Relation::Ge => v >= self.b - eps,
            Relation::Eq => (v - self.b).abs() <= eps,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a1.is_finite() && self.a2.is_finite() && self.b.is_finite()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_linear(f, self.a1, self.a2)?;
        write!(f, " {} {}", self.relation, self.b)
    }
}

/// Objective `c1·x1 + c2·x2`, maximized or minimized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveFunction {
    pub c1: f64,
    pub c2: f64,
    pub direction: Direction,
}

impl ObjectiveFunction {
    #[inline]
    pub fn new(c1: f64, c2: f64, direction: Direction) -> Self {
        Self { c1, c2, direction }
    }
    #[inline]
    pub fn maximize(c1: f64, c2: f64) -> Self {
        Self::new(c1, c2, Direction::Maximize)
    }
    #[inline]
    pub fn minimize(c1: f64, c2: f64) -> Self {
        Self::new(c1, c2, Direction::Minimize)
    }
    #[inline]
    pub fn gradient(&self) -> Vector2<f64> {
        Vector2::new(self.c1, self.c2)
    }
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.gradient().dot(&p.to_vector())
    }
    /// Iso-objective line `c1·x1 + c2·x2 = z`, ready for the line sampler.
    #[inline]
    pub fn level_line(&self, z: f64) -> Constraint {
        Constraint::equality(self.c1, self.c2, z)
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.c1.is_finite() && self.c2.is_finite()
    }
}

impl fmt::Display for ObjectiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Z = ", self.direction)?;
        write_linear(f, self.c1, self.c2)
    }
}

fn write_linear(f: &mut fmt::Formatter<'_>, k1: f64, k2: f64) -> fmt::Result {
    if k2.is_sign_negative() {
        write!(f, "{}x1 - {}x2", k1, -k2)
    } else {
        write!(f, "{}x1 + {}x2", k1, k2)
    }
}

/// Objective plus ordered constraints. Order only matters for labeling and
/// for tie-breaking between equally good vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub objective: ObjectiveFunction,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl Problem {
    #[inline]
    pub fn new(objective: ObjectiveFunction, constraints: Vec<Constraint>) -> Self {
        Self {
            objective,
            constraints,
        }
    }

    /// Membership test: every constraint holds at `p` within `cfg.eps`.
    #[inline]
    pub fn contains(&self, p: Point, cfg: LpCfg) -> bool {
        self.constraints.iter().all(|c| c.satisfied_eps(p, cfg.eps))
    }

    /// Constraints other than the implied non-negativity ones.
    pub fn user_constraints(&self) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.iter().filter(|c| !c.is_non_negativity())
    }

    /// True iff every coefficient and right-hand side is finite.
    pub fn is_finite(&self) -> bool {
        self.objective.is_finite() && self.constraints.iter().all(Constraint::is_finite)
    }
}

/// Objective value at a retained vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexEvaluation {
    pub point: Point,
    pub objective_value: f64,
    pub is_feasible: bool,
}

/// Result of `solve::solve`.
///
/// Invariants:
/// - `problem` is the normalized problem (non-negativity appended).
/// - `is_feasible == !feasible_vertices.is_empty()`.
/// - `optimal_point` and `optimal_value` are both `Some` iff `is_feasible`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub problem: Problem,
    pub intersection_points: Vec<Point>,
    pub feasible_vertices: Vec<Point>,
    pub vertex_evaluations: Vec<VertexEvaluation>,
    pub optimal_point: Option<Point>,
    pub optimal_value: Option<f64>,
    pub is_feasible: bool,
}

impl Solution {
    /// Optimal vertex with its objective value, if any.
    #[inline]
    pub fn optimum(&self) -> Option<(Point, f64)> {
        self.optimal_point.zip(self.optimal_value)
    }
}
