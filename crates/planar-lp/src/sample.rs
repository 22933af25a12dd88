//! Boundary-line sampling for plots.
//!
//! `sample_line` turns one constraint into `n` evenly spaced `(x, y)` pairs
//! over an x-range. The result is a lazy iterator with no hidden state: clone
//! it (or call `sample_line` again) to restart.
//!
//! Cases, decided with `cfg.eps`:
//! - `a2 != 0`: `y = (b - a1·x) / a2` at each sampled `x`.
//! - `a2 == 0`, `a1 != 0`: vertical line `x = b / a1`; the evenly spaced range
//!   values become the `y` coordinates.
//! - both zero: no line at all; emits `(x, 0)` so callers still get `n` points.

use crate::cfg::LpCfg;
use crate::model::Constraint;

/// `n` evenly spaced values from `min` to `max` inclusive.
///
/// `n == 1` yields `min` only; `n == 0` yields nothing.
#[derive(Clone, Debug)]
pub struct Linspace {
    min: f64,
    max: f64,
    n: usize,
    next: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        Self {
            min,
            max,
            n,
            next: 0,
        }
    }

    #[inline]
    fn at(&self, k: usize) -> f64 {
        if self.n < 2 {
            return self.min;
        }
        self.min + (k as f64 * (self.max - self.min)) / (self.n - 1) as f64
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.n {
            return None;
        }
        let v = self.at(self.next);
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.n - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Linspace {}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LineShape {
    Sloped { a1: f64, a2: f64, b: f64 },
    Vertical { x: f64 },
    Degenerate,
}

/// Lazy `(x, y)` samples along one constraint boundary.
#[derive(Clone, Debug)]
pub struct LineSamples {
    shape: LineShape,
    t: Linspace,
}

impl LineSamples {
    /// The boundary is `x = const`; `y` carries the sampled range.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self.shape, LineShape::Vertical { .. })
    }
    /// Both coefficients vanish; the samples are a placeholder on `y = 0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self.shape, LineShape::Degenerate)
    }
}

impl Iterator for LineSamples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        let t = self.t.next()?;
        Some(match self.shape {
            LineShape::Sloped { a1, a2, b } => (t, (b - a1 * t) / a2),
            LineShape::Vertical { x } => (x, t),
            LineShape::Degenerate => (t, 0.0),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.t.size_hint()
    }
}

impl ExactSizeIterator for LineSamples {}

/// Sample the boundary of `c` at `n` points across `[x_min, x_max]`.
pub fn sample_line(c: &Constraint, x_min: f64, x_max: f64, n: usize, cfg: LpCfg) -> LineSamples {
    let shape = if c.a2.abs() < cfg.eps {
        if c.a1.abs() < cfg.eps {
            LineShape::Degenerate
        } else {
            LineShape::Vertical { x: c.b / c.a1 }
        }
    } else {
        LineShape::Sloped {
            a1: c.a1,
            a2: c.a2,
            b: c.b,
        }
    };
    LineSamples {
        shape,
        t: Linspace::new(x_min, x_max, n),
    }
}
