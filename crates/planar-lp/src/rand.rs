//! Random two-variable LPs for benchmarks and experiments.
//!
//! Model
//! - Non-negative coefficients in `[0, coef_max]`, right-hand sides in
//!   `[1, rhs_max]`, so every all-`<=` draw contains the origin.
//! - Each constraint is `>=` with probability `ge_fraction`, `<=` otherwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Constraint, Direction, ObjectiveFunction, Problem, Relation};

#[derive(Clone, Copy, Debug)]
pub struct ProblemCfg {
    pub constraints: usize,
    pub coef_max: f64,
    pub rhs_max: f64,
    /// Probability of a `>=` row. Clamped to [0, 1].
    pub ge_fraction: f64,
    /// Round coefficients and right-hand sides to integers.
    pub integral: bool,
}

impl Default for ProblemCfg {
    fn default() -> Self {
        Self {
            constraints: 4,
            coef_max: 20.0,
            rhs_max: 600.0,
            ge_fraction: 0.25,
            integral: true,
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
    fn to_std_rng(self) -> StdRng {
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

/// Draw one problem. Same `(cfg, tok)` always gives the same problem.
pub fn draw_problem(cfg: ProblemCfg, tok: ReplayToken) -> Problem {
    let mut rng = tok.to_std_rng();
    let coef_max = cfg.coef_max.max(0.0);
    let rhs_max = cfg.rhs_max.max(1.0);
    let ge = cfg.ge_fraction.clamp(0.0, 1.0);
    let snap = |v: f64| if cfg.integral { v.round() } else { v };

    let coefs = |rng: &mut StdRng| -> Vector2<f64> {
        Vector2::new(
            snap(rng.gen::<f64>() * coef_max),
            snap(rng.gen::<f64>() * coef_max),
        )
    };

    let c = coefs(&mut rng);
    let direction = if rng.gen_bool(0.5) {
        Direction::Maximize
    } else {
        Direction::Minimize
    };
    let objective = ObjectiveFunction::new(c.x, c.y, direction);

    let constraints = (0..cfg.constraints)
        .map(|_| {
            let a = coefs(&mut rng);
            let relation = if rng.gen_bool(ge) {
                Relation::Ge
            } else {
                Relation::Le
            };
            let b = snap(rng.gen_range(1.0..=rhs_max));
            Constraint::new(a.x, a.y, relation, b)
        })
        .collect();

    Problem::new(objective, constraints)
}
