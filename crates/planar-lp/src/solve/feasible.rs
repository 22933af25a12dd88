use crate::cfg::LpCfg;
use crate::model::{Constraint, Point};

/// True iff `p` satisfies every constraint, with each constraint's own
/// relation and slack `cfg.eps`.
#[inline]
pub fn is_feasible_point(p: Point, constraints: &[Constraint], cfg: LpCfg) -> bool {
    constraints.iter().all(|c| c.satisfied_eps(p, cfg.eps))
}
