use std::collections::HashSet;

use crate::model::Point;

/// Grid cell of `p` at spacing `eps_dedup`, as the bit pattern of the rounded
/// cell index. Adding `0.0` folds `-0.0` into `0.0`.
#[inline]
fn key(p: Point, eps_dedup: f64) -> (u64, u64) {
    let cell = |v: f64| ((v / eps_dedup).round() + 0.0).to_bits();
    (cell(p.x1), cell(p.x2))
}

/// Drop points whose rounded grid cell was already seen. First occurrence
/// wins; order is preserved.
pub fn dedup_vertices(points: &[Point], eps_dedup: f64) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .copied()
        .filter(|&p| seen.insert(key(p, eps_dedup)))
        .collect()
}
