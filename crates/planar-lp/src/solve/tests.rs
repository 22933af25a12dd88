use super::*;
use crate::model::{Constraint, Direction, ObjectiveFunction, Point, Relation};
use crate::presets::Preset;
use proptest::prelude::*;

fn close(p: Point, x1: f64, x2: f64) -> bool {
    (p.x1 - x1).abs() < 1e-9 && (p.x2 - x2).abs() < 1e-9
}

#[test]
fn startup_optimum_is_the_crossing_vertex() {
    let problem = Preset::Startup.problem();
    let sol = solve(&problem, LpCfg::default());
    assert_eq!(sol.problem.constraints.len(), 4);
    assert_eq!(sol.intersection_points.len(), 6);
    let expected = [(15.0, 20.0), (30.0, 0.0), (0.0, 30.0), (0.0, 0.0)];
    assert_eq!(sol.feasible_vertices.len(), expected.len());
    for (v, (x1, x2)) in sol.feasible_vertices.iter().zip(expected) {
        assert!(close(*v, x1, x2), "vertex {v} != ({x1}, {x2})");
    }
    // Z over the vertex set: 9750, 7500, 9000, 0.
    let (p, z) = sol.optimum().expect("bounded optimum");
    assert!(close(p, 15.0, 20.0));
    assert!((z - 9750.0).abs() < 1e-6);
    let at_axis = sol
        .vertex_evaluations
        .iter()
        .find(|e| close(e.point, 0.0, 30.0))
        .expect("(0, 30) is a vertex");
    assert!((at_axis.objective_value - 9000.0).abs() < 1e-6);
    assert!(at_axis.objective_value < z);
}

#[test]
fn mix_minimum_is_tight_on_both_constraints() {
    let problem = Preset::Mix.problem();
    let sol = solve(&problem, LpCfg::default());
    assert!(sol.is_feasible);
    assert_eq!(
        sol.feasible_vertices,
        vec![
            Point::new(40.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(0.0, 80.0)
        ]
    );
    let (p, z) = sol.optimum().unwrap();
    assert_eq!(p, Point::new(40.0, 0.0));
    assert_eq!(z, 800.0);
    for c in &problem.constraints {
        assert!((c.lhs(p) - c.b).abs() < 1e-9, "{c} not tight at {p}");
    }
}

#[test]
fn production_preset_solves() {
    // 2x1 + x2 <= 100, x1 + 2x2 <= 80 -> crossing at (40, 20), Z = 22000.
    let sol = solve(&Preset::Production.problem(), LpCfg::default());
    let (p, z) = sol.optimum().unwrap();
    assert!(close(p, 40.0, 20.0));
    assert!((z - 22000.0).abs() < 1e-6);
}

#[test]
fn parallel_pair_contributes_nothing() {
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 1.0),
        vec![Constraint::le(1.0, 1.0, 10.0), Constraint::le(2.0, 2.0, 30.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    // 4 lines -> 6 pairs, one of them parallel.
    assert_eq!(sol.intersection_points.len(), 5);
    let on_both = |p: &Point| {
        (p.x1 + p.x2 - 10.0).abs() < 1e-9 && (2.0 * p.x1 + 2.0 * p.x2 - 30.0).abs() < 1e-9
    };
    assert!(!sol.intersection_points.iter().any(on_both));
}

#[test]
fn empty_constraints_give_origin() {
    let problem = Problem::new(ObjectiveFunction::maximize(3.0, 2.0), vec![]);
    let sol = solve(&problem, LpCfg::default());
    assert_eq!(sol.problem.constraints.len(), 2);
    assert!(sol.is_feasible);
    assert_eq!(sol.feasible_vertices, vec![Point::new(0.0, 0.0)]);
    assert_eq!(sol.optimum(), Some((Point::new(0.0, 0.0), 0.0)));
}

#[test]
fn crossing_outside_first_quadrant_is_filtered() {
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 1.0),
        vec![Constraint::le(1.0, 1.0, -2.0), Constraint::le(1.0, -1.0, -4.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    assert!(sol.intersection_points.contains(&Point::new(-3.0, 1.0)));
    assert!(!sol.feasible_vertices.contains(&Point::new(-3.0, 1.0)));
    assert!(!sol.is_feasible);
    assert!(sol.vertex_evaluations.is_empty());
    assert_eq!(sol.optimal_point, None);
    assert_eq!(sol.optimal_value, None);
}

#[test]
fn equality_constraint_pins_the_segment() {
    // x1 + x2 = 10, maximize x1 + 3x2 -> (0, 10)
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 3.0),
        vec![Constraint::equality(1.0, 1.0, 10.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    assert_eq!(
        sol.feasible_vertices,
        vec![Point::new(0.0, 10.0), Point::new(10.0, 0.0)]
    );
    assert_eq!(sol.optimum(), Some((Point::new(0.0, 10.0), 30.0)));
}

#[test]
fn tie_keeps_first_enumerated_vertex() {
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 1.0),
        vec![Constraint::le(1.0, 1.0, 10.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    // Pairs (0,1) -> (0,10) precede (0,2) -> (10,0); both give Z = 10.
    assert_eq!(sol.optimum(), Some((Point::new(0.0, 10.0), 10.0)));
}

#[test]
fn user_supplied_axis_is_not_duplicated() {
    let problem = Problem::new(
        ObjectiveFunction::minimize(1.0, 1.0),
        vec![Constraint::X1_NON_NEGATIVE, Constraint::ge(1.0, 1.0, 2.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    assert_eq!(sol.problem.constraints.len(), 3);
    assert_eq!(sol.problem.constraints[0], Constraint::X1_NON_NEGATIVE);
    assert_eq!(sol.problem.constraints[2], Constraint::X2_NON_NEGATIVE);
}

#[test]
fn large_coordinates_keep_every_vertex() {
    let problem = Problem::new(
        ObjectiveFunction::maximize(0.9, 1.0),
        vec![
            Constraint::le(1.0, 0.0, 1.2e13),
            Constraint::le(0.0, 1.0, 2.5e13),
            Constraint::le(1.0, 1.0, 3.5e13),
        ],
    );
    let sol = solve(&problem, LpCfg::default());
    assert_eq!(sol.feasible_vertices.len(), 5);
    assert!(sol.feasible_vertices.contains(&Point::new(1e13, 2.5e13)));
    assert!(sol.feasible_vertices.contains(&Point::new(1.2e13, 2.3e13)));
    let (p, z) = sol.optimum().unwrap();
    assert_eq!(p, Point::new(1e13, 2.5e13));
    assert!((z - 3.4e13).abs() < 1.0);
}

#[test]
fn unbounded_direction_still_reports_a_vertex() {
    // Maximizing over x1 + x2 >= 2 is unbounded; the best finite vertex is reported.
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 1.0),
        vec![Constraint::ge(1.0, 1.0, 2.0)],
    );
    let sol = solve(&problem, LpCfg::default());
    assert!(sol.is_feasible);
    assert_eq!(sol.optimal_value, Some(2.0));
}

#[test]
fn configs_do_not_interfere() {
    // Vertices (5, 0) and (5 + 1e-7, 0): merged on a 1e-6 grid, kept on a 1e-9 grid.
    let problem = Problem::new(
        ObjectiveFunction::maximize(1.0, 0.0),
        vec![
            Constraint::le(1.0, 0.0, 5.0),
            Constraint::le(1.0, 0.0, 5.0 + 1e-7),
        ],
    );
    let loose = LpCfg::default().with_eps(1e-6);
    let coarse = solve(&problem, loose);
    let fine = solve(&problem, loose.with_eps_dedup(1e-9));
    assert_eq!(coarse.feasible_vertices.len(), 2);
    assert_eq!(fine.feasible_vertices.len(), 3);
    assert_eq!(coarse, solve(&problem, loose));
}

fn constraint_strategy() -> impl Strategy<Value = Constraint> {
    (-20i32..=20, -20i32..=20, 0usize..3, -50i32..=100).prop_map(|(a1, a2, r, b)| {
        let relation = [Relation::Le, Relation::Ge, Relation::Eq][r];
        Constraint::new(a1 as f64, a2 as f64, relation, b as f64)
    })
}

fn problem_strategy() -> impl Strategy<Value = Problem> {
    (
        -10i32..=10,
        -10i32..=10,
        any::<bool>(),
        prop::collection::vec(constraint_strategy(), 0..8),
    )
        .prop_map(|(c1, c2, max, constraints)| {
            let direction = if max {
                Direction::Maximize
            } else {
                Direction::Minimize
            };
            Problem::new(
                ObjectiveFunction::new(c1 as f64, c2 as f64, direction),
                constraints,
            )
        })
}

proptest! {
    #[test]
    fn prop_solve_is_deterministic(problem in problem_strategy()) {
        let cfg = LpCfg::default();
        prop_assert_eq!(solve(&problem, cfg), solve(&problem, cfg));
    }

    #[test]
    fn prop_vertices_are_feasible(problem in problem_strategy()) {
        let cfg = LpCfg::default();
        let sol = solve(&problem, cfg);
        for v in &sol.feasible_vertices {
            for c in &sol.problem.constraints {
                prop_assert!(c.satisfied_eps(*v, cfg.eps), "{} violates {}", v, c);
            }
        }
    }

    #[test]
    fn prop_augmentation_count(problem in problem_strategy()) {
        let sol = solve(&problem, LpCfg::default());
        let missing = [Constraint::X1_NON_NEGATIVE, Constraint::X2_NON_NEGATIVE]
            .iter()
            .filter(|nn| !problem.constraints.contains(nn))
            .count();
        prop_assert_eq!(sol.problem.constraints.len(), problem.constraints.len() + missing);
        prop_assert_eq!(&sol.problem.constraints[..problem.constraints.len()], &problem.constraints[..]);
    }

    #[test]
    fn prop_dedup_is_idempotent(problem in problem_strategy()) {
        let cfg = LpCfg::default();
        let sol = solve(&problem, cfg);
        prop_assert_eq!(dedup_vertices(&sol.feasible_vertices, cfg.eps_dedup), sol.feasible_vertices);
    }

    #[test]
    fn prop_optimum_is_consistent(problem in problem_strategy()) {
        let sol = solve(&problem, LpCfg::default());
        prop_assert_eq!(sol.is_feasible, !sol.feasible_vertices.is_empty());
        prop_assert_eq!(sol.optimal_point.is_some(), sol.is_feasible);
        prop_assert_eq!(sol.optimal_value.is_some(), sol.is_feasible);
        let values = sol.vertex_evaluations.iter().map(|e| e.objective_value);
        let best = match problem.objective.direction {
            Direction::Maximize => values.fold(f64::NEG_INFINITY, f64::max),
            Direction::Minimize => values.fold(f64::INFINITY, f64::min),
        };
        if let Some((p, z)) = sol.optimum() {
            prop_assert_eq!(z, best);
            prop_assert_eq!(z, problem.objective.eval(p));
        }
        for e in &sol.vertex_evaluations {
            prop_assert!(e.is_feasible);
            prop_assert_eq!(e.objective_value, problem.objective.eval(e.point));
        }
    }
}
