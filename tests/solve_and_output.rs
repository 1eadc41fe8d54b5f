use std::fs;

use odesolve::prelude::*;

mod common;
use common::{Decay, max_abs_diff};

fn decay_problem(name: &str) -> Problem {
    Problem::builder()
        .name(name)
        .x0(vec![1.0])
        .tf(1.0)
        .n(10)
        .tol(1e-9)
        .params(vec![1.0])
        .labels(vec!["t".into(), "x".into()])
        .precision(6)
        .build()
}

#[test]
fn all_four_methods_run_on_the_same_problem() {
    let problem = decay_problem("decay");
    let sol = solve_problem(&Decay, &problem).unwrap();

    // Fixed-step methods share the same grid
    assert_eq!(sol.euler.len(), 11);
    assert_eq!(sol.mod_euler.len(), 11);
    assert_eq!(sol.rk4.len(), 11);
    assert_eq!(sol.euler.t, sol.rk4.t);

    // All trajectories start from the initial condition and end near exp(-1)
    let exact = [(-1.0_f64).exp()];
    for (method, traj) in sol.iter() {
        assert_eq!(traj.x[0], vec![1.0], "{method} lost the initial condition");
        let tol = if method == "Euler" { 0.05 } else { 1e-3 };
        assert!(
            max_abs_diff(traj.last().1, &exact) < tol,
            "{method} final state off"
        );
    }
    assert_eq!(sol.rkf45.status, Status::Success);
}

#[test]
fn csv_files_carry_a_header_and_one_row_per_point() {
    let problem = decay_problem("csv_check");
    let sol = solve_problem(&Decay, &problem).unwrap();

    let dir = std::env::temp_dir().join("odesolve_csv_test");
    fs::create_dir_all(&dir).unwrap();
    sol.write_csv(&problem, &dir).unwrap();

    for (method, traj) in sol.iter() {
        let path = dir.join(format!("csv_check_{method}.csv"));
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t,x"));
        assert_eq!(lines.count(), traj.len());
        fs::remove_file(&path).unwrap();
    }
    fs::remove_dir(&dir).unwrap();
}
