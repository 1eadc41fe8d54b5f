use odesolve::prelude::*;

mod common;
use common::{ConstantRhs, Decay, Sho, VanDerPol, max_abs_diff};

#[test]
fn constant_rhs_gives_exact_linear_motion() {
    let c = [1.5, -0.25];
    let x0 = [0.0, 1.0];
    let t = linspace(0.0, 2.0, 40).unwrap();

    for traj in [
        euler(&ConstantRhs, &x0, &t, &c).unwrap(),
        mod_euler(&ConstantRhs, &x0, &t, &c).unwrap(),
        rk4(&ConstantRhs, &x0, &t, &c).unwrap(),
    ] {
        for (ti, xi) in traj.t.iter().zip(&traj.x) {
            let exact = [x0[0] + c[0] * ti, x0[1] + c[1] * ti];
            assert!(max_abs_diff(xi, &exact) < 1e-12);
        }
    }

    let settings = AdaptiveSettings::default();
    let traj = rkf45(&ConstantRhs, &x0, 0.0, 2.0, &c, &settings).unwrap();
    assert_eq!(traj.status, Status::Success);
    for (ti, xi) in traj.t.iter().zip(&traj.x) {
        let exact = [x0[0] + c[0] * ti, x0[1] + c[1] * ti];
        assert!(max_abs_diff(xi, &exact) < 1e-9);
    }
}

#[test]
fn euler_is_first_order_on_the_oscillator() {
    let exact = [1.0_f64.cos(), -(1.0_f64.sin())];
    let errs: Vec<Float> = [100, 200]
        .iter()
        .map(|&n| {
            let t = linspace(0.0, 1.0, n).unwrap();
            let traj = euler(&Sho, &[1.0, 0.0], &t, &[]).unwrap();
            max_abs_diff(traj.last().1, &exact)
        })
        .collect();
    let ratio = errs[0] / errs[1];
    assert!(
        (1.7..2.4).contains(&ratio),
        "halving dt should halve the Euler error (ratio {ratio})"
    );
}

#[test]
fn rk4_is_fourth_order_on_the_oscillator() {
    let exact = [1.0_f64.cos(), -(1.0_f64.sin())];
    let errs: Vec<Float> = [20, 40]
        .iter()
        .map(|&n| {
            let t = linspace(0.0, 1.0, n).unwrap();
            let traj = rk4(&Sho, &[1.0, 0.0], &t, &[]).unwrap();
            max_abs_diff(traj.last().1, &exact)
        })
        .collect();
    let ratio = errs[0] / errs[1];
    assert!(
        (10.0..22.0).contains(&ratio),
        "halving dt should cut the RK4 error ~16x (ratio {ratio})"
    );
}

#[test]
fn rkf45_lands_exactly_on_tf() {
    let tf = 2.0 * std::f64::consts::PI;
    let settings = AdaptiveSettings::builder().tol(1e-8).build();
    let traj = rkf45(&Sho, &[1.0, 0.0], 0.0, tf, &[], &settings).unwrap();

    assert_eq!(traj.status, Status::Success);
    let (t_last, x_last) = traj.last();
    assert!((t_last - tf).abs() < 1e-9);
    // One full period returns to the initial state
    assert!(max_abs_diff(x_last, &[1.0, 0.0]) < 1e-5);
}

#[test]
fn rkf45_rejection_shrinks_the_step_without_advancing_time() {
    let settings = AdaptiveSettings::builder()
        .tol(1e-12)
        .dt_init(0.1)
        .build();
    let traj = rkf45(&Decay, &[1.0], 0.0, 0.5, &[100.0], &settings).unwrap();

    assert_eq!(traj.status, Status::Success);
    assert!(traj.nrejct >= 1, "the 0.1 first attempt must be rejected");
    assert_eq!(traj.naccpt, traj.len() - 1);

    // Time only ever moves forward, and only on accepted steps
    assert!(traj.t.windows(2).all(|w| w[1] > w[0]));
    // The first accepted step must use a shrunk dt, not the initial guess
    assert!(traj.t[1] - traj.t[0] < 0.1);
    assert!((traj.last().0 - 0.5).abs() < 1e-9);
}

#[test]
fn rkf45_reports_the_iteration_cap_with_partial_data() {
    let settings = AdaptiveSettings::builder()
        .tol(1e-8)
        .max_iter(5)
        .build();
    let traj = rkf45(&Sho, &[1.0, 0.0], 0.0, 10.0, &[], &settings).unwrap();

    assert_eq!(traj.status, Status::MaxIterReached);
    assert_eq!(traj.len(), 6); // initial condition plus five accepted steps
    assert!(traj.last().0 < 10.0);
}

#[test]
fn van_der_pol_fixed_and_adaptive_agree() {
    let x0 = [1.0, 1.0];
    let mu = [1.0];

    let t = linspace(0.0, 20.0, 1000).unwrap();
    let fixed = rk4(&VanDerPol, &x0, &t, &mu).unwrap();

    let settings = AdaptiveSettings::builder().tol(1e-8).build();
    let adaptive = rkf45(&VanDerPol, &x0, 0.0, 20.0, &mu, &settings).unwrap();
    assert_eq!(adaptive.status, Status::Success);

    assert!(max_abs_diff(fixed.last().1, adaptive.last().1) < 1e-3);
}

#[test]
fn mod_euler_corrects_at_the_raw_predictor_state() {
    // For dx/dt = x a single step of size dt gives exactly
    // x * (1 + dt + dt^2/2): k1 = dt*x, k2 = dt*(x + k1).
    struct Identity;
    impl Rhs for Identity {
        fn rhs(&self, _t: Float, x: &[Float], _p: &[Float], dxdt: &mut [Float]) {
            dxdt[0] = x[0];
        }
    }

    let traj = mod_euler(&Identity, &[1.0], &[0.0, 0.5], &[]).unwrap();
    assert!((traj.last().1[0] - 1.625).abs() < 1e-15);
}

#[test]
fn fixed_step_methods_validate_their_inputs() {
    let t = linspace(0.0, 1.0, 10).unwrap();

    assert!(matches!(
        euler(&Sho, &[], &t, &[]),
        Err(Error::EmptyState)
    ));
    assert!(matches!(
        euler(&Sho, &[1.0, 0.0], &[0.0], &[]),
        Err(Error::DegenerateGrid)
    ));
    assert!(matches!(
        rk4(&Sho, &[1.0, 0.0], &[0.0, 2.0, 1.0], &[]),
        Err(Error::DegenerateGrid)
    ));
    assert!(matches!(
        mod_euler(&Sho, &[1.0, 0.0], &[], &[]),
        Err(Error::DegenerateGrid)
    ));
}

#[test]
fn rkf45_validates_its_inputs() {
    let settings = AdaptiveSettings::default();
    assert!(matches!(
        rkf45(&Sho, &[], 0.0, 1.0, &[], &settings),
        Err(Error::EmptyState)
    ));
    assert!(matches!(
        rkf45(&Sho, &[1.0, 0.0], 1.0, 1.0, &[], &settings),
        Err(Error::InvalidTimeSpan(..))
    ));

    let bad_tol = AdaptiveSettings::builder().tol(-1.0).build();
    assert!(matches!(
        rkf45(&Sho, &[1.0, 0.0], 0.0, 1.0, &[], &bad_tol),
        Err(Error::InvalidTolerance(..))
    ));

    let bad_step = AdaptiveSettings::builder().dt_init(0.0).build();
    assert!(matches!(
        rkf45(&Sho, &[1.0, 0.0], 0.0, 1.0, &[], &bad_step),
        Err(Error::InvalidStepSize(..))
    ));
}
