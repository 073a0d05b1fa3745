use alloc::vec::Vec;

use num_traits::Float;

use super::*;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::vector::Vector;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "expected {} ≈ {} (diff = {}, tol = {})",
        a,
        b,
        (a - b).abs(),
        tol
    );
}

fn scalar_filter(q: f64, r: f64) -> KalmanFilter {
    let one = Matrix::eye(1);
    KalmanFilter::new(one.clone(), &one * q, one.clone(), &one * r).unwrap()
}

fn constant_velocity(dt: f64) -> KalmanFilter {
    let f = Matrix::from_rows(&[[1.0, dt], [0.0, 1.0]]).unwrap();
    let q = Matrix::eye(2) * 1e-4;
    let h = Matrix::from_rows(&[[1.0, 0.0]]).unwrap();
    let r = Matrix::from_rows(&[[0.05]]).unwrap();
    KalmanFilter::new(f, q, h, r).unwrap()
}

// ── Construction ────────────────────────────────────────────────────

#[test]
fn starts_at_zero_identity() {
    let kf = constant_velocity(0.1);
    assert_eq!(kf.state(), &Vector::zeros(2));
    assert_eq!(kf.covariance(), &Matrix::eye(2));
    assert_eq!(kf.state_dim(), 2);
    assert_eq!(kf.measurement_dim(), 1);
    assert!(kf.control().is_none());
}

#[test]
fn new_rejects_bad_shapes() {
    let f = Matrix::eye(2);
    let h = Matrix::from_rows(&[[1.0, 0.0]]).unwrap();
    let r = Matrix::eye(1);
    assert!(matches!(
        KalmanFilter::new(Matrix::zeros(2, 3), Matrix::eye(2), h.clone(), r.clone()),
        Err(Error::Shape(_))
    ));
    assert!(matches!(
        KalmanFilter::new(f.clone(), Matrix::eye(3), h.clone(), r.clone()),
        Err(Error::Shape(_))
    ));
    assert!(matches!(
        KalmanFilter::new(f.clone(), Matrix::eye(2), Matrix::eye(3), r.clone()),
        Err(Error::Shape(_))
    ));
    assert!(matches!(
        KalmanFilter::new(f, Matrix::eye(2), h, Matrix::eye(2)),
        Err(Error::Shape(_))
    ));
}

#[test]
fn with_initial_validates() {
    let kf = constant_velocity(0.1)
        .with_initial(Vector::new(&[1.0, 2.0]), Matrix::eye(2) * 4.0)
        .unwrap();
    assert_eq!(kf.state(), &Vector::new(&[1.0, 2.0]));
    assert_eq!(kf.covariance()[(1, 1)], 4.0);

    assert!(constant_velocity(0.1)
        .with_initial(Vector::zeros(3), Matrix::eye(2))
        .is_err());
    assert!(constant_velocity(0.1)
        .with_initial(Vector::zeros(2), Matrix::eye(3))
        .is_err());
}

// ── Predict / update ────────────────────────────────────────────────

#[test]
fn predict_propagates() {
    let dt = 0.1;
    let mut kf = constant_velocity(dt)
        .with_initial(Vector::new(&[0.0, 1.0]), Matrix::eye(2))
        .unwrap();
    kf.predict();
    approx_eq(kf.state()[0], 0.1, 1e-12);
    approx_eq(kf.state()[1], 1.0, 1e-12);
    // F P Fᵀ + Q with P = I
    approx_eq(kf.covariance()[(0, 0)], 1.0 + dt * dt + 1e-4, 1e-12);
    approx_eq(kf.covariance()[(0, 1)], dt, 1e-12);
    approx_eq(kf.covariance()[(1, 1)], 1.0 + 1e-4, 1e-12);
}

#[test]
fn update_reference_values() {
    let mut kf = constant_velocity(0.1)
        .with_initial(Vector::new(&[0.0, 1.0]), Matrix::eye(2))
        .unwrap();
    kf.set_measurement_model(
        Matrix::from_rows(&[[1.0, 0.0]]).unwrap(),
        Matrix::from_rows(&[[0.1]]).unwrap(),
    )
    .unwrap();
    kf.update(&Vector::new(&[0.5])).unwrap();

    // S = 1.1, K = [1/1.1, 0]
    approx_eq(kf.state()[0], 0.5 / 1.1, 1e-12);
    approx_eq(kf.state()[1], 1.0, 1e-12);
    approx_eq(kf.covariance()[(0, 0)], 1.0 - 1.0 / 1.1, 1e-12);
    approx_eq(kf.covariance()[(1, 1)], 1.0, 1e-12);
    approx_eq(kf.output()[0], 0.5 / 1.1, 1e-12);
}

#[test]
fn update_wrong_length_leaves_state() {
    let mut kf = constant_velocity(0.1);
    let before = kf.clone();
    assert!(matches!(kf.update(&Vector::zeros(2)), Err(Error::Shape(_))));
    assert_eq!(kf.state(), before.state());
    assert_eq!(kf.covariance(), before.covariance());
}

#[test]
fn singular_innovation() {
    let zero = Matrix::zeros(1, 1);
    let mut kf = KalmanFilter::new(Matrix::eye(1), zero.clone(), Matrix::eye(1), zero.clone())
        .unwrap()
        .with_initial(Vector::new(&[3.0]), zero)
        .unwrap();
    assert_eq!(kf.update(&Vector::new(&[1.0])), Err(Error::Singular));
    assert_eq!(kf.step(&Vector::new(&[1.0])), Err(Error::Singular));
    assert_eq!(kf.state()[0], 3.0);
}

#[test]
fn control_input() {
    let dt = 0.5;
    let mut kf = constant_velocity(dt)
        .with_control(Matrix::from_rows(&[[0.5 * dt * dt], [dt]]).unwrap())
        .unwrap();
    // acceleration of 2 from rest
    kf.predict_with_input(&Vector::new(&[2.0])).unwrap();
    approx_eq(kf.state()[0], 0.25, 1e-12);
    approx_eq(kf.state()[1], 1.0, 1e-12);

    assert!(kf.predict_with_input(&Vector::new(&[1.0, 1.0])).is_err());
    assert!(constant_velocity(dt)
        .predict_with_input(&Vector::new(&[1.0]))
        .is_err());
    assert!(constant_velocity(dt).with_control(Matrix::zeros(3, 1)).is_err());
}

// ── Convergence ─────────────────────────────────────────────────────

#[test]
fn constant_estimate_converges() {
    let mut kf = scalar_filter(1e-5, 0.1);
    let zs: Vec<Vector> = (0..200)
        .map(|k| Vector::new(&[5.0 + 0.3 * Float::sin(1.7 * k as f64)]))
        .collect();
    let history = kf.process(&zs).unwrap();

    let mut prev = f64::INFINITY;
    for step in &history {
        let tr = step.p.trace();
        assert!(tr <= prev + 1e-15, "trace grew: {} -> {}", prev, tr);
        prev = tr;
    }
    approx_eq(kf.state()[0], 5.0, 0.05);
    approx_eq(history[199].y[0], kf.state()[0], 1e-12);
}

#[test]
fn identity_model_two_states() {
    let f = Matrix::eye(2);
    let q = Matrix::eye(2) * 1e-6;
    let r = Matrix::eye(2) * 0.2;
    let mut kf = KalmanFilter::new(f.clone(), q, f, r).unwrap();
    let zs: Vec<Vector> = (0..300)
        .map(|k| {
            let k = k as f64;
            Vector::new(&[1.0 + 0.2 * Float::sin(0.9 * k), -2.0 + 0.2 * Float::cos(1.3 * k)])
        })
        .collect();

    let mut prev = kf.covariance().trace();
    for z in &zs {
        let step = kf.step(z).unwrap();
        assert!(step.p.trace() <= prev + 1e-15);
        prev = step.p.trace();
    }
    approx_eq(kf.state()[0], 1.0, 0.05);
    approx_eq(kf.state()[1], -2.0, 0.05);
}

#[test]
fn tracks_constant_velocity() {
    let dt = 0.1;
    let mut kf = constant_velocity(dt);
    for k in 1..=50 {
        kf.step(&Vector::new(&[k as f64 * dt])).unwrap();
    }
    approx_eq(kf.state()[0], 5.0, 0.01);
    approx_eq(kf.state()[1], 1.0, 0.01);
}

#[test]
fn process_with_swaps_model() {
    let mut kf = scalar_filter(1e-3, 0.1);
    let zs = alloc::vec![Vector::new(&[1.0]); 6];
    let mut calls = Vec::new();
    let history = kf
        .process_with(&zs, |k, kf| {
            calls.push(k);
            if k == 2 {
                kf.set_transition(Matrix::eye(1) * 0.5).unwrap();
            }
        })
        .unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(calls, alloc::vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(kf.transition()[(0, 0)], 0.5);
    assert!(kf.set_transition(Matrix::eye(2)).is_err());
}

#[test]
fn process_stops_at_first_error() {
    let mut kf = scalar_filter(1e-3, 0.1);
    let zs = alloc::vec![Vector::new(&[1.0]), Vector::new(&[1.0, 2.0])];
    assert!(matches!(kf.process(&zs), Err(Error::Shape(_))));
}

#[test]
fn step_with_input_reports_output() {
    let dt = 1.0;
    let mut kf = constant_velocity(dt)
        .with_control(Matrix::from_rows(&[[0.0], [dt]]).unwrap())
        .unwrap();
    let step = kf
        .step_with_input(&Vector::new(&[0.0]), &Vector::new(&[1.0]))
        .unwrap();
    assert_eq!(step.x, *kf.state());
    assert_eq!(step.y, kf.output());
    assert_eq!(step.p, *kf.covariance());
    assert!(step.x[1] > 0.0);
}

// ── Feedthrough ─────────────────────────────────────────────────────

fn feedthrough_filter() -> KalmanFilter {
    // F = 1, Q = 0, H = 1, R = 1, B = 0, D = 2
    KalmanFilter::new(Matrix::eye(1), Matrix::zeros(1, 1), Matrix::eye(1), Matrix::eye(1))
        .unwrap()
        .with_control(Matrix::zeros(1, 1))
        .unwrap()
        .with_feedthrough(Matrix::from_rows(&[[2.0]]).unwrap())
        .unwrap()
}

#[test]
fn feedthrough_shifts_innovation() {
    let mut kf = feedthrough_filter();
    let step = kf
        .step_with_input(&Vector::new(&[5.0]), &Vector::new(&[1.0]))
        .unwrap();
    // innovation = 5 - 0 - 2·1 = 3, S = 2, K = 0.5
    approx_eq(step.x[0], 1.5, 1e-12);
    approx_eq(step.p[(0, 0)], 0.5, 1e-12);
    // y = H·x + D·u
    approx_eq(step.y[0], 3.5, 1e-12);
    approx_eq(kf.output()[0], 1.5, 1e-12);
    approx_eq(kf.output_with_input(&Vector::new(&[1.0])).unwrap()[0], 3.5, 1e-12);

    // plain step ignores D
    let mut kf = feedthrough_filter();
    let step = kf.step(&Vector::new(&[5.0])).unwrap();
    approx_eq(step.x[0], 2.5, 1e-12);
    approx_eq(step.y[0], 2.5, 1e-12);
}

#[test]
fn feedthrough_without_control() {
    let mut kf = scalar_filter(0.0, 1.0)
        .with_feedthrough(Matrix::from_rows(&[[2.0]]).unwrap())
        .unwrap();
    let step = kf
        .step_with_input(&Vector::new(&[5.0]), &Vector::new(&[1.0]))
        .unwrap();
    approx_eq(step.x[0], 1.5, 1e-12);
    assert!(kf.predict_with_input(&Vector::new(&[1.0])).is_err());
    assert!(scalar_filter(0.0, 1.0)
        .step_with_input(&Vector::new(&[5.0]), &Vector::new(&[1.0]))
        .is_err());
}

#[test]
fn feedthrough_shapes_checked() {
    let mut kf = feedthrough_filter();
    assert!(kf.set_feedthrough(Matrix::zeros(2, 1)).is_err());
    assert!(kf.set_feedthrough(Matrix::zeros(1, 2)).is_err());
    assert!(kf.set_control(Matrix::zeros(1, 2)).is_err());
    assert!(kf
        .step_with_input(&Vector::new(&[5.0]), &Vector::new(&[1.0, 1.0]))
        .is_err());
    assert_eq!(kf.state()[0], 0.0);

    let h2 = Matrix::from_rows(&[[1.0], [1.0]]).unwrap();
    assert!(kf.set_measurement_model(h2.clone(), Matrix::eye(2)).is_err());
    kf.clear_feedthrough();
    assert!(kf.feedthrough().is_none());
    kf.set_measurement_model(h2, Matrix::eye(2)).unwrap();
    assert_eq!(kf.measurement_dim(), 2);
}

#[test]
fn process_with_input_pairs_sequences() {
    let mut kf = feedthrough_filter();
    let zs = alloc::vec![Vector::new(&[5.0]); 3];
    let us = alloc::vec![Vector::new(&[1.0]); 3];
    let mut calls = 0;
    let history = kf.process_with_input(&zs, &us, |_, _| calls += 1).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(calls, 3);
    approx_eq(history[0].y[0], 3.5, 1e-12);
    // estimate approaches z - D·u = 3
    assert!((history[2].x[0] - 3.0).abs() < (history[0].x[0] - 3.0).abs());

    let mut kf = feedthrough_filter();
    assert!(matches!(
        kf.process_with_input(&zs, &us[..2], |_, _| {}),
        Err(Error::Shape(_))
    ));
    assert_eq!(kf.state()[0], 0.0);
}
