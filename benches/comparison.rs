use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned test matrices
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize) -> f64 {
    ((i + 1) * (j + 1)) as f64 * 0.1 + if i == j { 10.0 } else { 0.0 }
}

fn numkit_mat(n: usize) -> numkit::Matrix {
    numkit::Matrix::from_fn(n, n, entry)
}

fn nalgebra_mat(n: usize) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(n, n, entry)
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    for n in [4, 16, 64] {
        let mut g = c.benchmark_group(format!("matmul_{n}x{n}"));

        g.bench_function("numkit", |b| {
            let a = numkit_mat(n);
            let m = numkit_mat(n).transpose();
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });

        g.bench_function("nalgebra", |b| {
            let a = nalgebra_mat(n);
            let m = nalgebra_mat(n).transpose();
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });

        g.finish();
    }
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse(c: &mut Criterion) {
    for n in [4, 6, 32] {
        let mut g = c.benchmark_group(format!("inverse_{n}x{n}"));

        g.bench_function("numkit", |b| {
            let a = numkit_mat(n);
            b.iter(|| std::hint::black_box(&a).inv().unwrap())
        });

        g.bench_function("nalgebra", |b| {
            let a = nalgebra_mat(n);
            b.iter(|| std::hint::black_box(&a).clone().try_inverse().unwrap())
        });

        g.finish();
    }
}

// ---------------------------------------------------------------------------
// Determinant / solve
// ---------------------------------------------------------------------------

fn solve(c: &mut Criterion) {
    let n = 16;
    let mut g = c.benchmark_group("solve_16x16");

    g.bench_function("numkit", |b| {
        let a = numkit_mat(n);
        let rhs = numkit::Vector::from_fn(n, |i| i as f64);
        b.iter(|| std::hint::black_box(&a).solve(std::hint::black_box(&rhs)).unwrap())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_mat(n);
        let rhs = nalgebra::DVector::from_fn(n, |i, _| i as f64);
        b.iter(|| std::hint::black_box(&a).clone().lu().solve(std::hint::black_box(&rhs)).unwrap())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// FFT
// ---------------------------------------------------------------------------

fn transform(c: &mut Criterion) {
    let mut g = c.benchmark_group("fft");

    for n in [256, 1024, 1000] {
        let x = numkit::Vector::from_fn(n, |i| (0.1 * i as f64).sin());
        g.bench_function(format!("numkit_{n}"), |b| {
            b.iter(|| numkit::fft(std::hint::black_box(&x)).unwrap())
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Kalman filter cycle
// ---------------------------------------------------------------------------

fn kalman(c: &mut Criterion) {
    let mut g = c.benchmark_group("kalman_step");

    g.bench_function("numkit_cv2", |b| {
        let dt = 0.1;
        let f = numkit::Matrix::from_rows(&[[1.0, dt], [0.0, 1.0]]).unwrap();
        let q = numkit::Matrix::eye(2) * 1e-4;
        let h = numkit::Matrix::from_rows(&[[1.0, 0.0]]).unwrap();
        let r = numkit::Matrix::from_rows(&[[0.05]]).unwrap();
        let mut kf = numkit::KalmanFilter::new(f, q, h, r).unwrap();
        let z = numkit::Vector::new(&[1.0]);
        b.iter(|| kf.step(std::hint::black_box(&z)).unwrap())
    });

    g.finish();
}

criterion_group!(benches, matmul, inverse, solve, transform, kalman);
criterion_main!(benches);
