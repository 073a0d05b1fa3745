//! # numkit
//!
//! Small pure-Rust numerics library: runtime-sized `f64` vectors and
//! matrices, Gauss-Jordan inversion, a discrete Fourier transform, spectral
//! windows, and a linear Kalman filter. `no_std` compatible with `alloc`.
//!
//! ## Quick start
//!
//! ```
//! use numkit::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
//! let a_inv = a.inv().unwrap();
//! assert_eq!(&a * &a_inv, Matrix::eye(2));
//!
//! let v = Vector::new(&[1, 2, 3]);
//! assert_eq!(&v * 2, Vector::new(&[2, 4, 6]));
//! assert_eq!(Vector::new(&[3]) * &v, Vector::new(&[3, 6, 9]));
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vector`]: heap `Vec<f64>` storage, element-wise and
//!   broadcast arithmetic, Python-style slicing, and the [`vrange`]
//!   generator.
//!
//! - [`matrix`] — [`Matrix`]: row-major `Vec<f64>` storage. `m[i]` is a
//!   mutable row view, `m[(i, j)]` an element. Arithmetic, products,
//!   transpose, `inv()`, `det()`, `solve()`.
//!
//! - [`linalg`] — Gauss-Jordan inversion and LU decomposition as in-place
//!   free functions over any [`MatrixMut`], generic over
//!   [`num_traits::Float`].
//!
//! - [`signal`] — [`fft`] (radix-2 or direct DFT), [`Window`] functions
//!   ([`rect`], [`hann`], [`hamming`]), [`rms`] and [`mean`].
//!
//! - [`estimate`] — [`KalmanFilter`] predict/update cycle with
//!   shape-validated model matrices.
//!
//! ## Equality
//!
//! `==` on vectors and matrices is tolerant: elements compare equal when
//! they differ by less than [`DEFAULT_EPS`] (`1e-8`). Use `approx_eq` with a
//! [`Tolerance`] for anything else.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` impls, hardware float routines |
//! | `libm`  | baseline | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod tolerance;

pub mod estimate;
pub mod linalg;
pub mod matrix;
pub mod signal;
pub mod traits;
pub mod vector;

pub use error::{Error, Result, ShapeError};
pub use estimate::{KalmanFilter, KalmanStep};
pub use matrix::Matrix;
pub use signal::{fft, hamming, hann, mean, rect, rms, Spectrum, Window};
pub use tolerance::{Tolerance, DEFAULT_EPS};
pub use traits::{MatrixMut, MatrixRef};
pub use vector::{vrange, Vector};

pub use num_complex::Complex;
