//! State estimation: linear discrete-time Kalman filter.
//!
//! The filter works on runtime-sized [`Vector`](crate::Vector) /
//! [`Matrix`](crate::Matrix) values. Model matrices are validated when they
//! are supplied; the innovation covariance is inverted by Gauss-Jordan
//! elimination, so a singular `H·P·Hᵀ + R` surfaces as
//! [`Error::Singular`](crate::Error::Singular).
//!
//! # Kalman filter
//!
//! ```
//! use numkit::{KalmanFilter, Matrix, Vector};
//!
//! // Scalar random constant observed in noise
//! let one = Matrix::eye(1);
//! let mut kf = KalmanFilter::new(one.clone(), &one * 1e-5, one.clone(), &one * 0.1).unwrap();
//!
//! let zs: Vec<Vector> = [5.1, 4.9, 5.05, 4.95, 5.0]
//!     .iter()
//!     .map(|&z| Vector::new(&[z]))
//!     .collect();
//! let history = kf.process(&zs).unwrap();
//!
//! assert_eq!(history.len(), 5);
//! assert!((kf.state()[0] - 5.0).abs() < 0.5);
//! assert!(history[4].p[(0, 0)] < history[0].p[(0, 0)]);
//! ```

mod kalman;

pub use kalman::{KalmanFilter, KalmanStep};

#[cfg(test)]
mod tests;
