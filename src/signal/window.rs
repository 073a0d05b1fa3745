use alloc::vec;
use core::f64::consts::PI;

use num_traits::Float;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Spectral window shape.
///
/// ```
/// use numkit::{Vector, Window};
///
/// let w = Window::Hann.coefficients(3).unwrap();
/// assert_eq!(w, Vector::new(&[0.0, 1.0, 0.0]));
///
/// let tapered = Window::Hann.apply(&Vector::new(&[2.0, 2.0, 2.0])).unwrap();
/// assert_eq!(tapered, Vector::new(&[0.0, 2.0, 0.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    Rectangular,
    Hann,
    Hamming,
}

impl Window {
    /// The `n` window coefficients.
    pub fn coefficients(self, n: usize) -> Result<Vector> {
        match self {
            Window::Rectangular => rect(n),
            Window::Hann => hann(n),
            Window::Hamming => hamming(n),
        }
    }

    /// Multiply `x` sample-wise by a window of the same length.
    pub fn apply(self, x: &Vector) -> Result<Vector> {
        let w = self.coefficients(x.len())?;
        Ok(x.iter().zip(w.iter()).map(|(&a, &b)| a * b).collect())
    }
}

fn check_len(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument("window length must be at least 1"));
    }
    Ok(())
}

/// Generalized cosine window `a - (1 - a)·cos(2πn/(N-1))`.
fn raised_cosine(n: usize, a: f64) -> Result<Vector> {
    check_len(n)?;
    if n == 1 {
        return Ok(Vector::from_vec(vec![1.0]));
    }
    let denom = (n - 1) as f64;
    Ok(Vector::from_fn(n, |i| {
        a - (1.0 - a) * Float::cos(2.0 * PI * i as f64 / denom)
    }))
}

/// Rectangular window: `n` ones.
///
/// ```
/// use numkit::rect;
/// assert_eq!(rect(4).unwrap().as_slice(), &[1.0; 4]);
/// assert!(rect(0).is_err());
/// ```
pub fn rect(n: usize) -> Result<Vector> {
    check_len(n)?;
    Ok(Vector::fill(n, 1.0))
}

/// Hann window `0.5 - 0.5·cos(2πn/(N-1))`. Zero at both ends.
pub fn hann(n: usize) -> Result<Vector> {
    raised_cosine(n, 0.5)
}

/// Hamming window `0.54 - 0.46·cos(2πn/(N-1))`.
pub fn hamming(n: usize) -> Result<Vector> {
    raised_cosine(n, 0.54)
}
