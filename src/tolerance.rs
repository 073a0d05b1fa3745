use num_traits::Float;

/// Default absolute tolerance for container equality and pivot selection.
pub const DEFAULT_EPS: f64 = 1e-8;

/// Absolute comparison tolerance.
///
/// Two numbers are close when `|a - b| < eps`. The `PartialEq` impls of
/// [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) use
/// `Tolerance::default()`; pass an explicit value to `approx_eq` or
/// [`Matrix::inv_with`](crate::Matrix::inv_with) for anything else.
///
/// ```
/// use numkit::Tolerance;
///
/// let tol = Tolerance::default();
/// assert!(tol.is_close(0.134345674, 0.134345675));
/// assert!(!tol.is_close(0.13434564, 0.13434565));
///
/// let loose = Tolerance::new(1e-3);
/// assert!(loose.is_close(1.0, 1.0005));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute threshold.
    pub eps: f64,
}

impl Tolerance {
    /// Tolerance with the given absolute threshold.
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// `|a - b| < eps`. NaN is never close to anything.
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        Float::abs(a - b) < self.eps
    }

    /// `|x| < eps`.
    #[inline]
    pub fn is_negligible(&self, x: f64) -> bool {
        Float::abs(x) < self.eps
    }

    /// Pairwise closeness of two slices; slices of different length are never close.
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| self.is_close(x, y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_EPS)
    }
}
