mod ops;
mod range;
mod slice;

pub use range::vrange;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::{AsPrimitive, Float};

use crate::error::{Error, Result, ShapeError};
use crate::tolerance::Tolerance;

/// Heap-allocated vector of `f64`.
///
/// Every element is stored as `f64` regardless of the numeric type it was
/// built from. Equality is tolerant: two vectors of equal length are equal
/// when every pair of elements differs by less than
/// [`DEFAULT_EPS`](crate::DEFAULT_EPS).
///
/// # Examples
///
/// ```
/// use numkit::Vector;
///
/// let v = Vector::new(&[1, 2, 3]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v * 5, Vector::new(&[5.0, 10.0, 15.0]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vector {
    data: Vec<f64>,
}

// ── Constructors ────────────────────────────────────────────────────

impl Vector {
    /// Create a vector from a slice of any primitive numeric type.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::new(&[0.2_f32, 0.4]);
    /// assert!((v[0] - 0.2).abs() < 1e-7);
    /// let w = Vector::new(&[1u8, 2, 3]);
    /// assert_eq!(w[2], 3.0);
    /// ```
    pub fn new<T: AsPrimitive<f64>>(values: &[T]) -> Self {
        Self {
            data: values.iter().map(|&x| x.as_()).collect(),
        }
    }

    /// Create a vector from an owned `Vec<f64>`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Vector of length `n` filled with `value`.
    pub fn fill(n: usize, value: f64) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Create a vector by calling `f(i)` for each index.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_fn(4, |i| (i * i) as f64);
    /// assert_eq!(v, Vector::new(&[0, 1, 4, 9]));
    /// ```
    pub fn from_fn(n: usize, f: impl Fn(usize) -> f64) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Vector {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shape of a vector is its length.
    #[inline]
    pub fn shape(&self) -> usize {
        self.data.len()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the vector, returning its storage.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Iterate mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// Element at `i`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    /// Equality under an explicit tolerance.
    ///
    /// ```
    /// use numkit::{Tolerance, Vector};
    /// let a = Vector::new(&[1.0, 2.0]);
    /// let b = Vector::new(&[1.001, 2.0]);
    /// assert!(a != b);
    /// assert!(a.approx_eq(&b, Tolerance::new(1e-2)));
    /// ```
    pub fn approx_eq(&self, other: &Vector, tol: Tolerance) -> bool {
        tol.all_close(&self.data, &other.data)
    }
}

// ── Element-wise helpers ────────────────────────────────────────────

impl Vector {
    /// Apply `f` to every element, producing a new vector.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Element-wise absolute value.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::new(&[0.2, -3333.0, 41.0, -89.444444]).abs();
    /// assert_eq!(v, Vector::new(&[0.2, 3333.0, 41.0, 89.444444]));
    /// ```
    pub fn abs(&self) -> Self {
        self.map(Float::abs)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Arithmetic mean. Fails on an empty vector.
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::InvalidArgument("mean of an empty vector"));
        }
        Ok(self.sum() / self.len() as f64)
    }

    /// Dot product. Fails when the lengths differ.
    ///
    /// ```
    /// use numkit::Vector;
    /// let a = Vector::new(&[1, 2, 3]);
    /// let b = Vector::new(&[4, 5, 6]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Vector) -> Result<f64> {
        self.check_same_len("dot", rhs)?;
        Ok(self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a * b)
            .sum())
    }

    pub(crate) fn check_same_len(&self, op: &'static str, rhs: &Vector) -> Result<()> {
        if self.len() != rhs.len() {
            return Err(ShapeError::new(op, (1, self.len()), (1, rhs.len())).into());
        }
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::default())
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        Tolerance::default().all_close(&self.data, other)
    }
}

impl PartialEq<Vector> for [f64] {
    fn eq(&self, other: &Vector) -> bool {
        Tolerance::default().all_close(self, &other.data)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = alloc::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut f64;
    type IntoIter = core::slice::IterMut<'a, f64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "])")
    }
}
