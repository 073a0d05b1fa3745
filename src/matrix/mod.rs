mod ops;
mod slice;
mod square;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::ops::{Index, IndexMut};

use num_traits::{AsPrimitive, Float};

use crate::error::{Result, ShapeError};
use crate::tolerance::Tolerance;
use crate::traits::{MatrixMut, MatrixRef};
use crate::vector::Vector;

/// Dynamically-sized heap-allocated matrix of `f64`.
///
/// Row-major `Vec<f64>` storage. `m[i]` is row `i` as a slice backed by the
/// matrix, so `m[i][j] = x` writes straight into the matrix; `m[(i, j)]`
/// addresses a single element. Equality is tolerant, see
/// [`Tolerance`](crate::Tolerance).
///
/// # Examples
///
/// ```
/// use numkit::Matrix;
///
/// let mut a = Matrix::from_rows(&[[0.2, 0.4, 0.2], [-0.2, 0.2, 0.0], [0.2, 0.2, -0.2]]).unwrap();
/// assert_eq!(a.shape(), (3, 3));
/// a[1][2] = 33.0;
/// assert_eq!(a[(1, 2)], 33.0);
///
/// let inv = a.inv().unwrap();
/// assert_eq!(&a * &inv, Matrix::eye(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Build a matrix from a sequence of rows of any primitive numeric type.
    ///
    /// Every row must have the same length, otherwise a shape error naming
    /// the first offending row length is returned. An empty sequence gives
    /// a 0×0 matrix.
    ///
    /// ```
    /// use numkit::{Error, Matrix};
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a[(1, 0)], 3.0);
    ///
    /// let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert!(matches!(ragged, Err(Error::Shape(_))));
    /// ```
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: AsPrimitive<f64>,
        R: AsRef<[T]>,
    {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ShapeError::new("from_rows", (1, ncols), (1, row.len())).into());
            }
            data.extend(row.iter().map(|&x| x.as_()));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Build a matrix from row vectors.
    pub fn from_vectors(rows: &[Vector]) -> Result<Self> {
        Self::from_rows(rows)
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert!(Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_row_slice<T: AsPrimitive<f64>>(
        nrows: usize,
        ncols: usize,
        data: &[T],
    ) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(ShapeError::new("from_row_slice", (nrows, ncols), (1, data.len())).into());
        }
        Ok(Self {
            data: data.iter().map(|&x| x.as_()).collect(),
            nrows,
            ncols,
        })
    }

    /// `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, 0.0)
    }

    /// `nrows x ncols` matrix of ones.
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, 1.0)
    }

    /// Matrix filled with `value`.
    pub fn fill(nrows: usize, ncols: usize, value: f64) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// `n x n` identity matrix.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let id = Matrix::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id.trace(), 3.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Square diagonal matrix with `v` on the diagonal.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let m = Matrix::from_diag(&Vector::new(&[2.0, 3.0]));
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(v: &Vector) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }

    /// `n x 1` matrix holding `v` as a column.
    pub fn column_vector(v: &Vector) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            nrows: v.len(),
            ncols: 1,
        }
    }

    /// `1 x n` matrix holding `v` as a row.
    pub fn row_vector(v: &Vector) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            nrows: 1,
            ncols: v.len(),
        }
    }
}

// ── Shape ───────────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Equality under an explicit tolerance. Different shapes are never equal.
    pub fn approx_eq(&self, other: &Matrix, tol: Tolerance) -> bool {
        self.shape() == other.shape() && tol.all_close(&self.data, &other.data)
    }

    /// Apply `f` to every element, producing a new matrix.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(Float::abs)
    }

    /// Transpose.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl MatrixRef<f64> for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &f64 {
        &self.data[row * self.ncols + col]
    }
}

impl MatrixMut<f64> for Matrix {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.ncols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.ncols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.ncols, "column index {} out of range", col);
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.ncols, "column index {} out of range", col);
        &mut self.data[row * self.ncols + col]
    }
}

impl Index<usize> for Matrix {
    type Output = [f64];

    #[inline]
    fn index(&self, row: usize) -> &[f64] {
        self.row_slice(row)
    }
}

impl IndexMut<usize> for Matrix {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [f64] {
        self.row_slice_mut(row)
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::default())
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Counts bytes written, to size columns before printing.
struct WriteCounting(usize);

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = vec![0; self.ncols];
        for i in 0..self.nrows {
            for (j, w) in widths.iter_mut().enumerate() {
                let mut wc = WriteCounting(0);
                write!(wc, "{}", self[(i, j)])?;
                *w = (*w).max(wc.0);
            }
        }

        for i in 0..self.nrows {
            write!(f, "│")?;
            for (j, &w) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = w)?;
            }
            write!(f, "│")?;
            if i + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
