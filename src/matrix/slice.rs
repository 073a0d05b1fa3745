use crate::error::{Result, ShapeError};
use crate::vector::Vector;

use super::Matrix;

impl Matrix {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// View row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row index {} out of range", i);
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// View row `i` as a mutable slice. Writes land in the matrix.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.nrows, "row index {} out of range", i);
        let start = i * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }

    /// Copy of row `i` as a [`Vector`].
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.row(1), Vector::new(&[3, 4]));
    /// ```
    pub fn row(&self, i: usize) -> Vector {
        Vector::from(self.row_slice(i))
    }

    /// Copy of column `j` as a [`Vector`].
    pub fn column(&self, j: usize) -> Vector {
        assert!(j < self.ncols, "column index {} out of range", j);
        (0..self.nrows).map(|i| self.data[i * self.ncols + j]).collect()
    }

    /// Overwrite row `i` with `v`. Fails, leaving the matrix untouched, when
    /// `v.len() != ncols`.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let mut m = Matrix::zeros(2, 2);
    /// m.set_row(0, &Vector::new(&[7, 8])).unwrap();
    /// assert_eq!(m.row(0), Vector::new(&[7, 8]));
    /// assert!(m.set_row(1, &Vector::new(&[1])).is_err());
    /// ```
    pub fn set_row(&mut self, i: usize, v: &Vector) -> Result<()> {
        if v.len() != self.ncols {
            return Err(ShapeError::new("set_row", (1, self.ncols), (1, v.len())).into());
        }
        self.row_slice_mut(i).copy_from_slice(v.as_slice());
        Ok(())
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows).map(move |i| self.row_slice(i))
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
