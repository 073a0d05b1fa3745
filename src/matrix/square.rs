use alloc::vec;

use crate::error::{Error, Result, ShapeError};
use crate::linalg::{gauss_jordan_inverse, lu_det, lu_in_place, lu_solve};
use crate::tolerance::Tolerance;
use crate::vector::Vector;

use super::Matrix;

impl Matrix {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> f64 {
        (0..self.nrows.min(self.ncols)).map(|i| self[(i, i)]).sum()
    }

    /// Extract the main diagonal as a [`Vector`].
    pub fn diag(&self) -> Vector {
        (0..self.nrows.min(self.ncols)).map(|i| self[(i, i)]).collect()
    }

    fn check_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(ShapeError::new(op, (self.nrows, self.nrows), self.shape()).into());
        }
        Ok(())
    }

    /// Inverse by Gauss-Jordan elimination with the default tolerance.
    ///
    /// `self` is left untouched.
    ///
    /// ```
    /// use numkit::{Error, Matrix};
    ///
    /// let a = Matrix::from_rows(&[[0.2, 0.4, 0.2], [-0.2, 0.2, 0.0], [0.2, 0.2, -0.2]]).unwrap();
    /// let expected = Matrix::from_rows(&[[1, -3, 1], [1, 2, 1], [2, -1, -3]]).unwrap();
    /// assert_eq!(a.inv().unwrap(), expected);
    ///
    /// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    /// assert_eq!(singular.inv(), Err(Error::Singular));
    /// ```
    pub fn inv(&self) -> Result<Matrix> {
        self.inv_with(Tolerance::default())
    }

    /// Inverse, treating any pivot with magnitude below `tol.eps` as zero.
    pub fn inv_with(&self, tol: Tolerance) -> Result<Matrix> {
        self.check_square("inv")?;
        let mut work = self.clone();
        let mut inv = Matrix::zeros(self.nrows, self.ncols);
        gauss_jordan_inverse(&mut work, &mut inv, tol.eps)?;
        Ok(inv)
    }

    /// Determinant via LU decomposition. A singular matrix yields `0.0`.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows(&[[3.0, 8.0], [4.0, 6.0]]).unwrap();
    /// assert!((m.det().unwrap() - (-14.0)).abs() < 1e-12);
    /// assert_eq!(Matrix::from_rows(&[[1, 2], [2, 4]]).unwrap().det().unwrap(), 0.0);
    /// ```
    pub fn det(&self) -> Result<f64> {
        self.check_square("det")?;
        let mut lu = self.clone();
        let mut perm = vec![0usize; self.nrows];
        match lu_in_place(&mut lu, &mut perm, Tolerance::default().eps) {
            Ok(even) => Ok(lu_det(&lu, even)),
            Err(Error::Singular) => Ok(0.0),
            Err(e) => Err(e),
        }
    }

    /// Solve `A x = b` via LU decomposition with partial pivoting.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let a = Matrix::from_rows(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]).unwrap();
    /// let x = a.solve(&Vector::new(&[8.0, -11.0, -3.0])).unwrap();
    /// assert_eq!(x, Vector::new(&[2.0, 3.0, -1.0]));
    /// ```
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        self.check_square("solve")?;
        if b.len() != self.nrows {
            return Err(ShapeError::new("solve", (self.nrows, 1), (b.len(), 1)).into());
        }
        let mut lu = self.clone();
        let mut perm = vec![0usize; self.nrows];
        lu_in_place(&mut lu, &mut perm, Tolerance::default().eps)?;
        let mut x = Vector::zeros(self.nrows);
        lu_solve(&lu, &perm, b.as_slice(), x.as_mut_slice());
        Ok(x)
    }
}
