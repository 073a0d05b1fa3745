use num_traits::Float;

use crate::error::Error;
use crate::traits::MatrixMut;

/// Invert `a` by Gauss-Jordan elimination on the augmented system `[A | I]`.
///
/// On return `inv` holds `A⁻¹` and `a` has been reduced to the identity.
/// Each column pivots on the remaining row with the largest magnitude; if
/// that magnitude is below `eps` the matrix is treated as singular and
/// [`Error::Singular`] is returned. `inv` is overwritten with the identity
/// before elimination starts, so its initial contents do not matter.
///
/// # Panics
///
/// If `a` is not square or `inv` has a different shape.
///
/// ```
/// use numkit::linalg::gauss_jordan_inverse;
/// use numkit::Matrix;
///
/// let mut a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
/// let mut inv = Matrix::zeros(2, 2);
/// gauss_jordan_inverse(&mut a, &mut inv, 1e-12).unwrap();
/// assert_eq!(inv, Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap());
/// ```
pub fn gauss_jordan_inverse<T: Float>(
    a: &mut impl MatrixMut<T>,
    inv: &mut impl MatrixMut<T>,
    eps: T,
) -> Result<(), Error> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "Gauss-Jordan inversion requires a square matrix");
    assert!(
        inv.nrows() == n && inv.ncols() == n,
        "inverse storage must match the input shape"
    );

    for i in 0..n {
        for j in 0..n {
            *inv.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val.is_nan() || max_val < eps {
            return Err(Error::Singular);
        }

        if max_row != col {
            a.swap_rows(col, max_row);
            inv.swap_rows(col, max_row);
        }

        let inv_pivot = T::one() / *a.get(col, col);
        for j in 0..n {
            *a.get_mut(col, j) = *a.get(col, j) * inv_pivot;
            *inv.get_mut(col, j) = *inv.get(col, j) * inv_pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = *a.get(row, col);
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                *a.get_mut(row, j) = *a.get(row, j) - factor * *a.get(col, j);
                *inv.get_mut(row, j) = *inv.get(row, j) - factor * *inv.get(col, j);
            }
        }
    }

    Ok(())
}
