use num_traits::Float;

use crate::error::Error;
use crate::traits::{MatrixMut, MatrixRef};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// Fails with [`Error::Singular`] when a column has no pivot of magnitude
/// at least `eps`.
pub fn lu_in_place<T: Float>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
    eps: T,
) -> Result<bool, Error> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
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
            perm.swap(col, max_row);
            a.swap_rows(col, max_row);
            even = !even;
        }

        let inv_pivot = T::one() / *a.get(col, col);

        for row in (col + 1)..n {
            let l = *a.get(row, col) * inv_pivot;
            *a.get_mut(row, col) = l;
            if l == T::zero() {
                continue;
            }
            for j in (col + 1)..n {
                *a.get_mut(row, j) = *a.get(row, j) - l * *a.get(col, j);
            }
        }
    }

    Ok(even)
}

/// Solve `A·x = b` from the packed factors written by [`lu_in_place`].
///
/// `b` is read in the row order given by `perm`; the solution lands in `x`.
pub fn lu_solve<T: Float>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // L has an implicit unit diagonal
    for i in 0..n {
        let acc = (0..i).fold(b[perm[i]], |acc, j| acc - *lu.get(i, j) * x[j]);
        x[i] = acc;
    }

    for i in (0..n).rev() {
        let acc = ((i + 1)..n).fold(x[i], |acc, j| acc - *lu.get(i, j) * x[j]);
        x[i] = acc / *lu.get(i, i);
    }
}

/// Determinant from a packed LU factorization: signed product of U's diagonal.
pub fn lu_det<T: Float>(lu: &impl MatrixRef<T>, even: bool) -> T {
    let mut det = if even { T::one() } else { -T::one() };
    for i in 0..lu.nrows() {
        det = det * *lu.get(i, i);
    }
    det
}
