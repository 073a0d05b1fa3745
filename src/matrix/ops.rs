use alloc::vec;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::{Result, ShapeError};
use crate::vector::Vector;

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl Matrix {
    fn check_same_shape(&self, op: &'static str, rhs: &Matrix) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(ShapeError::new(op, self.shape(), rhs.shape()).into());
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise sum of two matrices of equal shape.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap(), Matrix::from_rows(&[[6, 8], [10, 12]]).unwrap());
    /// assert!(a.checked_add(&Matrix::zeros(2, 3)).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape("add", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference of two matrices of equal shape.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape("sub", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product `(R×K)·(K×C) → R×C`.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
    /// assert_eq!(a.checked_mul(&b).unwrap(), Matrix::from_rows(&[[19, 22], [43, 50]]).unwrap());
    /// ```
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.ncols != rhs.nrows {
            return Err(ShapeError::new(
                "mul",
                (self.ncols, rhs.ncols),
                (rhs.nrows, rhs.ncols),
            )
            .into());
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![0.0; m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] += a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Matrix-vector product, treating `v` as a column.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.mul_vector(&Vector::new(&[1, 1])).unwrap(), Vector::new(&[3, 7]));
    /// ```
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if self.ncols != v.len() {
            return Err(ShapeError::new("mul_vector", (self.ncols, 1), (v.len(), 1)).into());
        }
        Ok(self
            .rows()
            .map(|row| row.iter().zip(v.iter()).map(|(&a, &b)| a * b).sum())
            .collect())
    }
}

#[inline]
#[track_caller]
fn or_panic<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// ── Matrix ∘ Matrix ─────────────────────────────────────────────────

macro_rules! impl_matrix_binop {
    ($Trait:ident, $method:ident, $checked:ident) => {
        impl $Trait<&Matrix> for &Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: &Matrix) -> Matrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl $Trait<Matrix> for Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: Matrix) -> Matrix {
                or_panic(self.$checked(&rhs))
            }
        }

        impl $Trait<&Matrix> for Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: &Matrix) -> Matrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl $Trait<Matrix> for &Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: Matrix) -> Matrix {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

impl_matrix_binop!(Add, add, checked_add);
impl_matrix_binop!(Sub, sub, checked_sub);
impl_matrix_binop!(Mul, mul, checked_mul);

impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    #[track_caller]
    fn mul(self, rhs: &Vector) -> Vector {
        or_panic(self.mul_vector(rhs))
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    #[track_caller]
    fn mul(self, rhs: Vector) -> Vector {
        or_panic(self.mul_vector(&rhs))
    }
}

impl AddAssign<&Matrix> for Matrix {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.check_same_shape("add", rhs));
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl SubAssign<&Matrix> for Matrix {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.check_same_shape("sub", rhs));
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

// ── Matrix ∘ scalar, scalar ∘ Matrix ────────────────────────────────

macro_rules! impl_matrix_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for &Matrix {
                type Output = Matrix;
                fn add(self, rhs: $t) -> Matrix {
                    let k = rhs as f64;
                    self.map(|x| x + k)
                }
            }

            impl Add<$t> for Matrix {
                type Output = Matrix;
                fn add(self, rhs: $t) -> Matrix {
                    &self + rhs
                }
            }

            impl Add<&Matrix> for $t {
                type Output = Matrix;
                fn add(self, rhs: &Matrix) -> Matrix {
                    rhs + self
                }
            }

            impl Add<Matrix> for $t {
                type Output = Matrix;
                fn add(self, rhs: Matrix) -> Matrix {
                    &rhs + self
                }
            }

            impl Sub<$t> for &Matrix {
                type Output = Matrix;
                fn sub(self, rhs: $t) -> Matrix {
                    let k = rhs as f64;
                    self.map(|x| x - k)
                }
            }

            impl Sub<$t> for Matrix {
                type Output = Matrix;
                fn sub(self, rhs: $t) -> Matrix {
                    &self - rhs
                }
            }

            // s - A = -(A - s)
            impl Sub<&Matrix> for $t {
                type Output = Matrix;
                fn sub(self, rhs: &Matrix) -> Matrix {
                    -(rhs - self)
                }
            }

            impl Sub<Matrix> for $t {
                type Output = Matrix;
                fn sub(self, rhs: Matrix) -> Matrix {
                    -(&rhs - self)
                }
            }

            impl Mul<$t> for &Matrix {
                type Output = Matrix;
                fn mul(self, rhs: $t) -> Matrix {
                    let k = rhs as f64;
                    self.map(|x| x * k)
                }
            }

            impl Mul<$t> for Matrix {
                type Output = Matrix;
                fn mul(self, rhs: $t) -> Matrix {
                    &self * rhs
                }
            }

            impl Mul<&Matrix> for $t {
                type Output = Matrix;
                fn mul(self, rhs: &Matrix) -> Matrix {
                    rhs * self
                }
            }

            impl Mul<Matrix> for $t {
                type Output = Matrix;
                fn mul(self, rhs: Matrix) -> Matrix {
                    &rhs * self
                }
            }
        )*
    };
}

impl_matrix_scalar_ops!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
