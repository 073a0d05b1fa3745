use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};

use super::Vector;

// ── Checked arithmetic ──────────────────────────────────────────────

impl Vector {
    /// Element-wise sum. Both vectors must have the same length.
    ///
    /// ```
    /// use numkit::Vector;
    /// let a = Vector::new(&[1, 2]);
    /// let b = Vector::new(&[3, 4]);
    /// assert_eq!(a.checked_add(&b).unwrap(), Vector::new(&[4, 6]));
    /// assert!(a.checked_add(&Vector::new(&[1])).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Vector) -> Result<Vector> {
        self.check_same_len("add", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference. Both vectors must have the same length.
    pub fn checked_sub(&self, rhs: &Vector) -> Result<Vector> {
        self.check_same_len("sub", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Element-wise product with single-element broadcasting.
    ///
    /// A length-1 operand on either side scales every element of the other.
    /// Otherwise the lengths must match, else [`Error::Broadcast`].
    ///
    /// ```
    /// use numkit::{Error, Vector};
    /// let v = Vector::new(&[1, 2, 3]);
    /// assert_eq!(Vector::new(&[2]).checked_mul(&v).unwrap(), Vector::new(&[2, 4, 6]));
    /// assert_eq!(v.checked_mul(&v).unwrap(), Vector::new(&[1, 4, 9]));
    /// assert_eq!(
    ///     Vector::new(&[1, 2]).checked_mul(&v),
    ///     Err(Error::Broadcast { lhs: 2, rhs: 3 })
    /// );
    /// ```
    pub fn checked_mul(&self, rhs: &Vector) -> Result<Vector> {
        if self.len() == 1 {
            let k = self.data[0];
            Ok(rhs.map(|x| k * x))
        } else if rhs.len() == 1 {
            let k = rhs.data[0];
            Ok(self.map(|x| x * k))
        } else if self.len() == rhs.len() {
            Ok(self.zip_with(rhs, |a, b| a * b))
        } else {
            Err(Error::Broadcast {
                lhs: self.len(),
                rhs: rhs.len(),
            })
        }
    }

    fn zip_with(&self, rhs: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

#[inline]
#[track_caller]
fn or_panic(r: Result<Vector>) -> Vector {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// ── Vector ∘ Vector ─────────────────────────────────────────────────

macro_rules! impl_vector_binop {
    ($Trait:ident, $method:ident, $checked:ident) => {
        impl $Trait<&Vector> for &Vector {
            type Output = Vector;

            #[track_caller]
            fn $method(self, rhs: &Vector) -> Vector {
                or_panic(self.$checked(rhs))
            }
        }

        impl $Trait<Vector> for Vector {
            type Output = Vector;

            #[track_caller]
            fn $method(self, rhs: Vector) -> Vector {
                or_panic(self.$checked(&rhs))
            }
        }

        impl $Trait<&Vector> for Vector {
            type Output = Vector;

            #[track_caller]
            fn $method(self, rhs: &Vector) -> Vector {
                or_panic(self.$checked(rhs))
            }
        }

        impl $Trait<Vector> for &Vector {
            type Output = Vector;

            #[track_caller]
            fn $method(self, rhs: Vector) -> Vector {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

impl_vector_binop!(Add, add, checked_add);
impl_vector_binop!(Sub, sub, checked_sub);
impl_vector_binop!(Mul, mul, checked_mul);

impl AddAssign<&Vector> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector) {
        if let Err(e) = self.check_same_len("add", rhs) {
            panic!("{}", e);
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl SubAssign<&Vector> for Vector {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Vector) {
        if let Err(e) = self.check_same_len("sub", rhs) {
            panic!("{}", e);
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Vector {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}

// ── Vector ∘ scalar, scalar ∘ Vector ────────────────────────────────

macro_rules! impl_vector_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for &Vector {
                type Output = Vector;
                fn add(self, rhs: $t) -> Vector {
                    let k = rhs as f64;
                    self.map(|x| x + k)
                }
            }

            impl Add<$t> for Vector {
                type Output = Vector;
                fn add(self, rhs: $t) -> Vector {
                    &self + rhs
                }
            }

            impl Add<&Vector> for $t {
                type Output = Vector;
                fn add(self, rhs: &Vector) -> Vector {
                    rhs + self
                }
            }

            impl Add<Vector> for $t {
                type Output = Vector;
                fn add(self, rhs: Vector) -> Vector {
                    &rhs + self
                }
            }

            impl Sub<$t> for &Vector {
                type Output = Vector;
                fn sub(self, rhs: $t) -> Vector {
                    let k = rhs as f64;
                    self.map(|x| x - k)
                }
            }

            impl Sub<$t> for Vector {
                type Output = Vector;
                fn sub(self, rhs: $t) -> Vector {
                    &self - rhs
                }
            }

            // s - v = -(v - s)
            impl Sub<&Vector> for $t {
                type Output = Vector;
                fn sub(self, rhs: &Vector) -> Vector {
                    -(rhs - self)
                }
            }

            impl Sub<Vector> for $t {
                type Output = Vector;
                fn sub(self, rhs: Vector) -> Vector {
                    -(&rhs - self)
                }
            }

            impl Mul<$t> for &Vector {
                type Output = Vector;
                fn mul(self, rhs: $t) -> Vector {
                    let k = rhs as f64;
                    self.map(|x| x * k)
                }
            }

            impl Mul<$t> for Vector {
                type Output = Vector;
                fn mul(self, rhs: $t) -> Vector {
                    &self * rhs
                }
            }

            impl Mul<&Vector> for $t {
                type Output = Vector;
                fn mul(self, rhs: &Vector) -> Vector {
                    rhs * self
                }
            }

            impl Mul<Vector> for $t {
                type Output = Vector;
                fn mul(self, rhs: Vector) -> Vector {
                    &rhs * self
                }
            }

            impl MulAssign<$t> for Vector {
                fn mul_assign(&mut self, rhs: $t) {
                    let k = rhs as f64;
                    for x in self.data.iter_mut() {
                        *x *= k;
                    }
                }
            }
        )*
    };
}

impl_vector_scalar_ops!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
