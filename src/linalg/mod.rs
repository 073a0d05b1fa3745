//! Elimination kernels on any [`MatrixMut`](crate::MatrixMut) storage.
//!
//! The free functions here operate in place and are generic over
//! [`num_traits::Float`]; [`Matrix`](crate::Matrix) wraps them as
//! `inv()`, `det()` and `solve()`.

pub(crate) mod gauss_jordan;
pub(crate) mod lu;

pub use gauss_jordan::gauss_jordan_inverse;
pub use lu::{lu_det, lu_in_place, lu_solve};
