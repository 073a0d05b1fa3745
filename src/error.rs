use core::fmt;

/// Dimension mismatch between two operands.
///
/// `expected` is the shape the operation required, `got` is the shape it
/// received. Vectors report their shape as `(1, len)`.
///
/// ```
/// use numkit::{Error, Vector};
///
/// let a = Vector::new(&[1.0, 2.0]);
/// let b = Vector::new(&[1.0, 2.0, 3.0]);
/// match a.checked_add(&b) {
///     Err(Error::Shape(e)) => {
///         assert_eq!(e.expected, (1, 2));
///         assert_eq!(e.got, (1, 3));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    /// Operation that rejected its operands.
    pub op: &'static str,
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl ShapeError {
    pub(crate) fn new(op: &'static str, expected: (usize, usize), got: (usize, usize)) -> Self {
        Self { op, expected, got }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: dimension mismatch: expected {}x{}, got {}x{}",
            self.op, self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

/// Errors from container arithmetic, linear algebra, transforms and filtering.
///
/// Every fallible operation checks its operands before writing any output,
/// so an `Err` never leaves a container partially updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Operand dimensions disagree.
    Shape(ShapeError),
    /// Vector multiply with lengths that are neither equal nor broadcastable.
    Broadcast {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },
    /// No pivot with magnitude above the tolerance exists.
    Singular,
    /// Transform input length is not supported.
    UnsupportedLength(usize),
    /// An argument is outside its valid domain.
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Shape(e) => write!(f, "{}", e),
            Error::Broadcast { lhs, rhs } => write!(
                f,
                "vectors must be the same length or one of them of length 1 ({} vs {})",
                lhs, rhs
            ),
            Error::Singular => write!(f, "matrix is singular"),
            Error::UnsupportedLength(n) => write!(f, "unsupported transform length {}", n),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl From<ShapeError> for Error {
    fn from(e: ShapeError) -> Self {
        Error::Shape(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
