use num_traits::Float;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Arithmetic mean. Fails on an empty vector.
///
/// ```
/// use numkit::{mean, Vector};
/// assert_eq!(mean(&Vector::new(&[1, 2, 3, 4])).unwrap(), 2.5);
/// ```
pub fn mean(v: &Vector) -> Result<f64> {
    v.mean()
}

/// Root mean square, `sqrt(mean(v²))`. Fails on an empty vector.
///
/// ```
/// use numkit::{rms, Vector};
/// assert_eq!(rms(&Vector::new(&[3.0, -3.0, 3.0, -3.0])).unwrap(), 3.0);
/// ```
pub fn rms(v: &Vector) -> Result<f64> {
    if v.is_empty() {
        return Err(Error::InvalidArgument("rms of an empty vector"));
    }
    let sq: f64 = v.iter().map(|&x| x * x).sum();
    Ok(Float::sqrt(sq / v.len() as f64))
}
