use alloc::vec::Vec;

use super::Vector;

/// Arithmetic sequence `start, start + step, ...` stopping before `stop`.
///
/// With `stop = None` the single argument is taken as the stop and the
/// sequence starts at 0. `step` defaults to 1.
///
/// Elements are produced by repeated addition and the stop test runs on the
/// accumulated value, so rounding drift decides boundary membership exactly
/// as summing `step` would: `vrange(0.5, Some(1.1), Some(0.1))` ends at
/// `1.0999999999999999`.
///
/// When the accumulator stops moving (adding `step` no longer changes a value
/// of that magnitude), the sequence ends at the last distinct element.
///
/// Returns `None` when the sequence is empty (for example `start >= stop`
/// with a positive step), when `step` is zero, or when any argument is not
/// finite.
///
/// ```
/// use numkit::{vrange, Vector};
///
/// assert_eq!(vrange(10.0, None, None).unwrap(), Vector::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
/// assert_eq!(vrange(5.0, Some(8.0), None).unwrap(), Vector::new(&[5, 6, 7]));
/// assert_eq!(vrange(3.0, Some(0.0), Some(-2.0)).unwrap(), Vector::new(&[3, 1]));
/// assert!(vrange(3.0, Some(0.0), None).is_none());
/// ```
pub fn vrange(start: f64, stop: Option<f64>, step: Option<f64>) -> Option<Vector> {
    let (start, stop) = match stop {
        Some(stop) => (start, stop),
        None => (0.0, start),
    };
    let step = step.unwrap_or(1.0);

    if step == 0.0 || !start.is_finite() || !stop.is_finite() || !step.is_finite() {
        return None;
    }

    let mut data = Vec::new();
    let mut x = start;
    if step > 0.0 {
        while x < stop {
            data.push(x);
            let next = x + step;
            if next == x {
                break;
            }
            x = next;
        }
    } else {
        while x > stop {
            data.push(x);
            let next = x + step;
            if next == x {
                break;
            }
            x = next;
        }
    }

    if data.is_empty() {
        None
    } else {
        Some(Vector::from_vec(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_stop() {
        let v = vrange(10.0, None, None).unwrap();
        assert_eq!(v, Vector::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
    }

    #[test]
    fn start_stop() {
        assert_eq!(vrange(5.0, Some(8.0), None).unwrap(), Vector::new(&[5, 6, 7]));
    }

    #[test]
    fn with_step() {
        assert_eq!(
            vrange(0.0, Some(10.0), Some(3.0)).unwrap(),
            Vector::new(&[0, 3, 6, 9])
        );
    }

    #[test]
    fn negative_step() {
        assert_eq!(
            vrange(3.0, Some(0.0), Some(-2.0)).unwrap(),
            Vector::new(&[3, 1])
        );
    }

    #[test]
    fn empty_is_none() {
        assert!(vrange(3.0, Some(0.0), None).is_none());
        assert!(vrange(0.0, Some(3.0), Some(-1.0)).is_none());
        assert!(vrange(0.0, None, None).is_none());
        assert!(vrange(2.0, Some(2.0), None).is_none());
    }

    #[test]
    fn accumulated_boundary_included() {
        let v = vrange(0.5, Some(1.1), Some(0.1)).unwrap();
        assert_eq!(v.len(), 7);
        assert_eq!(v, Vector::new(&[0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1]));
        assert!(v[6] < 1.1);
    }

    #[test]
    fn zero_step_is_none() {
        assert!(vrange(0.0, Some(1.0), Some(0.0)).is_none());
    }

    #[test]
    fn stalled_accumulator_terminates() {
        // f64 spacing near 1e16 is 2, so adding 1 stops changing the value
        let v = vrange(1e16, Some(1e16 + 10.0), None).unwrap();
        assert!(v.len() < 10);
        assert_eq!(v[0], 1e16);
        let v = vrange(-1e17, Some(-1e17 - 100.0), Some(-1.0)).unwrap();
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn non_finite_is_none() {
        assert!(vrange(0.0, Some(f64::INFINITY), None).is_none());
        assert!(vrange(f64::NAN, None, None).is_none());
    }
}
