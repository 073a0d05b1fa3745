use alloc::vec::Vec;

use crate::error::{Error, Result};

use super::Vector;

/// Resolve one slice bound against `len`, clamping the way sequence slicing does.
fn clamp_bound(bound: isize, len: isize, step: isize) -> isize {
    if bound < 0 {
        let b = bound + len;
        if b < 0 {
            if step < 0 {
                -1
            } else {
                0
            }
        } else {
            b
        }
    } else if bound >= len {
        if step < 0 {
            len - 1
        } else {
            len
        }
    } else {
        bound
    }
}

impl Vector {
    /// Copy out a strided sub-vector.
    ///
    /// Bounds follow sequence-slice rules: `None` means "from the end the
    /// step walks away from", negative bounds count from the back,
    /// out-of-range bounds are clamped, `stop` is exclusive and a negative
    /// `step` walks backwards. `step` defaults to 1; a zero step is an
    /// [`Error::InvalidArgument`].
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::new(&[0, 1, 2, -4, 6, 7, 8, 9]);
    /// assert_eq!(v.slice(Some(2), Some(5), None).unwrap(), Vector::new(&[2.0, -4.0, 6.0]));
    /// assert_eq!(v.slice(None, None, Some(-3)).unwrap(), Vector::new(&[9, 6, 1]));
    /// assert_eq!(v.slice(Some(-2), None, None).unwrap(), Vector::new(&[8, 9]));
    /// ```
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Vector> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(Error::InvalidArgument("slice step cannot be zero"));
        }
        let len = self.len() as isize;

        let (default_start, default_stop) = if step > 0 { (0, len) } else { (len - 1, -1) };
        let start = start.map_or(default_start, |b| clamp_bound(b, len, step));
        let stop = stop.map_or(default_stop, |b| clamp_bound(b, len, step));

        let mut out = Vec::new();
        let mut i = start;
        if step > 0 {
            while i < stop {
                out.push(self.as_slice()[i as usize]);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        } else {
            while i > stop {
                out.push(self.as_slice()[i as usize]);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
        Ok(Vector::from_vec(out))
    }

    /// Copy of the contiguous elements `start..stop`, clamped to the vector.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::new(&[1, 2, 3, 4]);
    /// assert_eq!(v.segment(1, 3), Vector::new(&[2, 3]));
    /// assert_eq!(v.segment(3, 10), Vector::new(&[4]));
    /// assert!(v.segment(3, 1).is_empty());
    /// ```
    pub fn segment(&self, start: usize, stop: usize) -> Vector {
        let stop = stop.min(self.len());
        let start = start.min(stop);
        Vector::from(&self.as_slice()[start..stop])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v8() -> Vector {
        Vector::new(&[0, 1, 2, -4, 6, 7, 8, 9])
    }

    #[test]
    fn contiguous() {
        let s = v8().slice(Some(2), Some(5), None).unwrap();
        assert_eq!(s, Vector::new(&[2.0, -4.0, 6.0]));
    }

    #[test]
    fn full_copy() {
        assert_eq!(v8().slice(None, None, None).unwrap(), v8());
    }

    #[test]
    fn strided() {
        let s = v8().slice(Some(1), None, Some(3)).unwrap();
        assert_eq!(s, Vector::new(&[1, 6, 9]));
    }

    #[test]
    fn reversed() {
        let s = v8().slice(None, None, Some(-1)).unwrap();
        assert_eq!(s, Vector::new(&[9, 8, 7, 6, -4, 2, 1, 0]));
        let s = v8().slice(Some(5), Some(1), Some(-2)).unwrap();
        assert_eq!(s, Vector::new(&[7, -4]));
    }

    #[test]
    fn negative_bounds() {
        let s = v8().slice(Some(-3), Some(-1), None).unwrap();
        assert_eq!(s, Vector::new(&[7, 8]));
    }

    #[test]
    fn clamped_bounds() {
        let s = v8().slice(Some(-100), Some(100), None).unwrap();
        assert_eq!(s, v8());
        let s = v8().slice(Some(100), Some(-100), Some(-1)).unwrap();
        assert_eq!(s.len(), 8);
        assert_eq!(s[0], 9.0);
    }

    #[test]
    fn empty_when_bounds_cross() {
        let s = v8().slice(Some(5), Some(2), None).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn huge_step_takes_first() {
        let v = Vector::new(&[0, 1, 2, 3]);
        assert_eq!(v.slice(Some(1), None, Some(isize::MAX)).unwrap(), Vector::new(&[1]));
        assert_eq!(v.slice(Some(2), None, Some(isize::MIN)).unwrap(), Vector::new(&[2]));
        assert_eq!(v.slice(None, None, Some(isize::MIN)).unwrap(), Vector::new(&[3]));
    }

    #[test]
    fn zero_step_rejected() {
        assert!(matches!(
            v8().slice(None, None, Some(0)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn slice_is_a_copy() {
        let v = v8();
        let mut s = v.slice(Some(0), Some(2), None).unwrap();
        s[0] = 100.0;
        assert_eq!(v[0], 0.0);
    }
}
