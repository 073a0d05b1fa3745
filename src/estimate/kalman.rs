use alloc::vec::Vec;

use crate::error::{Error, Result, ShapeError};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Post-update snapshot returned by [`KalmanFilter::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct KalmanStep {
    /// State estimate after the measurement update.
    pub x: Vector,
    /// Predicted measurement for the updated state: `H·x`, plus `D·u` when
    /// the cycle was driven by an input and a feedthrough matrix is attached.
    pub y: Vector,
    /// State covariance after the measurement update.
    pub p: Matrix,
}

/// Linear discrete-time Kalman filter with runtime dimensions.
///
/// `N` is the state dimension (rows of `F`), `M` the measurement dimension
/// (rows of `H`), `p` the input dimension (columns of `B` and `D`). Every
/// matrix is shape-checked when it is supplied, so the prediction step
/// itself cannot fail.
///
/// An optional feedthrough `D` (M×p) models inputs that reach the
/// measurement directly: the innovation becomes `z - H·x - D·u` and the
/// reported output `H·x + D·u`.
///
/// ```
/// use numkit::{KalmanFilter, Matrix, Vector};
///
/// // Constant-velocity model: state = [position, velocity]
/// let dt = 0.1;
/// let f = Matrix::from_rows(&[[1.0, dt], [0.0, 1.0]]).unwrap();
/// let q = Matrix::eye(2) * 1e-4;
/// let h = Matrix::from_rows(&[[1.0, 0.0]]).unwrap();
/// let r = Matrix::from_rows(&[[0.05]]).unwrap();
///
/// let mut kf = KalmanFilter::new(f, q, h, r).unwrap();
/// for k in 1..=50 {
///     let z = Vector::new(&[k as f64 * dt]);
///     kf.step(&z).unwrap();
/// }
/// assert!((kf.state()[1] - 1.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct KalmanFilter {
    x: Vector,
    p: Matrix,
    f: Matrix,
    q: Matrix,
    h: Matrix,
    r: Matrix,
    b: Option<Matrix>,
    d: Option<Matrix>,
}

fn check_shape(op: &'static str, m: &Matrix, expected: (usize, usize)) -> Result<()> {
    if m.shape() != expected {
        return Err(ShapeError::new(op, expected, m.shape()).into());
    }
    Ok(())
}

fn check_len(op: &'static str, v: &Vector, expected: usize) -> Result<()> {
    if v.len() != expected {
        return Err(ShapeError::new(op, (expected, 1), (v.len(), 1)).into());
    }
    Ok(())
}

impl KalmanFilter {
    /// Create a filter from transition `F` (N×N), process noise `Q` (N×N),
    /// measurement model `H` (M×N) and measurement noise `R` (M×M).
    ///
    /// Starts at `x = 0`, `P = I`.
    pub fn new(f: Matrix, q: Matrix, h: Matrix, r: Matrix) -> Result<Self> {
        let n = f.nrows();
        check_shape("transition", &f, (n, n))?;
        check_shape("process_noise", &q, (n, n))?;
        let m = h.nrows();
        check_shape("measurement", &h, (m, n))?;
        check_shape("measurement_noise", &r, (m, m))?;
        Ok(Self {
            x: Vector::zeros(n),
            p: Matrix::eye(n),
            f,
            q,
            h,
            r,
            b: None,
            d: None,
        })
    }

    /// Replace the initial state and covariance.
    pub fn with_initial(mut self, x: Vector, p: Matrix) -> Result<Self> {
        self.set_state(x)?;
        self.set_covariance(p)?;
        Ok(self)
    }

    /// Attach an N×p control-input matrix `B`.
    pub fn with_control(mut self, b: Matrix) -> Result<Self> {
        self.set_control(b)?;
        Ok(self)
    }

    /// Attach an M×p feedthrough matrix `D`.
    pub fn with_feedthrough(mut self, d: Matrix) -> Result<Self> {
        self.set_feedthrough(d)?;
        Ok(self)
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current state estimate `x`.
    #[inline]
    pub fn state(&self) -> &Vector {
        &self.x
    }

    /// Current state covariance `P`.
    #[inline]
    pub fn covariance(&self) -> &Matrix {
        &self.p
    }

    /// State transition matrix `F`.
    #[inline]
    pub fn transition(&self) -> &Matrix {
        &self.f
    }

    /// Process noise covariance `Q`.
    #[inline]
    pub fn process_noise(&self) -> &Matrix {
        &self.q
    }

    /// Measurement model `H`.
    #[inline]
    pub fn measurement(&self) -> &Matrix {
        &self.h
    }

    /// Measurement noise covariance `R`.
    #[inline]
    pub fn measurement_noise(&self) -> &Matrix {
        &self.r
    }

    /// Control-input matrix `B`, if attached.
    #[inline]
    pub fn control(&self) -> Option<&Matrix> {
        self.b.as_ref()
    }

    /// Feedthrough matrix `D`, if attached.
    #[inline]
    pub fn feedthrough(&self) -> Option<&Matrix> {
        self.d.as_ref()
    }

    /// State dimension `N`.
    #[inline]
    pub fn state_dim(&self) -> usize {
        self.f.nrows()
    }

    /// Measurement dimension `M`.
    #[inline]
    pub fn measurement_dim(&self) -> usize {
        self.h.nrows()
    }

    /// Predicted measurement `H·x` for the current state.
    pub fn output(&self) -> Vector {
        &self.h * &self.x
    }

    /// Predicted measurement `H·x + D·u` for the current state.
    ///
    /// Without a feedthrough matrix this is [`output`](Self::output).
    pub fn output_with_input(&self, u: &Vector) -> Result<Vector> {
        self.observe(&self.x, Some(u))
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Replace the state estimate. The length must stay `N`.
    pub fn set_state(&mut self, x: Vector) -> Result<()> {
        check_len("set_state", &x, self.state_dim())?;
        self.x = x;
        Ok(())
    }

    /// Replace the state covariance with another N×N matrix.
    pub fn set_covariance(&mut self, p: Matrix) -> Result<()> {
        let n = self.state_dim();
        check_shape("set_covariance", &p, (n, n))?;
        self.p = p;
        Ok(())
    }

    /// Replace `F`. The state dimension cannot change.
    pub fn set_transition(&mut self, f: Matrix) -> Result<()> {
        let n = self.state_dim();
        check_shape("set_transition", &f, (n, n))?;
        self.f = f;
        Ok(())
    }

    /// Replace `Q` with another N×N matrix.
    pub fn set_process_noise(&mut self, q: Matrix) -> Result<()> {
        let n = self.state_dim();
        check_shape("set_process_noise", &q, (n, n))?;
        self.q = q;
        Ok(())
    }

    /// Replace `H` and `R` together. The measurement dimension may change
    /// unless a feedthrough matrix pins it; detach that first with
    /// [`clear_feedthrough`](Self::clear_feedthrough).
    pub fn set_measurement_model(&mut self, h: Matrix, r: Matrix) -> Result<()> {
        let m = h.nrows();
        check_shape("set_measurement_model", &h, (m, self.state_dim()))?;
        check_shape("set_measurement_model", &r, (m, m))?;
        if let Some(d) = &self.d {
            check_shape("set_measurement_model", &h, (d.nrows(), self.state_dim()))?;
        }
        self.h = h;
        self.r = r;
        Ok(())
    }

    /// Attach or replace `B` (N×p). `p` must match an attached `D`.
    pub fn set_control(&mut self, b: Matrix) -> Result<()> {
        let p = self.d.as_ref().map_or(b.ncols(), |d| d.ncols());
        check_shape("set_control", &b, (self.state_dim(), p))?;
        self.b = Some(b);
        Ok(())
    }

    /// Attach or replace `D` (M×p). `p` must match an attached `B`.
    pub fn set_feedthrough(&mut self, d: Matrix) -> Result<()> {
        let p = self.b.as_ref().map_or(d.ncols(), |b| b.ncols());
        check_shape("set_feedthrough", &d, (self.measurement_dim(), p))?;
        self.d = Some(d);
        Ok(())
    }

    /// Detach `D`.
    pub fn clear_feedthrough(&mut self) {
        self.d = None;
    }

    // ── Filter cycle ────────────────────────────────────────────────

    fn missing_input_matrix(&self, op: &'static str, u: &Vector) -> Error {
        ShapeError::new(op, (self.state_dim(), u.len()), (0, 0)).into()
    }

    /// `x = F·x (+ B·u)`, `P = F·P·Fᵀ + Q`, without committing.
    ///
    /// An input with neither `B` nor `D` attached is rejected.
    fn propagate(&self, u: Option<&Vector>) -> Result<(Vector, Matrix)> {
        let mut x = &self.f * &self.x;
        if let Some(u) = u {
            match (&self.b, &self.d) {
                (Some(b), _) => {
                    check_len("predict_with_input", u, b.ncols())?;
                    x += &(b * u);
                }
                (None, Some(_)) => {}
                (None, None) => return Err(self.missing_input_matrix("predict_with_input", u)),
            }
        }
        let p = &(&self.f * &self.p) * &self.f.transpose() + &self.q;
        Ok((x, p))
    }

    /// `H·x (+ D·u)`.
    fn observe(&self, x: &Vector, u: Option<&Vector>) -> Result<Vector> {
        let mut y = &self.h * x;
        if let (Some(d), Some(u)) = (&self.d, u) {
            check_len("feedthrough", u, d.ncols())?;
            y += &(d * u);
        }
        Ok(y)
    }

    /// Measurement update of `(x, p)` against `z`, without committing.
    fn correct(
        &self,
        x: &Vector,
        p: &Matrix,
        z: &Vector,
        u: Option<&Vector>,
    ) -> Result<(Vector, Matrix)> {
        check_len("update", z, self.measurement_dim())?;
        let ht = self.h.transpose();
        let y = z - &self.observe(x, u)?; // innovation
        let s = &(&self.h * p) * &ht + &self.r; // innovation covariance
        let s_inv = s.inv()?;
        let k = &(p * &ht) * &s_inv; // N×M
        let x = x + &(&k * &y);
        let i_kh = Matrix::eye(self.state_dim()) - &k * &self.h;
        let p = &i_kh * p;
        Ok((x, p))
    }

    /// Time update: `x = F·x`, `P = F·P·Fᵀ + Q`.
    pub fn predict(&mut self) {
        let x = &self.f * &self.x;
        self.p = &(&self.f * &self.p) * &self.f.transpose() + &self.q;
        self.x = x;
    }

    /// Time update with control input: `x = F·x + B·u`.
    ///
    /// Fails when no control matrix is attached or `u` has the wrong length.
    pub fn predict_with_input(&mut self, u: &Vector) -> Result<()> {
        if self.b.is_none() {
            return Err(self.missing_input_matrix("predict_with_input", u));
        }
        let (x, p) = self.propagate(Some(u))?;
        self.x = x;
        self.p = p;
        Ok(())
    }

    /// Measurement update with `z` (length `M`).
    ///
    /// Fails with a shape error on a wrong-length `z` and with
    /// [`Error::Singular`](crate::Error::Singular) when the innovation
    /// covariance cannot be inverted. The filter is unchanged on failure.
    pub fn update(&mut self, z: &Vector) -> Result<()> {
        let (x, p) = self.correct(&self.x, &self.p, z, None)?;
        self.x = x;
        self.p = p;
        Ok(())
    }

    /// One full cycle: predict, then update with `z`.
    pub fn step(&mut self, z: &Vector) -> Result<KalmanStep> {
        let (x, p) = self.propagate(None)?;
        self.commit(x, p, z, None)
    }

    /// One full cycle with input `u`: `B·u` drives the prediction and `D·u`
    /// is removed from the innovation and added to the reported output.
    ///
    /// Fails when neither `B` nor `D` is attached.
    pub fn step_with_input(&mut self, z: &Vector, u: &Vector) -> Result<KalmanStep> {
        let (x, p) = self.propagate(Some(u))?;
        self.commit(x, p, z, Some(u))
    }

    fn commit(
        &mut self,
        x: Vector,
        p: Matrix,
        z: &Vector,
        u: Option<&Vector>,
    ) -> Result<KalmanStep> {
        let (x, p) = self.correct(&x, &p, z, u)?;
        let y = self.observe(&x, u)?;
        self.x = x;
        self.p = p;
        Ok(KalmanStep {
            x: self.x.clone(),
            y,
            p: self.p.clone(),
        })
    }

    /// Run [`step`](Self::step) over every measurement, collecting the history.
    pub fn process(&mut self, measurements: &[Vector]) -> Result<Vec<KalmanStep>> {
        self.process_with(measurements, |_, _| {})
    }

    /// Like [`process`](Self::process), calling `callback(k, filter)` after
    /// cycle `k` so time-varying models can be swapped in before the next one.
    ///
    /// ```
    /// use numkit::{KalmanFilter, Matrix, Vector};
    ///
    /// let one = || Matrix::eye(1);
    /// let mut kf = KalmanFilter::new(one(), one() * 0.01, one(), one() * 0.1).unwrap();
    /// let zs = vec![Vector::new(&[1.0]); 4];
    /// let history = kf
    ///     .process_with(&zs, |k, kf| {
    ///         if k == 1 {
    ///             kf.set_process_noise(Matrix::eye(1) * 0.5).unwrap();
    ///         }
    ///     })
    ///     .unwrap();
    /// assert_eq!(history.len(), 4);
    /// assert_eq!(kf.process_noise()[(0, 0)], 0.5);
    /// ```
    pub fn process_with(
        &mut self,
        measurements: &[Vector],
        mut callback: impl FnMut(usize, &mut Self),
    ) -> Result<Vec<KalmanStep>> {
        let mut history = Vec::with_capacity(measurements.len());
        for (k, z) in measurements.iter().enumerate() {
            history.push(self.step(z)?);
            callback(k, self);
        }
        Ok(history)
    }

    /// Run [`step_with_input`](Self::step_with_input) over paired
    /// measurement and input sequences, calling `callback(k, filter)` after
    /// each cycle.
    ///
    /// The sequences must have the same length.
    pub fn process_with_input(
        &mut self,
        measurements: &[Vector],
        inputs: &[Vector],
        mut callback: impl FnMut(usize, &mut Self),
    ) -> Result<Vec<KalmanStep>> {
        if measurements.len() != inputs.len() {
            return Err(ShapeError::new(
                "process_with_input",
                (measurements.len(), 1),
                (inputs.len(), 1),
            )
            .into());
        }
        let mut history = Vec::with_capacity(measurements.len());
        for (k, (z, u)) in measurements.iter().zip(inputs).enumerate() {
            history.push(self.step_with_input(z, u)?);
            callback(k, self);
        }
        Ok(history)
    }
}
