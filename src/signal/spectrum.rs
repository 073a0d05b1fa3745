use alloc::vec::Vec;
use core::f64::consts::PI;
use core::ops::Index;

use num_complex::Complex;
use num_traits::Float;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Complex output of [`fft`], one bin per input sample.
///
/// Bins are unnormalized: a constant input of value `c` and length `N`
/// puts `N·c` in bin 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Wrap precomputed bins.
    pub fn from_vec(bins: Vec<Complex<f64>>) -> Self {
        Self { bins }
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.bins
    }

    pub fn into_vec(self) -> Vec<Complex<f64>> {
        self.bins
    }

    /// The first `N/2` bins. For real input the rest mirror these as conjugates.
    pub fn one_sided(&self) -> &[Complex<f64>] {
        &self.bins[..self.bins.len() / 2]
    }

    /// `|X[k]|` for every bin.
    pub fn magnitudes(&self) -> Vector {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Complex<f64>> {
        self.bins.iter()
    }
}

impl Index<usize> for Spectrum {
    type Output = Complex<f64>;

    #[inline]
    fn index(&self, k: usize) -> &Complex<f64> {
        &self.bins[k]
    }
}

impl<'a> IntoIterator for &'a Spectrum {
    type Item = &'a Complex<f64>;
    type IntoIter = core::slice::Iter<'a, Complex<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

/// Forward discrete Fourier transform of a real signal.
///
/// `X[k] = Σ x[n]·e^{-2πikn/N}`, unnormalized. Power-of-two lengths run the
/// radix-2 kernel, every other non-zero length the direct `O(N²)` sum.
///
/// ```
/// use numkit::{fft, Vector};
///
/// let x = Vector::new(&[1.0, 0.0, -1.0, 0.0]);
/// let s = fft(&x).unwrap();
/// assert_eq!(s.len(), 4);
/// assert!((s[1].re - 2.0).abs() < 1e-12);
/// assert!(s[0].norm() < 1e-12);
/// ```
pub fn fft(x: &Vector) -> Result<Spectrum> {
    let mut bins: Vec<Complex<f64>> = x.iter().map(|&re| Complex::new(re, 0.0)).collect();
    fft_in_place(&mut bins)?;
    Ok(Spectrum { bins })
}

/// Inverse transform, normalized by `1/N` so that `ifft(fft(x)) == x`.
///
/// ```
/// use numkit::{fft, signal::ifft, Vector};
///
/// let x = Vector::new(&[0.5, 1.5, -2.0]);
/// let back = ifft(&fft(&x).unwrap()).unwrap();
/// for (b, &orig) in back.iter().zip(x.iter()) {
///     assert!((b.re - orig).abs() < 1e-12);
///     assert!(b.im.abs() < 1e-12);
/// }
/// ```
pub fn ifft(spectrum: &Spectrum) -> Result<Vec<Complex<f64>>> {
    let mut data: Vec<Complex<f64>> = spectrum.bins.iter().map(|c| c.conj()).collect();
    fft_in_place(&mut data)?;
    let scale = 1.0 / data.len() as f64;
    for c in data.iter_mut() {
        *c = c.conj() * scale;
    }
    Ok(data)
}

/// Forward transform of complex samples, in place.
///
/// Fails with [`Error::UnsupportedLength`] on an empty buffer.
pub fn fft_in_place(data: &mut [Complex<f64>]) -> Result<()> {
    let n = data.len();
    if n == 0 {
        return Err(Error::UnsupportedLength(0));
    }
    if n.is_power_of_two() {
        radix2(data);
    } else {
        let out = dft(data);
        data.copy_from_slice(&out);
    }
    Ok(())
}

#[inline]
fn twiddle(k: usize, n: usize) -> Complex<f64> {
    let angle = -2.0 * PI * k as f64 / n as f64;
    Complex::new(Float::cos(angle), Float::sin(angle))
}

/// Iterative decimation-in-time Cooley-Tukey. `data.len()` must be a power of two.
fn radix2(data: &mut [Complex<f64>]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    // Bit-reversal permutation
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            data.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let w = twiddle(k, len);
                let u = data[start + k];
                let v = data[start + k + half] * w;
                data[start + k] = u + v;
                data[start + k + half] = u - v;
            }
        }
        len <<= 1;
    }
}

/// Direct evaluation of the DFT sum.
pub(crate) fn dft(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter()
                .enumerate()
                .map(|(j, &xj)| xj * twiddle((k * j) % n, n))
                .sum()
        })
        .collect()
}
