//! Discrete Fourier transform, spectral windows, and signal statistics.
//!
//! - [`fft`] / [`ifft`] — radix-2 Cooley-Tukey for power-of-two lengths,
//!   direct DFT otherwise. Output is unnormalized; [`ifft`] applies `1/N`.
//! - [`rect`], [`hann`], [`hamming`] — window coefficient vectors, also
//!   reachable through the [`Window`] enum.
//! - [`rms`], [`mean`].

mod spectrum;
mod stats;
mod window;

pub use spectrum::{fft, fft_in_place, ifft, Spectrum};
pub use stats::{mean, rms};
pub use window::{hamming, hann, rect, Window};
