//! zConv
//! =====
//!
//! FFT-based linear convolution of real-valued signals, e.g. for applying a
//! reverb impulse response to an audio clip.
//!
//! Both operands are zero-padded to a shared power-of-two transform length,
//! forward-transformed with [`zfft`], multiplied per frequency bin, and
//! inverse-transformed. The first `a.len() + b.len() - 1` samples of the
//! result are the linear convolution of the operands; see [`convolve`] and
//! [`linear_convolve`].
//!
//! License
//! -------
//!
//! Follows the license of the parent project (Nightingales).
//!

//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//

pub mod conv;
mod plan;
pub mod spectrum;
mod utils;

pub use crate::conv::{convolve, linear_convolve, padded_len, ConvolveError};
pub use crate::spectrum::Spectrum;
