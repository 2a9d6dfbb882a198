//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
//! FFT-based linear convolution.
use std::error;
use std::fmt;

use crate::plan;
use crate::spectrum::{self, Spectrum};
use zfft::Env;


/// The error type which is returned from the convolution functions.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum ConvolveError {
    /// One of the input signals has zero length.
    EmptyInput,
}

impl fmt::Display for ConvolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConvolveError::EmptyInput => write!(f, "The input signal is empty."),
        }
    }
}

impl error::Error for ConvolveError {}

/// The transform length used to convolve signals of the given lengths.
///
/// A circular convolution reproduces the linear convolution only when the
/// transform length exceeds `na + nb - 1`, so the inputs are padded to
/// `na + nb` and then up to the next power of two. A sum that is already a
/// power of two is used as is.
pub fn padded_len(na: usize, nb: usize) -> usize {
    let min_len = na.checked_add(nb).unwrap();
    min_len.next_power_of_two()
}

/// Compute the linear convolution of two signals by the frequency-domain
/// method.
///
/// The returned signal has the full transform length `padded_len(a.len(),
/// b.len())`; its first `a.len() + b.len() - 1` samples are the linear
/// convolution and the remainder is numerically zero. Use
/// [`linear_convolve`] to receive the trimmed result instead.
pub fn convolve(a: &[f32], b: &[f32]) -> Result<Vec<f32>, ConvolveError> {
    if a.is_empty() || b.is_empty() {
        return Err(ConvolveError::EmptyInput);
    }

    let n = padded_len(a.len(), b.len());

    let mut spec_a = Spectrum::from_signal(a, n);
    let mut spec_b = Spectrum::from_signal(b, n);
    {
        let mut env = Env::new(plan::plan_for(n, false));
        env.transform(&mut spec_a.re, &mut spec_a.im);
        env.transform(&mut spec_b.re, &mut spec_b.im);
    }

    let mut product = spectrum::multiply(&spec_a, &spec_b);

    let mut env = Env::new(plan::plan_for(n, true));
    env.transform(&mut product.re, &mut product.im);

    // Real inputs leave only a rounding-error residue in the imaginary
    // output, which is discarded
    debug_assert!({
        let peak = product.re.iter().fold(0.0f32, |x, y| x.max(y.abs())) + 1.0;
        product.im.iter().all(|x| x.abs() <= peak * 1.0e-3)
    });

    Ok(product.re)
}

/// Compute the linear convolution of two signals, trimmed to the exact
/// linear-convolution length `a.len() + b.len() - 1`.
pub fn linear_convolve(a: &[f32], b: &[f32]) -> Result<Vec<f32>, ConvolveError> {
    let mut out = convolve(a, b)?;
    out.truncate(a.len() + b.len() - 1);
    Ok(out)
}
