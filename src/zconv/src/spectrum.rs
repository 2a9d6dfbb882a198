//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
//! Frequency domain representation of a signal and the per-bin complex
//! multiplication realizing circular convolution.

/// A complex sequence in a split representation. Frequency bin `k` of a
/// transformed signal corresponds to `re[k]` and `im[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub re: Vec<f32>,
    pub im: Vec<f32>,
}

impl Spectrum {
    /// Construct a time-domain complex sequence from a real signal,
    /// zero-padded on the right to `len` elements, with all imaginary
    /// components zero.
    pub fn from_signal(signal: &[f32], len: usize) -> Self {
        assert!(signal.len() <= len);
        let mut re = Vec::with_capacity(len);
        re.extend_from_slice(signal);
        re.resize(len, 0.0);
        Self {
            re,
            im: vec![0.0; len],
        }
    }

    /// The number of bins.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.re.len(), self.im.len());
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
}

/// Multiply two spectra of an identical length per frequency bin.
///
/// By the convolution theorem the product spectrum transforms back to the
/// circular convolution of the two time-domain sequences.
///
/// Both operands being of the same length is a precondition; a mismatch
/// indicates a defect in the caller's sizing logic and aborts via a panic
/// rather than truncating to the shorter operand.
pub fn multiply(a: &Spectrum, b: &Spectrum) -> Spectrum {
    assert_eq!(
        a.len(),
        b.len(),
        "spectrum length mismatch: {} != {}",
        a.len(),
        b.len()
    );

    let len = a.len();
    let mut re = Vec::with_capacity(len);
    let mut im = Vec::with_capacity(len);
    for k in 0..len {
        re.push(a.re[k] * b.re[k] - a.im[k] * b.im[k]);
        im.push(a.re[k] * b.im[k] + a.im[k] * b.re[k]);
    }

    Spectrum { re, im }
}
