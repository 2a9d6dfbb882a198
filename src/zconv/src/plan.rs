//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
//! Process-wide memoization of FFT setups.
//!
//! Creating a `zfft::Setup` precomputes twiddle and permutation tables, so
//! repeated convolutions with the same transform length reuse them. The
//! cache is keyed by `(length, direction)` and is not observable through
//! the public interface.
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use zfft::{Options, Setup};

lazy_static! {
    static ref PLANS: Mutex<HashMap<(usize, bool), Arc<Setup<f32>>>> = Mutex::new(HashMap::new());
}

/// Retrieve (or create) the shared FFT setup for the given transform
/// length and direction. `len` must be a power of two.
pub fn plan_for(len: usize, inverse: bool) -> Arc<Setup<f32>> {
    let mut plans = PLANS.lock();
    plans
        .entry((len, inverse))
        .or_insert_with(|| {
            // `len` is produced by `conv::padded_len`, hence a power of two
            Arc::new(Setup::new(&Options { len, inverse }).unwrap())
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_shared() {
        let a = plan_for(16, false);
        let b = plan_for(16, false);
        assert!(Arc::ptr_eq(&a, &b));

        let c = plan_for(16, true);
        assert!(!Arc::ptr_eq(&a, &c));
    }
}
