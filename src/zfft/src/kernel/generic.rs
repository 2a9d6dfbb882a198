//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//

//! Defines a generic radix-2 decimation-in-time FFT kernel without any
//! processor specific optimizations.

use num_complex::Complex;
use num_iter::range_step;
use num_traits::Zero;

use super::{Kernel, KernelCreationParams, KernelParams};
use crate::Num;

pub fn new_radix2_kernel<T>(cparams: &KernelCreationParams) -> Box<dyn Kernel<T>>
where
    T: Num + 'static,
{
    assert!(cparams.unit >= 1);
    assert!(cparams.unit * 2 <= cparams.size);

    let full_circle = if cparams.inverse { 2 } else { -2 };
    let block_size = cparams.unit * 2;
    let delta = T::from(full_circle).unwrap() * T::PI() / T::from(block_size).unwrap();

    // One twiddle per butterfly position within a block,
    // w[j] = exp(full_circle * pi * i * j / block_size)
    let twiddles: Vec<Complex<T>> = (0..cparams.unit)
        .map(|j| Complex::new(Zero::zero(), delta * T::from(j).unwrap()).exp())
        .collect();

    Box::new(Radix2DitKernel {
        cparams: *cparams,
        twiddles,
    })
}

#[derive(Debug)]
struct Radix2DitKernel<T> {
    cparams: KernelCreationParams,
    twiddles: Vec<Complex<T>>,
}

impl<T> Kernel<T> for Radix2DitKernel<T>
where
    T: Num,
{
    fn transform(&self, params: &mut KernelParams<'_, T>) {
        let cparams = &self.cparams;
        let twiddles = &self.twiddles;
        let re = &mut *params.re;
        let im = &mut *params.im;
        let half = cparams.unit;

        for base in range_step(0, cparams.size, half * 2) {
            for j in 0..half {
                let w = twiddles[j];
                let top = base + j;
                let bottom = top + half;

                let tr = w.re * re[bottom] - w.im * im[bottom];
                let ti = w.re * im[bottom] + w.im * re[bottom];

                re[bottom] = re[top] - tr;
                im[bottom] = im[top] - ti;
                re[top] = re[top] + tr;
                im[top] = im[top] + ti;
            }
        }
    }
}
