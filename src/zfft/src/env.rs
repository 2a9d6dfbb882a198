//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
use std::borrow::Borrow;

use crate::kernel::KernelParams;
use crate::{Num, Setup};
use num_traits::Zero;

/// Encapsulates the working area required for a transformation.
#[derive(Debug, Clone)]
pub struct Env<TNum, TSetupRef> {
    setup: TSetupRef,
    work_area: Vec<TNum>,
}

impl<TNum, TSetupRef> Env<TNum, TSetupRef>
where
    TNum: Num + 'static,
    TSetupRef: Borrow<Setup<TNum>>,
{
    pub fn new(setup: TSetupRef) -> Self {
        let work_area_size = setup.borrow().required_work_area_size();
        Env {
            setup,
            work_area: vec![Zero::zero(); work_area_size],
        }
    }

    /// Transforms the supplied complex array and writes the result to the
    /// same arrays (therefore this is an in-place operation).
    ///
    /// The complex sequence is supplied in a split representation: `re[i]`
    /// and `im[i]` hold the real and imaginary components of the `i`-th
    /// element. Both slices must be exactly as long as the transform
    /// length the `Setup` was created for.
    pub fn transform(&mut self, re: &mut [TNum], im: &mut [TNum]) {
        let setup = self.setup.borrow();
        assert_eq!(re.len(), im.len());
        assert_eq!(re.len(), setup.len());

        let mut kernel_param = KernelParams {
            re,
            im,
            work_area: self.work_area.as_mut_slice(),
        };
        for kernel in &setup.kernels {
            kernel.transform(&mut kernel_param);
        }
    }
}
