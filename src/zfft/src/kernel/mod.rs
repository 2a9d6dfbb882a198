//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
mod bitreversal;
mod generic;
mod scale;

use std::fmt::Debug;

use crate::Num;

pub use self::bitreversal::new_bit_reversal_kernel;
pub use self::scale::new_scale_kernel;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KernelCreationParams {
    pub size: usize,

    /// Half the butterfly block size of this stage, i.e. the distance
    /// between the two elements combined by one butterfly. Bounded by
    /// `1 <= unit <= size / 2`.
    pub unit: usize,

    pub inverse: bool,
}

#[derive(Debug)]
pub struct KernelParams<'a, T> {
    pub re: &'a mut [T],
    pub im: &'a mut [T],
    pub work_area: &'a mut [T],
}

pub trait Kernel<T>: Debug + Send + Sync {
    fn transform(&self, params: &mut KernelParams<'_, T>);
    fn required_work_area_size(&self) -> usize {
        0
    }
}

impl<T> dyn Kernel<T>
where
    T: Num + 'static,
{
    pub fn new(cparams: &KernelCreationParams) -> Box<dyn Kernel<T>> {
        generic::new_radix2_kernel(cparams)
    }
}
