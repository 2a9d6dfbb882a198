//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
use super::{Kernel, KernelParams};
use crate::Num;

/// Creates a kernel that multiplies every element by a constant factor.
///
/// Appended to inverse transformation pipelines to realize the `1/N`
/// normalization.
pub fn new_scale_kernel<T>(len: usize, factor: T) -> Box<dyn Kernel<T>>
where
    T: Num + 'static,
{
    Box::new(ScaleKernel { len, factor })
}

#[derive(Debug)]
struct ScaleKernel<T> {
    len: usize,
    factor: T,
}

impl<T> Kernel<T> for ScaleKernel<T>
where
    T: Num,
{
    fn transform(&self, params: &mut KernelParams<'_, T>) {
        for x in &mut params.re[0..self.len] {
            *x *= self.factor;
        }
        for x in &mut params.im[0..self.len] {
            *x *= self.factor;
        }
    }
}
