//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
use super::{Kernel, KernelParams};
use crate::Num;

/// Creates a bit reversal kernel.
///
/// A bit reversal kernel is, as its name implies, a special kernel that
/// performs the bit reversal permutation: the element at index `i` is moved
/// to the index obtained by reversing the `log2(len)`-bit binary
/// representation of `i`. The kernel is supposed to be executed before the
/// DIT butterfly stages.
pub fn new_bit_reversal_kernel<T>(len: usize) -> Box<dyn Kernel<T>>
where
    T: Num,
{
    assert!(len.is_power_of_two());

    let bits = len.trailing_zeros();
    let mut indices = vec![0usize; len];
    for i in 1..len {
        indices[i] = indices[i >> 1] >> 1 | (i & 1) << (bits - 1);
    }

    Box::new(BitReversalKernel { indices })
}

#[derive(Debug)]
struct BitReversalKernel {
    indices: Vec<usize>,
}

impl BitReversalKernel {
    fn permute<T: Num>(&self, data: &mut [T], wa: &mut [T]) {
        wa.copy_from_slice(data);
        for (i, &index) in self.indices.iter().enumerate() {
            data[i] = wa[index];
        }
    }
}

impl<T> Kernel<T> for BitReversalKernel
where
    T: Num,
{
    fn transform(&self, params: &mut KernelParams<'_, T>) {
        let size = self.indices.len();
        let wa = &mut params.work_area[0..size];
        self.permute(&mut params.re[0..size], wa);
        self.permute(&mut params.im[0..size], wa);
    }

    fn required_work_area_size(&self) -> usize {
        self.indices.len()
    }
}
