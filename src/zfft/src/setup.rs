//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//

use std::error;
use std::fmt;
use std::result::Result;

use crate::kernel::{
    new_bit_reversal_kernel, new_scale_kernel, Kernel, KernelCreationParams,
};
use crate::Num;

/// The FFT kernel configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Options {
    /// Specifies the length of the data to be processed.
    ///
    /// Must be a power of two.
    pub len: usize,

    /// Specifies whether the inverse (backward) transformation is used.
    ///
    /// The inverse transformation scales the output by the reciprocal of
    /// `len`.
    pub inverse: bool,
}

/// The error type which is returned from the `Setup` creation function.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum PlanError {
    /// The transform length is not a power of two.
    ///
    /// Zero is not a power of two; the shortest valid transform length
    /// is `1`.
    NonPowerOfTwoLength,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PlanError::NonPowerOfTwoLength => {
                write!(f, "The transform length is not a power of two.")
            }
        }
    }
}

impl error::Error for PlanError {}

/// Encapsulates the FFT kernel configuration.
#[derive(Debug)]
pub struct Setup<T> {
    len: usize,
    pub(crate) kernels: Vec<Box<dyn Kernel<T>>>,
}

pub fn factorize_radix2(x: usize) -> Result<Vec<usize>, PlanError> {
    if x.is_power_of_two() {
        Ok(vec![2; x.trailing_zeros() as usize])
    } else {
        Err(PlanError::NonPowerOfTwoLength)
    }
}

impl<T> Setup<T>
where
    T: Num + 'static,
{
    pub fn new(options: &Options) -> Result<Self, PlanError> {
        let radixes = factorize_radix2(options.len)?;

        // A decimation-in-time pipeline: undo the implicit input
        // permutation first, then run one butterfly pass per stage with
        // the block size doubling every stage.
        let mut kernels: Vec<Box<dyn Kernel<T>>> = Vec::new();

        if options.len > 1 {
            kernels.push(new_bit_reversal_kernel(options.len));

            let mut unit = 1;
            for _ in &radixes {
                kernels.push(<dyn Kernel<T>>::new(&KernelCreationParams {
                    size: options.len,
                    unit,
                    inverse: options.inverse,
                }));
                unit *= 2;
            }

            if options.inverse {
                let factor = T::one() / T::from(options.len).unwrap();
                kernels.push(new_scale_kernel(options.len, factor));
            }
        }

        Ok(Self {
            len: options.len,
            kernels,
        })
    }

    /// The transform length this `Setup` was created for.
    pub fn len(&self) -> usize {
        self.len
    }

    #[doc(hidden)]
    pub fn required_work_area_size(&self) -> usize {
        self.kernels
            .iter()
            .map(|k| k.required_work_area_size())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize_radix2() {
        assert_eq!(factorize_radix2(1), Ok(vec![]));
        assert_eq!(factorize_radix2(4), Ok(vec![2, 2]));
        assert_eq!(factorize_radix2(0), Err(PlanError::NonPowerOfTwoLength));
        assert_eq!(factorize_radix2(5), Err(PlanError::NonPowerOfTwoLength));
    }

    #[test]
    fn setup_rejects_non_power_of_two() {
        for &len in &[0usize, 3, 5, 6, 7, 12, 100] {
            let result = Setup::<f32>::new(&Options {
                len,
                inverse: false,
            });
            assert_eq!(result.err(), Some(PlanError::NonPowerOfTwoLength));
        }
    }

    #[test]
    fn setup_length_one_is_trivial() {
        let setup: Setup<f32> = Setup::new(&Options {
            len: 1,
            inverse: false,
        })
        .unwrap();
        assert_eq!(setup.kernels.len(), 0);
        assert_eq!(setup.required_work_area_size(), 0);
    }
}
