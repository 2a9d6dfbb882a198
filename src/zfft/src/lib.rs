//! zFFT
//! ====
//!
//! Radix-2 FFT library written purely in Rust, operating on a split
//! (separate real and imaginary arrays) representation.
//!
//! The transform length must be a power of two. Inverse transforms include
//! the `1/N` normalization, so a forward/inverse round trip reproduces the
//! input up to floating-point rounding.
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

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod env;
mod kernel;
mod setup;

pub trait Num:
    Clone
    + Debug
    + Send
    + Sync
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + num_traits::Float
    + num_traits::FloatConst
    + num_traits::Zero
{
}
impl<T> Num for T where
    T: Clone
        + Debug
        + Send
        + Sync
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + num_traits::Float
        + num_traits::FloatConst
        + num_traits::Zero
{
}

pub use crate::env::Env;
pub use crate::setup::{Options, PlanError, Setup};
