#![no_std]

pub mod full_math;
pub mod sqrt_math;
pub mod value_math;
pub mod weight_math;

pub use full_math::*;
pub use sqrt_math::*;
pub use value_math::*;
pub use weight_math::*;
