
//! The [`Temperature`] value type and its arithmetic.

mod base;
mod ops;
mod parsing;

pub use base::{Temperature, kelvin_to_scale, scale_to_kelvin};
