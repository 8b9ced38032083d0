
//! The fixed set of temperature scales understood by this crate.

pub mod scale;

pub use scale::TemperatureUnit;
