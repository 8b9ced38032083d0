
//! Temperature values convertible among eight scales, with arithmetic
//! that remembers which scale the caller is working in.

pub mod error;
pub mod literal;
pub mod settings;
pub mod temperature;
pub mod units;
pub mod util;

pub use temperature::Temperature;
pub use units::TemperatureUnit;
