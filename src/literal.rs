
//! Shorthand constructors for temperatures, usable on any primitive
//! number.
//!
//! ```ignore
//! use tcu::literal::TemperatureLiteral;
//!
//! assert_eq!(100_i32.celsius(), 373.15_f64.kelvin());
//! ```

use crate::temperature::Temperature;
use crate::units::TemperatureUnit;

use num::cast::AsPrimitive;

/// Extension trait which builds a [`Temperature`] in a given scale
/// out of a plain number. Implemented for every primitive numeric
/// type.
pub trait TemperatureLiteral: Sized {
  fn in_scale(self, unit: TemperatureUnit) -> Temperature;

  fn celsius(self) -> Temperature {
    self.in_scale(TemperatureUnit::Celsius)
  }

  fn delisle(self) -> Temperature {
    self.in_scale(TemperatureUnit::Delisle)
  }

  fn fahrenheit(self) -> Temperature {
    self.in_scale(TemperatureUnit::Fahrenheit)
  }

  fn kelvin(self) -> Temperature {
    self.in_scale(TemperatureUnit::Kelvin)
  }

  fn newton(self) -> Temperature {
    self.in_scale(TemperatureUnit::Newton)
  }

  fn rankine(self) -> Temperature {
    self.in_scale(TemperatureUnit::Rankine)
  }

  fn reaumur(self) -> Temperature {
    self.in_scale(TemperatureUnit::Reaumur)
  }

  fn romer(self) -> Temperature {
    self.in_scale(TemperatureUnit::Romer)
  }
}

impl<T: AsPrimitive<f64>> TemperatureLiteral for T {
  fn in_scale(self, unit: TemperatureUnit) -> Temperature {
    Temperature::new(unit, self.as_())
  }
}

pub fn celsius(value: impl AsPrimitive<f64>) -> Temperature {
  value.celsius()
}

pub fn delisle(value: impl AsPrimitive<f64>) -> Temperature {
  value.delisle()
}

pub fn fahrenheit(value: impl AsPrimitive<f64>) -> Temperature {
  value.fahrenheit()
}

pub fn kelvin(value: impl AsPrimitive<f64>) -> Temperature {
  value.kelvin()
}

pub fn newton(value: impl AsPrimitive<f64>) -> Temperature {
  value.newton()
}

pub fn rankine(value: impl AsPrimitive<f64>) -> Temperature {
  value.rankine()
}

pub fn reaumur(value: impl AsPrimitive<f64>) -> Temperature {
  value.reaumur()
}

pub fn romer(value: impl AsPrimitive<f64>) -> Temperature {
  value.romer()
}
