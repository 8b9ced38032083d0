
//! Arithmetic and comparison on temperatures. All of these act on
//! the canonical kelvin value. Where a result is produced, it takes
//! the display unit of the left-hand operand.

use super::base::Temperature;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::cmp::Ordering;
use std::ops;

/// Produces a copy of the operand, keeping its display unit.
///
/// Note that this does NOT negate the kelvin value. There is no
/// single meaningful negation for a quantity whose zero differs from
/// scale to scale, and existing callers rely on the copying
/// behavior.
impl ops::Neg for Temperature {
  type Output = Temperature;

  fn neg(self) -> Temperature {
    Temperature::from_parts(self.kelvin(), self.unit())
  }
}

impl ops::Neg for &Temperature {
  type Output = Temperature;

  fn neg(self) -> Temperature {
    -*self
  }
}

/// Two temperatures are equal if they measure exactly the same number
/// of kelvin. The display unit is not compared.
impl PartialEq for Temperature {
  fn eq(&self, other: &Temperature) -> bool {
    self.kelvin() == other.kelvin()
  }
}

impl PartialOrd for Temperature {
  fn partial_cmp(&self, other: &Temperature) -> Option<Ordering> {
    self.kelvin().partial_cmp(&other.kelvin())
  }
}

impl ops::Add for Temperature {
  type Output = Temperature;

  fn add(self, other: Temperature) -> Temperature {
    Temperature::from_parts(self.kelvin() + other.kelvin(), self.unit())
  }
}

impl ops::Add for &Temperature {
  type Output = Temperature;

  fn add(self, other: &Temperature) -> Temperature {
    *self + *other
  }
}

impl ops::Sub for Temperature {
  type Output = Temperature;

  fn sub(self, other: Temperature) -> Temperature {
    Temperature::from_parts(self.kelvin() - other.kelvin(), self.unit())
  }
}

impl ops::Sub for &Temperature {
  type Output = Temperature;

  fn sub(self, other: &Temperature) -> Temperature {
    *self - *other
  }
}

impl ops::AddAssign for Temperature {
  fn add_assign(&mut self, other: Temperature) {
    let unit = self.unit();
    self.set_kelvin(self.kelvin() + other.kelvin());
    self.set_unit(unit);
  }
}

impl ops::AddAssign<&Temperature> for Temperature {
  fn add_assign(&mut self, other: &Temperature) {
    *self += *other;
  }
}

impl ops::SubAssign for Temperature {
  fn sub_assign(&mut self, other: Temperature) {
    let unit = self.unit();
    self.set_kelvin(self.kelvin() - other.kelvin());
    self.set_unit(unit);
  }
}

impl ops::SubAssign<&Temperature> for Temperature {
  fn sub_assign(&mut self, other: &Temperature) {
    *self -= *other;
  }
}

impl AbsDiffEq for Temperature {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Temperature, epsilon: f64) -> bool {
    self.kelvin().abs_diff_eq(&other.kelvin(), epsilon)
  }
}

impl RelativeEq for Temperature {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Temperature, epsilon: f64, max_relative: f64) -> bool {
    self.kelvin().relative_eq(&other.kelvin(), epsilon, max_relative)
  }
}

impl UlpsEq for Temperature {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Temperature, epsilon: f64, max_ulps: u32) -> bool {
    self.kelvin().ulps_eq(&other.kelvin(), epsilon, max_ulps)
  }
}
