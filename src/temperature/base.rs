
use crate::units::TemperatureUnit;
use crate::settings::{DisplaySettings, DEFAULT_PRECISION};
use crate::util::write::{LineSink, stdout_sink};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::io;

const CELSIUS_OFFSET: f64 = 273.15;
const DELISLE_OFFSET: f64 = 373.15;

/// A single temperature measurement.
///
/// The value is stored internally in kelvin, and every scale accessor
/// reads or writes through that one number. Alongside it, a
/// `Temperature` carries a display unit: the scale in which it is
/// formatted by default. Each constructor and each setter reassigns
/// the display unit to the scale it works in. The arithmetic
/// operators keep the display unit of their left operand.
///
/// No physical validity checks are performed. Values below absolute
/// zero, infinities, and NaN are all carried through unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Temperature {
  kelvin: f64,
  unit: TemperatureUnit,
}

impl Temperature {
  /// Constructs a temperature of `value` degrees in the scale `unit`.
  /// The result is displayed in `unit`.
  pub fn new(unit: TemperatureUnit, value: f64) -> Self {
    Self { kelvin: scale_to_kelvin(unit, value), unit }
  }

  pub fn from_celsius(value: f64) -> Self {
    Self::new(TemperatureUnit::Celsius, value)
  }

  pub fn from_delisle(value: f64) -> Self {
    Self::new(TemperatureUnit::Delisle, value)
  }

  pub fn from_fahrenheit(value: f64) -> Self {
    Self::new(TemperatureUnit::Fahrenheit, value)
  }

  pub fn from_kelvin(value: f64) -> Self {
    Self::new(TemperatureUnit::Kelvin, value)
  }

  pub fn from_newton(value: f64) -> Self {
    Self::new(TemperatureUnit::Newton, value)
  }

  pub fn from_rankine(value: f64) -> Self {
    Self::new(TemperatureUnit::Rankine, value)
  }

  pub fn from_reaumur(value: f64) -> Self {
    Self::new(TemperatureUnit::Reaumur, value)
  }

  pub fn from_romer(value: f64) -> Self {
    Self::new(TemperatureUnit::Romer, value)
  }

  /// Builds a temperature directly from its parts, without any
  /// conversion.
  pub(crate) fn from_parts(kelvin: f64, unit: TemperatureUnit) -> Self {
    Self { kelvin, unit }
  }

  /// The current display unit.
  pub fn unit(&self) -> TemperatureUnit {
    self.unit
  }

  /// Changes the display unit without affecting the measured value.
  pub fn set_unit(&mut self, unit: TemperatureUnit) {
    self.unit = unit;
  }

  /// Returns this same measurement with a different display unit.
  pub fn in_unit(mut self, unit: TemperatureUnit) -> Self {
    self.set_unit(unit);
    self
  }

  /// Reads the value in the given scale. Never changes the display
  /// unit.
  pub fn get(&self, unit: TemperatureUnit) -> f64 {
    kelvin_to_scale(unit, self.kelvin)
  }

  /// Overwrites the value with `value` degrees in the given scale,
  /// and makes that scale the display unit.
  pub fn set(&mut self, unit: TemperatureUnit, value: f64) {
    self.kelvin = scale_to_kelvin(unit, value);
    self.unit = unit;
  }

  /// As [`Temperature::set`], but by value.
  pub fn with(mut self, unit: TemperatureUnit, value: f64) -> Self {
    self.set(unit, value);
    self
  }

  pub fn celsius(&self) -> f64 {
    self.get(TemperatureUnit::Celsius)
  }

  pub fn delisle(&self) -> f64 {
    self.get(TemperatureUnit::Delisle)
  }

  pub fn fahrenheit(&self) -> f64 {
    self.get(TemperatureUnit::Fahrenheit)
  }

  pub fn kelvin(&self) -> f64 {
    self.kelvin
  }

  pub fn newton(&self) -> f64 {
    self.get(TemperatureUnit::Newton)
  }

  pub fn rankine(&self) -> f64 {
    self.get(TemperatureUnit::Rankine)
  }

  pub fn reaumur(&self) -> f64 {
    self.get(TemperatureUnit::Reaumur)
  }

  pub fn romer(&self) -> f64 {
    self.get(TemperatureUnit::Romer)
  }

  pub fn set_celsius(&mut self, value: f64) {
    self.set(TemperatureUnit::Celsius, value);
  }

  pub fn set_delisle(&mut self, value: f64) {
    self.set(TemperatureUnit::Delisle, value);
  }

  pub fn set_fahrenheit(&mut self, value: f64) {
    self.set(TemperatureUnit::Fahrenheit, value);
  }

  pub fn set_kelvin(&mut self, value: f64) {
    self.set(TemperatureUnit::Kelvin, value);
  }

  pub fn set_newton(&mut self, value: f64) {
    self.set(TemperatureUnit::Newton, value);
  }

  pub fn set_rankine(&mut self, value: f64) {
    self.set(TemperatureUnit::Rankine, value);
  }

  pub fn set_reaumur(&mut self, value: f64) {
    self.set(TemperatureUnit::Reaumur, value);
  }

  pub fn set_romer(&mut self, value: f64) {
    self.set(TemperatureUnit::Romer, value);
  }

  /// Absolute zero in the current display unit.
  pub fn absolute_zero(&self) -> f64 {
    self.unit.absolute_zero()
  }

  /// The symbol of the current display unit.
  pub fn symbol(&self) -> &'static str {
    self.unit.symbol()
  }

  /// Formats the value in the given scale with the default settings,
  /// as `"<value> <symbol>"`. Does not change the display unit.
  pub fn format(&self, unit: TemperatureUnit) -> String {
    self.format_with(unit, &DisplaySettings::default())
  }

  pub fn format_with(&self, unit: TemperatureUnit, settings: &DisplaySettings) -> String {
    format!("{:.*} {}", settings.precision, self.get(unit), settings.symbol_for(unit))
  }

  /// Writes this temperature, in its display unit, as one line to
  /// `sink`.
  pub fn emit<S: LineSink>(&self, sink: S) -> Result<(), S::Error> {
    self.emit_as(self.unit, sink)
  }

  pub fn emit_as<S: LineSink>(&self, unit: TemperatureUnit, sink: S) -> Result<(), S::Error> {
    self.emit_with(unit, &DisplaySettings::default(), sink)
  }

  pub fn emit_with<S: LineSink>(
    &self,
    unit: TemperatureUnit,
    settings: &DisplaySettings,
    mut sink: S,
  ) -> Result<(), S::Error> {
    let text = self.format_with(unit, settings);
    tracing::trace!(kelvin = self.kelvin, %unit, "emitting temperature");
    sink.write_line(&text)
  }

  /// Prints this temperature, in its display unit, to standard
  /// output.
  pub fn print(&self) -> io::Result<()> {
    self.emit(stdout_sink())
  }

  pub fn print_as(&self, unit: TemperatureUnit) -> io::Result<()> {
    self.emit_as(unit, stdout_sink())
  }
}

/// Converts a value in kelvin into the given scale.
pub fn kelvin_to_scale(unit: TemperatureUnit, kelvin: f64) -> f64 {
  let celsius = kelvin - CELSIUS_OFFSET;
  match unit {
    TemperatureUnit::Celsius => celsius,
    TemperatureUnit::Delisle => (DELISLE_OFFSET - kelvin) * 1.5,
    TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
    TemperatureUnit::Kelvin => kelvin,
    TemperatureUnit::Newton => celsius * 0.33,
    TemperatureUnit::Rankine => kelvin * 1.8,
    TemperatureUnit::Reaumur => celsius * 0.8,
    TemperatureUnit::Romer => celsius * 0.525 + 7.5,
  }
}

/// Converts a value in the given scale into kelvin.
pub fn scale_to_kelvin(unit: TemperatureUnit, value: f64) -> f64 {
  match unit {
    TemperatureUnit::Celsius => value + CELSIUS_OFFSET,
    TemperatureUnit::Delisle => DELISLE_OFFSET - value * (2.0 / 3.0),
    TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8 + CELSIUS_OFFSET,
    TemperatureUnit::Kelvin => value,
    TemperatureUnit::Newton => value / 0.33 + CELSIUS_OFFSET,
    TemperatureUnit::Rankine => value * (5.0 / 9.0),
    TemperatureUnit::Reaumur => value * 1.25 + CELSIUS_OFFSET,
    TemperatureUnit::Romer => (value - 7.5) * (40.0 / 21.0) + CELSIUS_OFFSET,
  }
}

impl Default for Temperature {
  /// Zero kelvin, displayed in kelvin.
  fn default() -> Self {
    Temperature::from_kelvin(0.0)
  }
}

impl Display for Temperature {
  /// Writes the value in the display unit. The formatter's precision
  /// is honored if given; otherwise six decimal places are used.
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    write!(f, "{:.*} {}", precision, self.get(self.unit), self.unit.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::unwrap_infallible;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_constructors_set_unit() {
    for unit in TemperatureUnit::ALL {
      assert_eq!(Temperature::new(unit, 12.5).unit(), unit);
    }
    assert_eq!(Temperature::from_celsius(1.0).unit(), TemperatureUnit::Celsius);
    assert_eq!(Temperature::from_delisle(1.0).unit(), TemperatureUnit::Delisle);
    assert_eq!(Temperature::from_fahrenheit(1.0).unit(), TemperatureUnit::Fahrenheit);
    assert_eq!(Temperature::from_kelvin(1.0).unit(), TemperatureUnit::Kelvin);
    assert_eq!(Temperature::from_newton(1.0).unit(), TemperatureUnit::Newton);
    assert_eq!(Temperature::from_rankine(1.0).unit(), TemperatureUnit::Rankine);
    assert_eq!(Temperature::from_reaumur(1.0).unit(), TemperatureUnit::Reaumur);
    assert_eq!(Temperature::from_romer(1.0).unit(), TemperatureUnit::Romer);
  }

  #[test]
  fn test_round_trip_per_scale() {
    let values = [-500.0, -273.15, -40.0, -1.5, 0.0, 0.1, 37.0, 100.0, 1.0e6];
    for unit in TemperatureUnit::ALL {
      for value in values {
        let temp = Temperature::new(unit, value);
        assert_abs_diff_eq!(temp.get(unit), value, epsilon = 1e-9 * value.abs().max(1.0));
      }
    }
  }

  #[test]
  fn test_freezing_point_of_water() {
    let temp = Temperature::from_celsius(0.0);
    assert_abs_diff_eq!(temp.celsius(), 0.0);
    assert_abs_diff_eq!(temp.delisle(), 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.fahrenheit(), 32.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.kelvin(), 273.15);
    assert_abs_diff_eq!(temp.newton(), 0.0);
    assert_abs_diff_eq!(temp.rankine(), 491.67, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.reaumur(), 0.0);
    assert_abs_diff_eq!(temp.romer(), 7.5);
  }

  #[test]
  fn test_boiling_point_of_water() {
    let temp = Temperature::from_celsius(100.0);
    assert_abs_diff_eq!(temp.delisle(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.fahrenheit(), 212.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.newton(), 33.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.rankine(), 671.67, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.reaumur(), 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(temp.romer(), 60.0, epsilon = 1e-9);
  }

  #[test]
  fn test_fahrenheit_and_celsius_agree_at_minus_forty() {
    let temp = Temperature::from_fahrenheit(-40.0);
    assert_abs_diff_eq!(temp.celsius(), -40.0, epsilon = 1e-9);
  }

  #[test]
  fn test_getter_does_not_change_unit() {
    let temp = Temperature::from_newton(10.0);
    for unit in TemperatureUnit::ALL {
      temp.get(unit);
    }
    assert_eq!(temp.unit(), TemperatureUnit::Newton);
  }

  #[test]
  fn test_setter_changes_unit() {
    let mut temp = Temperature::from_celsius(20.0);
    temp.set_fahrenheit(50.0);
    assert_eq!(temp.unit(), TemperatureUnit::Fahrenheit);
    assert_abs_diff_eq!(temp.celsius(), 10.0, epsilon = 1e-9);
    temp.set_kelvin(0.0);
    assert_eq!(temp.unit(), TemperatureUnit::Kelvin);
    temp.set_rankine(9.0);
    assert_eq!(temp.unit(), TemperatureUnit::Rankine);
    assert_abs_diff_eq!(temp.kelvin(), 5.0, epsilon = 1e-12);
    temp.set_romer(7.5);
    assert_eq!(temp.unit(), TemperatureUnit::Romer);
    assert_abs_diff_eq!(temp.kelvin(), 273.15);
  }

  #[test]
  fn test_setter_changes_unit_even_if_value_is_unchanged() {
    let mut temp = Temperature::from_kelvin(273.15);
    temp.set_celsius(0.0);
    assert_eq!(temp.unit(), TemperatureUnit::Celsius);
    assert_abs_diff_eq!(temp.kelvin(), 273.15);
  }

  #[test]
  fn test_with_is_set_by_value() {
    let temp = Temperature::from_celsius(0.0).with(TemperatureUnit::Reaumur, 80.0);
    assert_eq!(temp.unit(), TemperatureUnit::Reaumur);
    assert_abs_diff_eq!(temp.celsius(), 100.0, epsilon = 1e-9);
  }

  #[test]
  fn test_in_unit_keeps_value() {
    let temp = Temperature::from_celsius(25.0).in_unit(TemperatureUnit::Kelvin);
    assert_eq!(temp.unit(), TemperatureUnit::Kelvin);
    assert_abs_diff_eq!(temp.celsius(), 25.0, epsilon = 1e-9);
  }

  #[test]
  fn test_below_absolute_zero_is_representable() {
    let temp = Temperature::from_kelvin(-10.0);
    assert_abs_diff_eq!(temp.celsius(), -283.15, epsilon = 1e-9);
  }

  #[test]
  fn test_nan_propagates() {
    let temp = Temperature::from_celsius(f64::NAN);
    assert!(temp.kelvin().is_nan());
    assert!(temp.fahrenheit().is_nan());
  }

  #[test]
  fn test_absolute_zero_maps_to_zero_kelvin() {
    for unit in [
      TemperatureUnit::Celsius,
      TemperatureUnit::Fahrenheit,
      TemperatureUnit::Kelvin,
      TemperatureUnit::Rankine,
      TemperatureUnit::Reaumur,
    ] {
      let temp = Temperature::new(unit, unit.absolute_zero());
      assert_abs_diff_eq!(temp.kelvin(), 0.0, epsilon = 1e-9);
    }
  }

  #[test]
  fn test_rounded_absolute_zero_constants() {
    // These published constants are rounded and do not convert back
    // to exactly 0 K.
    let delisle = Temperature::new(TemperatureUnit::Delisle, TemperatureUnit::Delisle.absolute_zero());
    assert_abs_diff_eq!(delisle.kelvin(), -1.0 / 300.0, epsilon = 1e-9);
    let newton = Temperature::new(TemperatureUnit::Newton, TemperatureUnit::Newton.absolute_zero());
    assert_abs_diff_eq!(newton.kelvin(), 273.15 - 90.14 / 0.33, epsilon = 1e-9);
    assert!(newton.kelvin() < 0.0);
    let romer = Temperature::new(TemperatureUnit::Romer, TemperatureUnit::Romer.absolute_zero());
    assert_abs_diff_eq!(romer.kelvin(), 1.0 / 140.0, epsilon = 1e-9);
    for temp in [delisle, newton, romer] {
      assert_abs_diff_eq!(temp.kelvin(), 0.0, epsilon = 0.01);
    }
  }

  #[test]
  fn test_absolute_zero_and_symbol_follow_unit() {
    let mut temp = Temperature::from_fahrenheit(0.0);
    assert_eq!(temp.absolute_zero(), -459.67);
    assert_eq!(temp.symbol(), "°F");
    temp.set_reaumur(0.0);
    assert_eq!(temp.absolute_zero(), -218.52);
    assert_eq!(temp.symbol(), "°Ré");
  }

  #[test]
  fn test_format() {
    let temp = Temperature::from_celsius(0.0);
    assert_eq!(temp.format(TemperatureUnit::Celsius), "0.000000 °C");
    assert_eq!(temp.format(TemperatureUnit::Kelvin), "273.150000 K");
    assert_eq!(temp.format(TemperatureUnit::Fahrenheit), "32.000000 °F");
    assert_eq!(temp.format(TemperatureUnit::Romer), "7.500000 °Rø");
    assert_eq!(temp.unit(), TemperatureUnit::Celsius);
  }

  #[test]
  fn test_format_with_settings() {
    let temp = Temperature::from_celsius(21.456);
    let settings = DisplaySettings { precision: 1, prefers_unicode_output: false };
    assert_eq!(temp.format_with(TemperatureUnit::Celsius, &settings), "21.5 degC");
    assert_eq!(temp.format_with(TemperatureUnit::Reaumur, &settings), "17.2 degRe");
  }

  #[test]
  fn test_display_uses_current_unit() {
    let temp = Temperature::from_fahrenheit(98.6);
    assert_eq!(temp.to_string(), "98.600000 °F");
    assert_eq!(format!("{:.1}", temp), "98.6 °F");
    assert_eq!(Temperature::from_kelvin(-1.0).to_string(), "-1.000000 K");
  }

  #[test]
  fn test_emit() {
    let temp = Temperature::from_celsius(0.0);
    let mut lines: Vec<String> = Vec::new();
    unwrap_infallible(temp.emit(&mut lines));
    unwrap_infallible(temp.emit_as(TemperatureUnit::Kelvin, &mut lines));
    assert_eq!(lines, vec!["0.000000 °C", "273.150000 K"]);
    assert_eq!(temp.unit(), TemperatureUnit::Celsius);
  }

  #[test]
  fn test_serde() {
    let temp = Temperature::from_kelvin(300.0);
    let json = serde_json::to_string(&temp).unwrap();
    assert_eq!(json, r#"{"kelvin":300.0,"unit":"Kelvin"}"#);
    let back: Temperature = serde_json::from_str(&json).unwrap();
    assert_eq!(back.unit(), TemperatureUnit::Kelvin);
    assert_eq!(back.kelvin(), 300.0);
  }

  #[test]
  fn test_default_is_zero_kelvin() {
    let temp = Temperature::default();
    assert_eq!(temp.kelvin(), 0.0);
    assert_eq!(temp.unit(), TemperatureUnit::Kelvin);
  }
}
