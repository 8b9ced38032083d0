
use super::base::Temperature;
use crate::error::ParseTemperatureError;
use crate::units::TemperatureUnit;

use once_cell::sync::Lazy;
use regex::Regex;

use std::str::FromStr;

static TEMPERATURE_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*([^\d\s.+-].*?)\s*$").unwrap()
});

/// Parses a temperature written as a number followed by a unit, such
/// as `"100 °C"`, `"-40F"`, or `"373.15 kelvin"`. The `Display`
/// output of any finite temperature can be read back. The parsed
/// temperature is displayed in the unit it was written in.
impl FromStr for Temperature {
  type Err = ParseTemperatureError;

  fn from_str(s: &str) -> Result<Temperature, ParseTemperatureError> {
    let Some(caps) = TEMPERATURE_RE.captures(s) else {
      tracing::debug!(input = s, "malformed temperature");
      return Err(ParseTemperatureError::Malformed(s.to_owned()));
    };
    // Note: The regex only admits valid float syntax for the first
    // group, so f64::from_str failing here would be a bug in the
    // regex.
    let value = f64::from_str(&caps[1])
      .map_err(|_| ParseTemperatureError::Malformed(s.to_owned()))?;
    let unit = TemperatureUnit::from_str(&caps[2])?;
    Ok(Temperature::new(unit, value))
  }
}
