
//! User-facing display configuration.

use crate::error::ConfigError;
use crate::units::TemperatureUnit;

use serde::{Serialize, Deserialize};

use std::env;

/// Number of digits after the decimal point used when no precision
/// is requested, matching a `%f` conversion.
pub const DEFAULT_PRECISION: usize = 6;

pub const PRECISION_VAR: &str = "TCU_PRECISION";
pub const ASCII_VAR: &str = "TCU_ASCII";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
  /// Digits printed after the decimal point.
  pub precision: usize,
  /// If true, scales are written with their Unicode symbols (`°C`).
  /// Otherwise the ASCII equivalents (`degC`) are used.
  pub prefers_unicode_output: bool,
}

impl DisplaySettings {
  /// Reads settings from the environment, falling back to the
  /// defaults for any variable which is unset.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where F: Fn(&'static str) -> Option<String> {
    let mut settings = Self::default();
    if let Some(value) = lookup(PRECISION_VAR) {
      settings.precision = value.trim().parse().map_err(|_| {
        ConfigError::InvalidValue { variable: PRECISION_VAR, value: value.clone() }
      })?;
    }
    if let Some(value) = lookup(ASCII_VAR) {
      settings.prefers_unicode_output = !parse_flag(ASCII_VAR, &value)?;
    }
    Ok(settings)
  }

  pub fn symbol_for(&self, unit: TemperatureUnit) -> &'static str {
    if self.prefers_unicode_output {
      unit.symbol()
    } else {
      unit.ascii_symbol()
    }
  }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(ConfigError::InvalidValue { variable, value: value.to_owned() }),
  }
}

impl Default for DisplaySettings {
  fn default() -> Self {
    DisplaySettings {
      precision: DEFAULT_PRECISION,
      prefers_unicode_output: true,
    }
  }
}
