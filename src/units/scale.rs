
use crate::error::ParseUnitError;

use serde::{Serialize, Deserialize};
use phf::phf_map;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// One of the eight supported temperature scales.
///
/// Every scale carries two fixed attributes: the glyph used when
/// displaying a value in that scale, and the value of absolute zero
/// expressed in the scale's own degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
  Celsius,
  Delisle,
  Fahrenheit,
  Kelvin,
  Newton,
  Rankine,
  Reaumur,
  Romer,
}

pub const NSCALES: usize = 8;

/// Lookup table for [`TemperatureUnit::from_str`]. Keys are
/// lowercase; the input is lowercased before lookup.
static UNIT_NAMES: phf::Map<&'static str, TemperatureUnit> = phf_map! {
  // Celsius
  "celsius" => TemperatureUnit::Celsius,
  "°c" => TemperatureUnit::Celsius,
  "degc" => TemperatureUnit::Celsius,
  "c" => TemperatureUnit::Celsius,
  // Delisle
  "delisle" => TemperatureUnit::Delisle,
  "°d" => TemperatureUnit::Delisle,
  "degde" => TemperatureUnit::Delisle,
  "de" => TemperatureUnit::Delisle,
  // Fahrenheit
  "fahrenheit" => TemperatureUnit::Fahrenheit,
  "°f" => TemperatureUnit::Fahrenheit,
  "degf" => TemperatureUnit::Fahrenheit,
  "f" => TemperatureUnit::Fahrenheit,
  // Kelvin
  "kelvin" => TemperatureUnit::Kelvin,
  "k" => TemperatureUnit::Kelvin,
  "degk" => TemperatureUnit::Kelvin,
  // Newton
  "newton" => TemperatureUnit::Newton,
  "°n" => TemperatureUnit::Newton,
  "degn" => TemperatureUnit::Newton,
  "n" => TemperatureUnit::Newton,
  // Rankine
  "rankine" => TemperatureUnit::Rankine,
  "°r" => TemperatureUnit::Rankine,
  "degr" => TemperatureUnit::Rankine,
  "r" => TemperatureUnit::Rankine,
  // Réaumur
  "réaumur" => TemperatureUnit::Reaumur,
  "reaumur" => TemperatureUnit::Reaumur,
  "°ré" => TemperatureUnit::Reaumur,
  "degre" => TemperatureUnit::Reaumur,
  "re" => TemperatureUnit::Reaumur,
  // Rømer
  "rømer" => TemperatureUnit::Romer,
  "romer" => TemperatureUnit::Romer,
  "°rø" => TemperatureUnit::Romer,
  "degro" => TemperatureUnit::Romer,
  "ro" => TemperatureUnit::Romer,
};

impl TemperatureUnit {
  pub const ALL: [TemperatureUnit; NSCALES] = [
    TemperatureUnit::Celsius,
    TemperatureUnit::Delisle,
    TemperatureUnit::Fahrenheit,
    TemperatureUnit::Kelvin,
    TemperatureUnit::Newton,
    TemperatureUnit::Rankine,
    TemperatureUnit::Reaumur,
    TemperatureUnit::Romer,
  ];

  /// The display glyph for this scale, such as `°C` or `K`.
  pub fn symbol(self) -> &'static str {
    match self {
      TemperatureUnit::Celsius => "°C",
      TemperatureUnit::Delisle => "°D",
      TemperatureUnit::Fahrenheit => "°F",
      TemperatureUnit::Kelvin => "K",
      TemperatureUnit::Newton => "°N",
      TemperatureUnit::Rankine => "°R",
      TemperatureUnit::Reaumur => "°Ré",
      TemperatureUnit::Romer => "°Rø",
    }
  }

  /// An ASCII-only stand-in for [`TemperatureUnit::symbol`], for
  /// output targets that cannot render the degree sign.
  pub fn ascii_symbol(self) -> &'static str {
    match self {
      TemperatureUnit::Celsius => "degC",
      TemperatureUnit::Delisle => "degDe",
      TemperatureUnit::Fahrenheit => "degF",
      TemperatureUnit::Kelvin => "K",
      TemperatureUnit::Newton => "degN",
      TemperatureUnit::Rankine => "degR",
      TemperatureUnit::Reaumur => "degRe",
      TemperatureUnit::Romer => "degRo",
    }
  }

  /// The proper name of the scale, with its original spelling.
  pub fn name(self) -> &'static str {
    match self {
      TemperatureUnit::Celsius => "Celsius",
      TemperatureUnit::Delisle => "Delisle",
      TemperatureUnit::Fahrenheit => "Fahrenheit",
      TemperatureUnit::Kelvin => "Kelvin",
      TemperatureUnit::Newton => "Newton",
      TemperatureUnit::Rankine => "Rankine",
      TemperatureUnit::Reaumur => "Réaumur",
      TemperatureUnit::Romer => "Rømer",
    }
  }

  /// Absolute zero, expressed in this scale's own degrees.
  ///
  /// These are the conventional published constants. The Delisle,
  /// Newton, and Rømer values are rounded, so converting them back
  /// through the scale formulas lands a few thousandths of a kelvin
  /// away from 0 K.
  pub fn absolute_zero(self) -> f64 {
    match self {
      TemperatureUnit::Celsius => -273.15,
      TemperatureUnit::Delisle => 559.73,
      TemperatureUnit::Fahrenheit => -459.67,
      TemperatureUnit::Kelvin => 0.0,
      TemperatureUnit::Newton => -90.14,
      TemperatureUnit::Rankine => 0.0,
      TemperatureUnit::Reaumur => -218.52,
      TemperatureUnit::Romer => -135.90,
    }
  }
}

impl Display for TemperatureUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for TemperatureUnit {
  type Err = ParseUnitError;

  fn from_str(s: &str) -> Result<Self, ParseUnitError> {
    let key = s.trim().to_lowercase();
    UNIT_NAMES.get(key.as_str()).copied().ok_or_else(|| {
      tracing::debug!(input = s, "unrecognized temperature unit");
      ParseUnitError::new(s)
    })
  }
}
