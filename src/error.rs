
//! Error types. Conversions between scales are total and never fail;
//! only parsing, configuration, and output can produce errors.

use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseUnitError(#[from] ParseUnitError),
  #[error("{0}")]
  ParseTemperatureError(#[from] ParseTemperatureError),
  #[error("{0}")]
  ConfigError(#[from] ConfigError),
  #[error("{0}")]
  IoError(#[from] io::Error),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse '{input}' as a temperature unit")]
pub struct ParseUnitError {
  pub input: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseTemperatureError {
  #[error("Expected '<number> <unit>', got '{0}'")]
  Malformed(String),
  #[error("{0}")]
  UnknownUnit(#[from] ParseUnitError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("Invalid value '{value}' for {variable}")]
  InvalidValue { variable: &'static str, value: String },
}

impl ParseUnitError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}
