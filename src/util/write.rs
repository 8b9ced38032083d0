
//! The line-oriented output collaborator used when printing
//! temperatures.

use std::convert::Infallible;
use std::io::{self, Write};

/// A destination that accepts whole lines of text.
///
/// The error type is an associated type, so writing into a sink that
/// can never fail, such as `Vec<String>`, produces a result with no
/// error component.
pub trait LineSink {
  type Error;

  /// Writes `text` followed by a line terminator.
  fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Newtype wrapper which implements [`LineSink`] for any type which
/// implements [`std::io::Write`].
#[derive(Debug, Clone)]
pub struct IoLineSink<W>(pub W);

impl LineSink for Vec<String> {
  type Error = Infallible;

  fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
    self.push(text.to_owned());
    Ok(())
  }
}

impl<W: Write> LineSink for IoLineSink<W> {
  type Error = io::Error;

  fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
    writeln!(self.0, "{}", text)
  }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
  type Error = S::Error;

  fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
    (**self).write_line(text)
  }
}

/// A sink writing to the process's standard output.
pub fn stdout_sink() -> IoLineSink<io::Stdout> {
  IoLineSink(io::stdout())
}
