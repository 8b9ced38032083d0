
//! Various utility functions.

pub mod write;

use std::convert::Infallible;

pub fn unwrap_infallible<T>(res: Result<T, Infallible>) -> T {
  match res {
    Ok(res) => res,
    Err(err) => match err {},
  }
}
