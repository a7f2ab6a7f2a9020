//! Public error type for signature resolution.
//!
//! Sub-component failures are converted to this type at the API boundary;
//! their messages pass through unchanged.

use crate::parser::ParseError;
use crate::resolver::ResolveError;

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[derive(Debug)]
pub enum Error {
    /// The signature text failed to parse.
    Parse(ParseError),

    /// The parsed signature failed to resolve against the environment.
    Resolve(ResolveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Resolve(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        Error::Resolve(err)
    }
}
