use crate::{String, ToString};

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// A failure raised while resolving a signature against the environment.
///
/// Every failure is terminal for the pass: nothing is retried and no
/// partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A constructor name the indexed environment does not contain.
    UnknownType { name: String, available: String },

    /// A constraint names a class absent from the indexed class list.
    UnknownTypeClass { name: String, available: String },

    /// A generic applied to the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// An AST node the resolver has no rule for. Signals an out-of-sync
    /// parser/resolver contract, not a user mistake.
    UnrecognizedEntry { kind: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownType { name, available } => {
                write!(
                    f,
                    "Type {} not found in env. Available types are: {}",
                    name, available
                )
            }
            ResolveError::UnknownTypeClass { name, available } => {
                write!(
                    f,
                    "Type class {} not found. Available type classes are: {}",
                    name, available
                )
            }
            ResolveError::ArityMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Type {} expects {} argument{}, got {}",
                    name,
                    spell_count(*expected),
                    if *expected == 1 { "" } else { "s" },
                    spell_count(*got)
                )
            }
            ResolveError::UnrecognizedEntry { kind } => {
                write!(f, "Don't know what to do with signature entry {}", kind)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolveError {}

// Small counts read better in words.
fn spell_count(n: usize) -> String {
    match n {
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        _ => return n.to_string(),
    }
    .to_string()
}
