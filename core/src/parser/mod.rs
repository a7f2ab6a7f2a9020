mod error;
mod parsed_sig;
pub mod parser;

pub use error::{ParseError, ParseErrorKind, convert_pest_error};
pub use parsed_sig::{Constraint, SigEntry, Signature, Span};
pub use parser::{Rule, SignatureParser, parse};
