use crate::parser::parsed_sig::Span;
use crate::parser::parser::Rule;
use crate::{String, ToString, Vec, format};

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// Parser error with source location.
#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors.
#[derive(Debug)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// A lowercase type variable applied to more than one argument
    ConstrainedArity { var: String, got: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "Expected {}, found {}", expected, found)
            }
            ParseErrorKind::ConstrainedArity { var, got } => {
                write!(
                    f,
                    "Constrained type variable {} takes one argument, got {}",
                    var, got
                )
            }
            ParseErrorKind::Other { message } => write!(f, "{}", message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Convert a Pest error to a human-readable ParseError.
pub fn convert_pest_error(err: pest::error::Error<Rule>, _source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span::new(pos, pos),
        pest::error::InputLocation::Span((start, end)) => Span::new(start, end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_rules(&positives),
            found: if negatives.is_empty() {
                "unexpected input".to_string()
            } else {
                format_rules(&negatives)
            },
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span)
}

// Group grammar rules into the higher-level concepts a user thinks in.
fn format_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = match rule {
            Rule::ident | Rule::segment | Rule::part => "a name",
            Rule::application
            | Rule::thunk
            | Rule::group
            | Rule::list
            | Rule::record
            | Rule::chain => "a type",
            Rule::arrow | Rule::wave => "an arrow",
            Rule::constraints | Rule::constraint => "a constraint",
            Rule::field => "a record field",
            Rule::EOI => "end of signature",
            _ => "a signature",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.len() {
        0 => "something else".to_string(),
        1 => concepts[0].to_string(),
        _ => {
            let last = concepts.pop().expect("length checked above");
            format!("{} or {}", concepts.join(", "), last)
        }
    }
}
