use crate::{Box, Vec};
use core::ops::Range;
use ecow::EcoString;

/// Byte range into the signature source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// A parsed signature: `name :: constraints => entries`.
///
/// `entries` is the top-level arrow chain in source order: one element
/// per parameter plus the return type, or a single element for an
/// arrow-free signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: EcoString,
    pub constraints: Vec<Constraint>,
    pub entries: Vec<SigEntry>,
}

/// One `Class var` pair from the constraint clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub class: EcoString,
    pub var: EcoString,
}

/// A node of the signature's type tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SigEntry {
    /// A named type, possibly applied to arguments: `Number`, `Maybe a`.
    Constructor { name: EcoString, args: Vec<SigEntry> },

    /// A nested arrow chain: `(a -> b)`.
    Function(Vec<SigEntry>),

    /// `[a]`
    List(Box<SigEntry>),

    /// `{ value :: Number }`, fields in source order.
    Record(Vec<(EcoString, SigEntry)>),

    /// A lowercase variable applied to an argument: `f a`.
    Constrained { var: EcoString, arg: Box<SigEntry> },

    /// A bare lowercase type variable: `a`.
    Var(EcoString),

    /// The `()` niladic marker.
    Thunk,

    /// A `~>` method chain. The grammar accepts it; the resolver does not.
    Method(Vec<SigEntry>),
}

impl SigEntry {
    /// The node kind as a lowercase tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SigEntry::Constructor { .. } => "type constructor",
            SigEntry::Function(_) => "function",
            SigEntry::List(_) => "list",
            SigEntry::Record(_) => "record",
            SigEntry::Constrained { .. } => "constrained type",
            SigEntry::Var(_) => "type variable",
            SigEntry::Thunk => "thunk",
            SigEntry::Method(_) => "method",
        }
    }
}
