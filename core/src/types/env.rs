//! The default type environment.
//!
//! A standard descriptor set covering the types most signatures reference.
//! Callers extend or replace it freely; the resolver only ever sees a slice
//! of descriptors and indexes it by short name, with later entries
//! shadowing earlier ones.

use crate::Vec;
use crate::types::manager::TypeManager;
use crate::types::types::Type;
use crate::vec;

/// Builds the built-in environment against `tm`'s arena.
///
/// Generic entries (`Array`, `Either`, `Maybe`, `Pair`, `StrMap`) are
/// stored applied to `Unknown` placeholders; resolution instantiates them
/// with concrete arguments.
pub fn default_env<'a>(tm: &'a TypeManager<'a>) -> Vec<&'a Type<'a>> {
    let unknown = tm.unknown();
    vec![
        tm.unary("Array", unknown),
        tm.nullary("Boolean"),
        tm.binary("Either", unknown, unknown),
        tm.unary("Maybe", unknown),
        tm.nullary("Null"),
        tm.nullary("Number"),
        tm.nullary("Object"),
        tm.binary("Pair", unknown, unknown),
        tm.unary("StrMap", unknown),
        tm.nullary("String"),
        tm.nullary("Undefined"),
    ]
}
