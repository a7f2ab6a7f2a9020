use crate::types::types::strip_namespace;
use bumpalo::Bump;
use core::fmt::Display;

/// A named capability a signature may require of a type variable, e.g.
/// `Functor` in `Functor f => (a -> b) -> f a -> f b`.
///
/// The resolver treats classes as opaque tokens matched by short name; what
/// membership in a class means is the calling checker's concern.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeClass<'a> {
    name: &'a str,
}

impl<'a> TypeClass<'a> {
    pub fn new(arena: &'a Bump, name: &str) -> &'a Self {
        let name = arena.alloc_str(name);
        arena.alloc(Self { name })
    }

    /// The full, possibly namespaced name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The name with any namespace prefix removed.
    pub fn short_name(&self) -> &'a str {
        strip_namespace(self.name)
    }
}

impl Display for TypeClass<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
