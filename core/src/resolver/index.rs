use crate::types::{Type, TypeClass, strip_namespace};
use crate::{String, Vec};
use bumpalo::Bump;

/// Anything an environment can hold: looked up by short name.
pub trait Named {
    fn full_name(&self) -> &str;
}

impl Named for Type<'_> {
    fn full_name(&self) -> &str {
        self.name()
    }
}

impl Named for TypeClass<'_> {
    fn full_name(&self) -> &str {
        self.name()
    }
}

/// Short-name lookup table over an ordered collection of descriptors.
///
/// Indexing never validates: a missing name is only detected at lookup
/// time. Later entries with the same short name shadow earlier ones, so an
/// environment list behaves like a mapping built by fold.
#[derive(Debug)]
pub struct NameIndex<'a, T> {
    // Sorted by short name for binary search.
    entries: &'a [(&'a str, &'a T)],
}

impl<'a, T: Named> NameIndex<'a, T> {
    pub fn build(arena: &'a Bump, items: &[&'a T]) -> Self {
        let mut entries: Vec<(&'a str, &'a T)> = Vec::with_capacity(items.len());
        for &item in items {
            let short = strip_namespace(item.full_name());
            match entries.iter().position(|(name, _)| *name == short) {
                Some(i) => entries[i].1 = item,
                None => entries.push((short, item)),
            }
        }
        entries.sort_by_key(|(name, _)| *name);
        Self {
            entries: arena.alloc_slice_copy(&entries),
        }
    }

    pub fn lookup(&self, short_name: &str) -> Option<&'a T> {
        self.entries
            .binary_search_by_key(&short_name, |&(name, _)| name)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Every known short name, comma-separated, for error messages.
    pub fn available(&self) -> String {
        let names: Vec<&str> = self.entries.iter().map(|(name, _)| *name).collect();
        names.join(", ")
    }
}
