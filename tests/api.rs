//! The public facade re-exports everything a caller needs.

use bumpalo::Bump;
use milner::{Error, ResolveError, SigEntry, TypeClass, TypeManager, default_env, parse, resolve};
use pretty_assertions::assert_eq;

#[test]
fn resolve_through_the_facade() {
    let arena = Bump::new();
    let types = TypeManager::new(&arena);
    let env = default_env(types);
    let semigroup = TypeClass::new(&arena, "Semigroup");

    let resolution = resolve(
        types,
        &[semigroup],
        &env,
        "concat :: Semigroup a => a -> a -> a",
    )
    .unwrap();

    assert_eq!(resolution.name, "concat");
    assert_eq!(resolution.types.len(), 3);
    assert!(core::ptr::eq(resolution.types[0], resolution.types[2]));
    assert!(core::ptr::eq(resolution.constraints["a"][0], semigroup));
}

#[test]
fn parse_through_the_facade() {
    let signature = parse("map :: (a -> b) -> [a] -> [b]").unwrap();
    assert_eq!(signature.name, "map");
    assert_eq!(signature.entries.len(), 3);
    assert!(matches!(signature.entries[0], SigEntry::Function(_)));
}

#[test]
fn errors_are_matchable_at_the_facade() {
    let arena = Bump::new();
    let types = TypeManager::new(&arena);
    let env = default_env(types);

    let err = resolve(types, &[], &env, "f :: Widget -> Widget").unwrap_err();
    match err {
        Error::Resolve(ResolveError::UnknownType { name, .. }) => assert_eq!(name, "Widget"),
        other => panic!("expected an unknown type error, got {:?}", other),
    }
}
