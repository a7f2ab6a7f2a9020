//! End-to-end signature resolution scenarios.

use bumpalo::Bump;
use milner_core::errors::Error;
use milner_core::resolver::{ResolveError, resolve};
use milner_core::types::env::default_env;
use milner_core::types::manager::TypeManager;
use milner_core::types::{Type, TypeClass};
use pretty_assertions::assert_eq;

#[test]
fn resolves_a_plain_signature_against_the_builtins() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let resolution = resolve(tm, &[], &env, "foo :: Number -> String").unwrap();

    assert_eq!(resolution.name, "foo");
    assert!(resolution.constraints.is_empty());
    assert_eq!(resolution.types.len(), 2);
    assert!(core::ptr::eq(resolution.types[0], tm.nullary("Number")));
    assert!(core::ptr::eq(resolution.types[1], tm.nullary("String")));
}

#[test]
fn signatures_without_a_constraint_clause_have_no_constraints() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    for signature in [
        "f :: Number",
        "f :: a -> b",
        "f :: Maybe a -> [a] -> { value :: a }",
    ] {
        let resolution = resolve(tm, &[], &env, signature).unwrap();
        assert!(resolution.constraints.is_empty(), "{}", signature);
    }
}

#[test]
fn a_constrained_variable_lists_its_class() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);
    let semigroup = TypeClass::new(&bump, "Semigroup");

    let resolution = resolve(tm, &[semigroup], &env, "f :: Semigroup a => a -> a").unwrap();

    let classes = &resolution.constraints["a"];
    assert_eq!(classes.len(), 1);
    assert!(core::ptr::eq(classes[0], semigroup));
}

#[test]
fn chained_constraints_keep_declaration_order() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);
    let monoid = TypeClass::new(&bump, "Monoid");
    let setoid = TypeClass::new(&bump, "Setoid");

    let resolution = resolve(
        tm,
        &[monoid, setoid],
        &env,
        "f :: (Monoid a, Setoid a) => a -> b",
    )
    .unwrap();

    let classes = &resolution.constraints["a"];
    assert_eq!(classes.len(), 2);
    assert!(core::ptr::eq(classes[0], monoid));
    assert!(core::ptr::eq(classes[1], setoid));
}

#[test]
fn same_named_variables_resolve_to_one_descriptor() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let same = resolve(tm, &[], &env, "f :: a -> a").unwrap();
    assert_eq!(same.types.len(), 2);
    assert!(core::ptr::eq(same.types[0], same.types[1]));

    let distinct = resolve(tm, &[], &env, "f :: a -> b").unwrap();
    assert_eq!(distinct.types.len(), 2);
    assert!(!core::ptr::eq(distinct.types[0], distinct.types[1]));
}

#[test]
fn a_niladic_signature_resolves_to_a_single_entry() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let resolution = resolve(tm, &[], &env, "f :: () -> Number").unwrap();
    assert_eq!(resolution.types.len(), 1);
    assert!(core::ptr::eq(resolution.types[0], tm.nullary("Number")));
}

#[test]
fn applying_a_unary_generic_to_two_arguments_fails() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let err = resolve(tm, &[], &env, "f :: Number -> StrMap Number Number").unwrap_err();
    let message = format!("{}", err);
    assert!(
        message.contains("expects one argument, got two"),
        "{}",
        message
    );
}

#[test]
fn namespaced_environment_entries_match_bare_names() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let widget = tm.nullary("ns/Widget");
    let mut env = default_env(tm);
    env.push(widget);

    let resolution = resolve(tm, &[], &env, "f :: Widget -> Widget").unwrap();
    assert!(core::ptr::eq(resolution.types[0], widget));
}

#[test]
fn resolves_a_higher_kinded_signature() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);
    let functor = TypeClass::new(&bump, "Functor");

    let resolution = resolve(
        tm,
        &[functor],
        &env,
        "foo :: Functor f => (a -> b) -> f a -> f b",
    )
    .unwrap();

    assert_eq!(resolution.name, "foo");
    assert_eq!(resolution.types.len(), 3);
    assert!(core::ptr::eq(resolution.constraints["f"][0], functor));

    // types[0] is `a -> b`; its endpoints reappear inside `f a` and `f b`.
    let (a, b) = match resolution.types[0] {
        Type::Function { param, ret } => (*param, *ret),
        other => panic!("expected a function, got {}", other),
    };
    match (resolution.types[1], resolution.types[2]) {
        (
            Type::UnaryVar {
                id: f1,
                name: n1,
                arg: arg1,
            },
            Type::UnaryVar {
                id: f2,
                name: n2,
                arg: arg2,
            },
        ) => {
            assert_eq!(n1, n2);
            assert_eq!(f1, f2);
            assert!(core::ptr::eq(*arg1, a));
            assert!(core::ptr::eq(*arg2, b));
        }
        other => panic!("expected two applications of f, got {:?}", other),
    }
}

#[test]
fn resolves_a_record_signature() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let resolution = resolve(tm, &[], &env, "foo :: { value :: Number } -> Number").unwrap();

    assert_eq!(resolution.types.len(), 2);
    match resolution.types[0] {
        Type::Record(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].0, "value");
            assert!(core::ptr::eq(fields[0].1, tm.nullary("Number")));
        }
        other => panic!("expected a record, got {}", other),
    }
}

#[test]
fn unknown_types_and_classes_report_what_is_available() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = vec![tm.nullary("Number"), tm.nullary("String")];
    let monoid = TypeClass::new(&bump, "Monoid");

    let err = resolve(tm, &[monoid], &env, "f :: Widget -> Widget").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Type Widget not found in env. Available types are: Number, String"
    );

    let err = resolve(tm, &[monoid], &env, "f :: Functor g => g Number -> Number").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Type class Functor not found. Available type classes are: Monoid"
    );
}

#[test]
fn resolution_failures_carry_structured_kinds() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let err = resolve(tm, &[], &env, "f :: Widget -> Widget").unwrap_err();
    assert!(matches!(
        err,
        Error::Resolve(ResolveError::UnknownType { .. })
    ));

    let err = resolve(tm, &[], &env, "f :: Maybe a ~> a").unwrap_err();
    assert!(matches!(
        err,
        Error::Resolve(ResolveError::UnrecognizedEntry { .. })
    ));

    let err = resolve(tm, &[], &env, "not a signature").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn environment_descriptors_pass_through_untouched() {
    let bump = Bump::new();
    let tm = TypeManager::new(&bump);
    let env = default_env(tm);

    let before: Vec<Type<'_>> = env.iter().map(|ty| (*ty).clone()).collect();
    let _ = resolve(tm, &[], &env, "f :: Maybe Number -> StrMap String").unwrap();
    let after: Vec<Type<'_>> = env.iter().map(|ty| (*ty).clone()).collect();

    assert_eq!(before, after);
}
