//! Milner - Hindley-Milner signature resolution for runtime type checking
//!
//! # Overview
//!
//! Milner resolves a human-written type signature such as
//! `"foo :: Functor f => (a -> b) -> f a -> f b"` against an environment of
//! known type descriptors. The result is the declared function name, the
//! type classes constraining each type variable, and the ordered list of
//! parameter/return descriptors with every generic instantiated and every
//! same-named variable unified to one descriptor: everything a runtime
//! checking wrapper needs to validate calls against the signature.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use milner::{TypeManager, default_env, resolve};
//!
//! // Create an arena for type descriptors
//! let arena = Bump::new();
//! let types = TypeManager::new(&arena);
//! let env = default_env(types);
//!
//! let resolution = resolve(types, &[], &env, "add :: Number -> Number -> Number").unwrap();
//! assert_eq!(resolution.name, "add");
//! assert_eq!(resolution.types.len(), 3);
//! assert!(resolution.constraints.is_empty());
//! ```
//!
//! # Custom environments and type classes
//!
//! The environment is an ordered slice of descriptors; later entries shadow
//! earlier ones, and namespaced names (`"my-package/Widget"`) are matched by
//! their bare short name:
//!
//! ```
//! use bumpalo::Bump;
//! use milner::{TypeClass, TypeManager, default_env, resolve};
//!
//! let arena = Bump::new();
//! let types = TypeManager::new(&arena);
//!
//! let widget = types.nullary("my-package/Widget");
//! let mut env = default_env(types);
//! env.push(widget);
//!
//! let functor = TypeClass::new(&arena, "Functor");
//!
//! let resolution = resolve(
//!     types,
//!     &[functor],
//!     &env,
//!     "render :: Functor f => f Widget -> f Widget",
//! )
//! .unwrap();
//! assert_eq!(resolution.constraints["f"].len(), 1);
//! ```
//!
//! Resolution is pure and synchronous: no global state, no I/O, and every
//! failure (unknown type, unknown class, wrong arity) is returned as an
//! [`Error`] carrying a ready-to-show message.

// Re-export public API from milner_core
pub use milner_core::errors::Error;
pub use milner_core::parser::{self, Constraint, ParseError, SigEntry, Signature, parse};
pub use milner_core::resolver::{
    ConstraintMap, NameIndex, Resolution, ResolveError, Resolver, resolve, resolve_constraints,
};

// Re-export commonly used types
pub use milner_core::types::{self, Type, TypeClass, env::default_env, manager::TypeManager};
