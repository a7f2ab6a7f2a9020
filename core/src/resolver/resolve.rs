use crate::errors::Error;
use crate::parser::{self, SigEntry};
use crate::resolver::constraints::{ConstraintMap, resolve_constraints};
use crate::resolver::error::ResolveError;
use crate::resolver::index::NameIndex;
use crate::types::manager::TypeManager;
use crate::types::{Type, TypeClass};
use crate::{ToString, Vec};
use ecow::EcoString;
use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// The outcome of resolving one signature: the declared name, the classes
/// constraining each type variable, and one descriptor per parameter plus
/// the return type, in source order.
#[derive(Debug)]
pub struct Resolution<'a> {
    pub name: EcoString,
    pub constraints: ConstraintMap<'a>,
    pub types: Vec<&'a Type<'a>>,
}

/// Resolves `signature` against `env` and `classes`.
///
/// Builds both short-name indexes, parses the signature, resolves its
/// constraint clause and its type tree, and packages the result. Pure:
/// the environment is never mutated, every failure from the walk
/// propagates unchanged, and no state survives the call.
pub fn resolve<'a>(
    types: &'a TypeManager<'a>,
    classes: &[&'a TypeClass<'a>],
    env: &[&'a Type<'a>],
    signature: &str,
) -> Result<Resolution<'a>, Error> {
    let type_index = NameIndex::build(types.arena(), env);
    let class_index = NameIndex::build(types.arena(), classes);
    trace!(
        types = env.len(),
        classes = classes.len(),
        "indexed environment"
    );

    let sig = parser::parse(signature)?;
    let constraints = resolve_constraints(&class_index, &sig.constraints)?;
    let mut resolver = Resolver::new(types, type_index);
    let resolved = resolver.resolve_entries(&sig.entries)?;
    debug!(name = %sig.name, types = resolved.len(), "resolved signature");

    Ok(Resolution {
        name: sig.name,
        constraints,
        types: resolved,
    })
}

/// Walks one signature's type tree.
///
/// Constructed fresh per pass: the variable memo tables live here, so
/// same-named variables resolve to one descriptor within a pass and are
/// never shared across passes.
pub struct Resolver<'a> {
    types: &'a TypeManager<'a>,
    index: NameIndex<'a, Type<'a>>,
    vars: HashMap<EcoString, &'a Type<'a>>,
    applied_vars: HashMap<EcoString, u32>,
}

impl<'a> Resolver<'a> {
    pub fn new(types: &'a TypeManager<'a>, index: NameIndex<'a, Type<'a>>) -> Self {
        Self {
            types,
            index,
            vars: HashMap::new(),
            applied_vars: HashMap::new(),
        }
    }

    /// Resolves a sequence of entries in order, then elides every thunk
    /// sentinel from the result.
    pub fn resolve_entries(
        &mut self,
        entries: &[SigEntry],
    ) -> Result<Vec<&'a Type<'a>>, ResolveError> {
        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            resolved.push(self.resolve_entry(entry)?);
        }
        let thunk = self.types.thunk();
        resolved.retain(|ty| !core::ptr::eq(*ty, thunk));
        Ok(resolved)
    }

    /// Resolves one entry to its descriptor.
    pub fn resolve_entry(&mut self, entry: &SigEntry) -> Result<&'a Type<'a>, ResolveError> {
        match entry {
            SigEntry::Var(name) => Ok(self.type_var(name)),

            SigEntry::Constructor { name, args } if args.is_empty() => self.lookup(name),

            SigEntry::Constructor { name, args } => {
                let mut resolved: SmallVec<[&'a Type<'a>; 2]> = SmallVec::new();
                for arg in args {
                    resolved.push(self.resolve_entry(arg)?);
                }
                let generic = self.lookup(name)?;
                self.instantiate(generic, &resolved)
            }

            SigEntry::Function(children) => {
                let mut resolved = Vec::with_capacity(children.len());
                for child in children {
                    resolved.push(self.resolve_entry(child)?);
                }
                // Right fold: the last child is the innermost return type.
                let mut rev = resolved.into_iter().rev();
                let mut ty = rev.next().ok_or_else(|| ResolveError::UnrecognizedEntry {
                    kind: "function without children".to_string(),
                })?;
                for param in rev {
                    ty = self.types.function(param, ty);
                }
                Ok(ty)
            }

            SigEntry::List(elem) => {
                let elem = self.resolve_entry(elem)?;
                Ok(self.types.list(elem))
            }

            SigEntry::Record(fields) => {
                let mut resolved = Vec::with_capacity(fields.len());
                for (name, value) in fields {
                    resolved.push((name.as_str(), self.resolve_entry(value)?));
                }
                Ok(self.types.record(resolved))
            }

            SigEntry::Constrained { var, arg } => {
                let arg = self.resolve_entry(arg)?;
                let id = self.applied_var_id(var);
                Ok(self.types.unary_var(id, var, arg))
            }

            SigEntry::Thunk => Ok(self.types.thunk()),

            SigEntry::Method(_) => Err(ResolveError::UnrecognizedEntry {
                kind: entry.kind().to_string(),
            }),
        }
    }

    // Same name, same pass: same descriptor.
    fn type_var(&mut self, name: &EcoString) -> &'a Type<'a> {
        if let Some(&ty) = self.vars.get(name.as_str()) {
            return ty;
        }
        let ty = self.types.fresh_var(name);
        self.vars.insert(name.clone(), ty);
        ty
    }

    // Occurrences of one constrained variable share an id, so `f a` and
    // `f b` stay correlated.
    fn applied_var_id(&mut self, name: &EcoString) -> u32 {
        if let Some(&id) = self.applied_vars.get(name.as_str()) {
            return id;
        }
        let id = self.types.fresh_var_id();
        self.applied_vars.insert(name.clone(), id);
        id
    }

    fn lookup(&self, name: &str) -> Result<&'a Type<'a>, ResolveError> {
        self.index
            .lookup(name)
            .ok_or_else(|| ResolveError::UnknownType {
                name: name.to_string(),
                available: self.index.available(),
            })
    }

    // Applies a generic descriptor to concrete arguments: same name, bound
    // slots, new descriptor. The generic entry itself is never touched.
    fn instantiate(
        &self,
        generic: &'a Type<'a>,
        args: &[&'a Type<'a>],
    ) -> Result<&'a Type<'a>, ResolveError> {
        let expected = generic.arity();
        if args.len() != expected {
            return Err(ResolveError::ArityMismatch {
                name: generic.short_name().to_string(),
                expected,
                got: args.len(),
            });
        }
        match generic {
            Type::Unary { name, .. } => Ok(self.types.unary(name, args[0])),
            Type::Binary { name, .. } => Ok(self.types.binary(name, args[0], args[1])),
            _ => unreachable!("nullary descriptors never pass the arity check with arguments"),
        }
    }
}
