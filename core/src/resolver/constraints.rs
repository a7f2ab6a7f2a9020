use crate::parser::Constraint;
use crate::{ToString, Vec};
use crate::resolver::error::ResolveError;
use crate::resolver::index::NameIndex;
use crate::types::TypeClass;
use ecow::EcoString;
use hashbrown::HashMap;

/// Type-variable name to the classes constraining it, in declaration order.
pub type ConstraintMap<'a> = HashMap<EcoString, Vec<&'a TypeClass<'a>>>;

/// Resolves the parsed constraint pairs against the class index.
///
/// One variable may carry several constraints: `(Monoid a, Setoid a)`
/// yields `a: [Monoid, Setoid]`. A signature with no constraint clause
/// yields an empty map.
pub fn resolve_constraints<'a>(
    classes: &NameIndex<'a, TypeClass<'a>>,
    pairs: &[Constraint],
) -> Result<ConstraintMap<'a>, ResolveError> {
    let mut resolved = ConstraintMap::new();
    for pair in pairs {
        let class = classes
            .lookup(&pair.class)
            .ok_or_else(|| ResolveError::UnknownTypeClass {
                name: pair.class.to_string(),
                available: classes.available(),
            })?;
        resolved.entry(pair.var.clone()).or_default().push(class);
    }
    Ok(resolved)
}
