use core::fmt::Display;

/// A type descriptor, as referenced from a signature and stored in the
/// type environment.
///
/// Descriptors are arena-allocated and interned by the
/// [`TypeManager`](crate::types::manager::TypeManager); two structurally
/// equal descriptors from the same manager are pointer-equal. Generic
/// environment entries are a `Unary`/`Binary` shape applied to `Unknown`
/// placeholders; instantiating one produces a new descriptor with the same
/// name and concrete arguments, never a mutation of the generic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type<'a> {
    /// Concrete type with no argument slots, e.g. `Number`.
    Nullary { name: &'a str },

    /// Unary constructor, e.g. `Maybe a`. Environment entries carry
    /// `Unknown` in the slot; instantiated descriptors carry the argument.
    Unary { name: &'a str, arg: &'a Type<'a> },

    /// Binary constructor, e.g. `Either a b`.
    Binary {
        name: &'a str,
        fst: &'a Type<'a>,
        snd: &'a Type<'a>,
    },

    /// One step of a curried function chain; `a -> b -> c` is
    /// `Function(a, Function(b, c))`.
    Function { param: &'a Type<'a>, ret: &'a Type<'a> },

    /// Homogeneous list, `[a]`.
    List(&'a Type<'a>),

    /// Structural record, `{ name :: String }`. Fields keep source order.
    Record(&'a [(&'a str, &'a Type<'a>)]),

    /// Named type variable. The id is fresh per resolution pass, so `a`
    /// from unrelated passes never compares equal.
    Var { id: u32, name: &'a str },

    /// Constrained (higher-kinded) type variable applied to an argument,
    /// `f a`. Occurrences of the same variable share one id per pass.
    UnaryVar {
        id: u32,
        name: &'a str,
        arg: &'a Type<'a>,
    },

    /// Placeholder filling the argument slots of an uninstantiated generic.
    Unknown,

    /// Sentinel for the `()` niladic marker. Elided from resolution output.
    Thunk,
}

/// Strips any `ns/` prefix: `"my-package/Widget"` -> `"Widget"`.
pub fn strip_namespace(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

impl<'a> Type<'a> {
    /// The declared name, or `""` for structural shapes that have none.
    pub fn name(&self) -> &'a str {
        match self {
            Type::Nullary { name }
            | Type::Unary { name, .. }
            | Type::Binary { name, .. }
            | Type::Var { name, .. }
            | Type::UnaryVar { name, .. } => name,
            _ => "",
        }
    }

    /// The name with any namespace prefix removed.
    pub fn short_name(&self) -> &'a str {
        strip_namespace(self.name())
    }

    /// Number of argument slots a signature may apply this descriptor to.
    pub fn arity(&self) -> usize {
        match self {
            Type::Unary { .. } => 1,
            Type::Binary { .. } => 2,
            _ => 0,
        }
    }
}

impl Display for Type<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Nullary { name } => write!(f, "{}", name),
            Type::Unary { name, arg } => {
                write!(f, "{} ", name)?;
                fmt_argument(arg, f)
            }
            Type::Binary { name, fst, snd } => {
                write!(f, "{} ", name)?;
                fmt_argument(fst, f)?;
                write!(f, " ")?;
                fmt_argument(snd, f)
            }
            Type::Function { param, ret } => {
                if matches!(param, Type::Function { .. }) {
                    write!(f, "({})", param)?;
                } else {
                    write!(f, "{}", param)?;
                }
                write!(f, " -> {}", ret)
            }
            Type::List(elem) => write!(f, "[{}]", elem),
            Type::Record(fields) => {
                write!(f, "{{ ")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} :: {}", name, ty)?;
                }
                write!(f, " }}")
            }
            Type::Var { name, .. } => write!(f, "{}", name),
            Type::UnaryVar { name, arg, .. } => {
                write!(f, "{} ", name)?;
                fmt_argument(arg, f)
            }
            Type::Unknown => write!(f, "Unknown"),
            Type::Thunk => write!(f, "()"),
        }
    }
}

// Applications and arrows need parentheses in argument position.
fn fmt_argument(arg: &Type<'_>, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match arg {
        Type::Unary { .. }
        | Type::Binary { .. }
        | Type::Function { .. }
        | Type::UnaryVar { .. } => write!(f, "({})", arg),
        _ => write!(f, "{}", arg),
    }
}
