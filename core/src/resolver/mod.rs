mod constraints;
mod error;
mod index;
mod resolve;

pub use constraints::{ConstraintMap, resolve_constraints};
pub use error::ResolveError;
pub use index::{NameIndex, Named};
pub use resolve::{Resolution, Resolver, resolve};
