pub mod env;
pub mod manager;
mod type_class;
mod types;


pub use type_class::TypeClass;
pub use types::{Type, strip_namespace};
