//! Conservative cleanup rewrites over parsed HCL
//!
//! Two rewrites, both licensed only for shapes they can prove safe:
//! unwrapping interpolation-only string values ([value]) and modernizing
//! legacy quoted type constraints ([types]). The walker in [walk] decides
//! which rewrite an attribute gets based on its enclosing block chain.
//! Everything that does not match a rewrite's exact guard passes through
//! untouched.

pub mod trim;
pub mod types;
pub mod value;
pub mod walk;

pub use trim::trim_newlines;
pub use types::simplify_type;
pub use value::simplify_value;
pub use walk::{clean_body, clean_document};
