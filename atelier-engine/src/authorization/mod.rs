//! Authorization Scope Resolver
//!
//! Resolves which categories/products an authorization grant covers and
//! builds the submission payload for a new authorization request:
//! - [`CategoryIndex`]: derived indices over the category forest, including
//!   descendant expansion
//! - [`is_product_authorized`]: membership test against existing grants
//! - [`SelectionSet`]: atomic category/product selection toggling
//! - [`build_request`]: scope classification and notes serialization

mod membership;
mod payload;
mod selection;
mod tree;

pub use membership::is_product_authorized;
pub use payload::{NOTES_NAME_LIMIT, build_request, classify_scope};
pub use selection::SelectionSet;
pub use tree::CategoryIndex;
