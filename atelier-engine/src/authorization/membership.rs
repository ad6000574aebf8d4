//! Grant Membership
//!
//! Logic for testing whether a product is already covered by an existing
//! authorization grant.

use super::tree::CategoryIndex;
use shared::models::{AuthorizationGrant, GrantScope, ProductRecord};

/// Check whether any active grant already authorizes `product`.
///
/// A product is authorized when a grant satisfies one of:
/// - `all` scope;
/// - `specific`/`mixed` scope listing the product id;
/// - `category`/`mixed` scope listing the product's resolved category id.
///
/// Category membership is an exact id match: grant categories are NOT
/// expanded to descendants here, unlike selection toggling. A grant on a
/// parent category does not cover products filed under its children.
pub fn is_product_authorized(
    product: &ProductRecord,
    grants: &[AuthorizationGrant],
    index: &CategoryIndex,
) -> bool {
    let category_id = index
        .resolve_ref(&product.category)
        .unwrap_or_else(|| product.category.key());

    grants
        .iter()
        .filter(|g| g.is_active())
        .any(|grant| match grant.scope {
            GrantScope::All => true,
            GrantScope::Specific => grant.products.iter().any(|p| p == &product.id),
            GrantScope::Category => {
                !category_id.is_empty() && grant.categories.iter().any(|c| c == category_id)
            }
            GrantScope::Mixed => {
                grant.products.iter().any(|p| p == &product.id)
                    || (!category_id.is_empty()
                        && grant.categories.iter().any(|c| c == category_id))
            }
        })
}
