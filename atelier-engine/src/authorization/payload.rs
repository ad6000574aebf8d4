//! Submission Payload Builder
//!
//! Classifies the operator's selection into a grant scope and serializes the
//! human-readable notes line reviewed alongside the request.

use super::selection::SelectionSet;
use super::tree::CategoryIndex;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AuthorizationRequest, GrantScope, ProductRecord};
use std::collections::HashMap;

/// Maximum number of names spelled out per side in the notes line.
/// Fixed contract with the reviewing operators, not a tunable.
pub const NOTES_NAME_LIMIT: usize = 50;

/// Classify a selection into a grant scope.
///
/// Both sides non-empty is `mixed`; one side alone is `category` or
/// `specific`; an empty selection has no scope.
pub fn classify_scope(selection: &SelectionSet) -> Option<GrantScope> {
    match (
        selection.category_ids().is_empty(),
        selection.product_ids().is_empty(),
    ) {
        (true, true) => None,
        (false, true) => Some(GrantScope::Category),
        (true, false) => Some(GrantScope::Specific),
        (false, false) => Some(GrantScope::Mixed),
    }
}

/// Build the submission payload for a new authorization request.
///
/// Fails with [`ErrorCode::GrantScopeEmpty`] on an empty selection; the
/// caller surfaces that as a blocking toast and sends nothing.
pub fn build_request(
    manufacturer_id: &str,
    selection: &SelectionSet,
    index: &CategoryIndex,
    products: &[ProductRecord],
    valid_until: Option<NaiveDate>,
) -> AppResult<AuthorizationRequest> {
    let scope = classify_scope(selection).ok_or_else(|| AppError::new(ErrorCode::GrantScopeEmpty))?;

    let categories = selection.sorted_categories();
    let product_ids = selection.sorted_products();

    let product_names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    // Unknown ids fall back to the id itself so the notes stay complete
    let category_labels: Vec<&str> = categories
        .iter()
        .map(|id| index.name_of(id).unwrap_or(id.as_str()))
        .collect();
    let product_labels: Vec<&str> = product_ids
        .iter()
        .map(|id| product_names.get(id.as_str()).copied().unwrap_or(id.as_str()))
        .collect();

    let notes = build_notes(scope, &category_labels, &product_labels);

    let request = AuthorizationRequest {
        manufacturer_id: manufacturer_id.to_string(),
        scope,
        categories,
        products: product_ids,
        valid_until,
        notes,
    };
    request.validate()?;
    Ok(request)
}

/// Serialize the operator-facing notes line.
///
/// Shape: `scope=mixed; categories(3): A, B, C; products(2): X, Y`
/// with at most [`NOTES_NAME_LIMIT`] names spelled out per side.
fn build_notes(scope: GrantScope, category_names: &[&str], product_names: &[&str]) -> String {
    let mut notes = format!("scope={}", scope.label());
    push_section(&mut notes, "categories", category_names);
    push_section(&mut notes, "products", product_names);
    notes
}

fn push_section(out: &mut String, label: &str, names: &[&str]) {
    if names.is_empty() {
        return;
    }
    let shown = &names[..names.len().min(NOTES_NAME_LIMIT)];
    out.push_str(&format!("; {}({}): {}", label, names.len(), shown.join(", ")));
    if names.len() > NOTES_NAME_LIMIT {
        out.push_str(&format!(" \u{2026}(+{} more)", names.len() - NOTES_NAME_LIMIT));
    }
}
