//! Selection State
//!
//! Tracks which categories and products the operator has picked for a new
//! authorization request. Category toggling is atomic over the whole
//! descendant span: a parent is never left half-selected.

use super::tree::CategoryIndex;
use std::collections::HashSet;

/// Selected category and product ids for one authorization request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    categories: HashSet<String>,
    products: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A category counts as selected only when ALL ids in its descendant
    /// span are present.
    pub fn is_category_selected(&self, index: &CategoryIndex, category_id: &str) -> bool {
        index
            .descendant_ids(category_id)
            .iter()
            .all(|id| self.categories.contains(id))
    }

    /// Toggle a category and its whole descendant span, atomically.
    ///
    /// Fully selected span: every id is removed. Anything less (including a
    /// partial selection left by toggling a child): the full span is added.
    /// Toggling twice always returns the set to its original state.
    pub fn toggle_category(&mut self, index: &CategoryIndex, category_id: &str) {
        let span = index.descendant_ids(category_id);
        if span.iter().all(|id| self.categories.contains(id)) {
            for id in &span {
                self.categories.remove(id);
            }
        } else {
            self.categories.extend(span);
        }
    }

    pub fn is_product_selected(&self, product_id: &str) -> bool {
        self.products.contains(product_id)
    }

    /// Toggle a single product id
    pub fn toggle_product(&mut self, product_id: &str) {
        if !self.products.remove(product_id) {
            self.products.insert(product_id.to_string());
        }
    }

    pub fn category_ids(&self) -> &HashSet<String> {
        &self.categories
    }

    pub fn product_ids(&self) -> &HashSet<String> {
        &self.products
    }

    /// Selected category ids in stable order, for payloads and display
    pub fn sorted_categories(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.categories.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Selected product ids in stable order, for payloads and display
    pub fn sorted_products(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.products.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.products.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.products.clear();
    }
}
