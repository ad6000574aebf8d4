//! Category Tree Index
//!
//! Derived indices over the category forest fetched per manufacturer:
//! children by parent, names by id, names back to ids for resolving
//! polymorphic references.

use shared::models::{CategoryNode, CategoryRef};
use std::collections::{HashMap, HashSet};

/// Read-only index over a manufacturer's category forest
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    ids: HashSet<String>,
    children: HashMap<String, Vec<String>>,
    names: HashMap<String, String>,
    name_to_id: HashMap<String, String>,
    roots: Vec<String>,
}

impl CategoryIndex {
    /// Build the index from the flat node list.
    ///
    /// A `parent_id` referencing a node that does not exist is treated as a
    /// root, matching how the API behaves after a parent is deleted.
    pub fn build(nodes: &[CategoryNode]) -> Self {
        let ids: HashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut names = HashMap::new();
        let mut name_to_id = HashMap::new();
        let mut roots = Vec::new();

        for node in nodes {
            names.insert(node.id.clone(), node.name.clone());
            // First mapping wins on duplicate names
            name_to_id
                .entry(node.name.clone())
                .or_insert_with(|| node.id.clone());

            match node.parent_id.as_deref().filter(|p| ids.contains(*p)) {
                Some(parent) => children
                    .entry(parent.to_string())
                    .or_default()
                    .push(node.id.clone()),
                None => roots.push(node.id.clone()),
            }
        }

        Self { ids, children, names, name_to_id, roots }
    }

    /// All category ids implied by selecting `category_id`: the id itself
    /// plus every descendant.
    ///
    /// Non-recursive stack walk. The visited set makes the walk terminate
    /// even if the fetched data contains a cycle.
    pub fn descendant_ids(&self, category_id: &str) -> HashSet<String> {
        let mut visited = HashSet::new();
        let mut stack = vec![category_id.to_string()];

        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            if let Some(kids) = self.children.get(&id) {
                for kid in kids {
                    if !visited.contains(kid) {
                        stack.push(kid.clone());
                    }
                }
            }
        }

        visited
    }

    /// Resolve a polymorphic category reference to a known category id.
    ///
    /// A bare key is tried as an id first, then as a display name. Returns
    /// `None` when the reference matches nothing in this forest.
    pub fn resolve_ref(&self, category: &CategoryRef) -> Option<&str> {
        let key = category.key();
        if key.is_empty() {
            return None;
        }
        if let Some(id) = self.ids.get(key) {
            return Some(id.as_str());
        }
        self.name_to_id.get(key).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Root category ids, in fetch order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
