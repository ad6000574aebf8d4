//! Session Preferences
//!
//! Explicit per-session operator preferences, injected where needed instead
//! of living in module-level global state. Nothing here is persisted by this
//! core; the hosting application decides whether and how to save it.

use super::manufacturer::Manufacturer;
use std::collections::HashSet;

/// Per-session operator preferences
#[derive(Debug, Clone, Default)]
pub struct SessionPrefs {
    /// Manufacturers the operator has hidden from listings
    hidden_manufacturers: HashSet<String>,
}

impl SessionPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide a manufacturer from listings for this session
    pub fn hide_manufacturer(&mut self, id: impl Into<String>) {
        self.hidden_manufacturers.insert(id.into());
    }

    /// Undo a hide
    pub fn unhide_manufacturer(&mut self, id: &str) {
        self.hidden_manufacturers.remove(id);
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden_manufacturers.contains(id)
    }

    /// Filter a manufacturer list down to the visible ones
    pub fn visible<'a>(&self, manufacturers: &'a [Manufacturer]) -> Vec<&'a Manufacturer> {
        manufacturers
            .iter()
            .filter(|m| !self.is_hidden(&m.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manufacturer(id: &str) -> Manufacturer {
        serde_json::from_str(&format!(r#"{{"id":"{}","name":"{}"}}"#, id, id)).unwrap()
    }

    #[test]
    fn test_hide_and_unhide() {
        let mut prefs = SessionPrefs::new();
        prefs.hide_manufacturer("m1");
        assert!(prefs.is_hidden("m1"));
        prefs.unhide_manufacturer("m1");
        assert!(!prefs.is_hidden("m1"));
    }

    #[test]
    fn test_visible_filters_hidden() {
        let all = vec![manufacturer("m1"), manufacturer("m2"), manufacturer("m3")];
        let mut prefs = SessionPrefs::new();
        prefs.hide_manufacturer("m2");

        let visible = prefs.visible(&all);
        let ids: Vec<&str> = visible.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
    }
}
