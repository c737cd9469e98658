//! Ordered, duplicate-free set of chosen symptoms.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::suggest::normalize;

/// Result of [`SelectionSet::add`]. Only `Added` changes the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` under its canonical catalog spelling. Names the catalog
    /// does not know, and names already selected, leave the set untouched.
    pub fn add(&mut self, catalog: &Catalog, name: &str) -> AddOutcome {
        let Some(canonical) = catalog.resolve(name) else {
            return AddOutcome::Unknown;
        };
        if self.contains(canonical) {
            return AddOutcome::AlreadyPresent;
        }
        self.names.push(canonical.to_string());
        AddOutcome::Added
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    /// Remove `name` if selected, compared case-insensitively.
    pub fn remove_name(&mut self, name: &str) -> Option<String> {
        let wanted = normalize(name);
        let index = self
            .names
            .iter()
            .position(|selected| normalize(selected) == wanted)?;
        self.remove(index)
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        let wanted = normalize(name);
        self.names.iter().any(|selected| normalize(selected) == wanted)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(["Sore Throat", "fever", "cough"])
    }

    #[test]
    fn adding_twice_in_any_casing_keeps_one_entry() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        assert_eq!(selection.add(&catalog, "sore throat"), AddOutcome::Added);
        assert_eq!(
            selection.add(&catalog, "  SORE  THROAT "),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(selection.names(), &["Sore Throat"]);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection.add(&catalog(), "sneezing"), AddOutcome::Unknown);
        assert!(selection.is_empty());
    }

    #[test]
    fn removal_follows_insertion_order() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        for name in ["fever", "cough", "sore throat"] {
            selection.add(&catalog, name);
        }

        assert_eq!(selection.remove(7), None);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.remove(0).as_deref(), Some("fever"));
        assert_eq!(selection.remove_last().as_deref(), Some("Sore Throat"));
        assert_eq!(selection.remove_name("COUGH").as_deref(), Some("cough"));
        assert_eq!(selection.remove_last(), None);

        selection.add(&catalog, "fever");
        selection.clear();
        assert!(selection.is_empty());
    }
}
