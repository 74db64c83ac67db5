// src/services/selector.rs
// DOCUMENTATION: Selected-amenity state behind the amenity checkboxes
// PURPOSE: Track checked amenities and produce the heading label

use crate::models::{Amenity, SearchFilter};

/// Ordered id -> name mapping of checked amenities
/// DOCUMENTATION: Iteration order is first-check order; re-checking an id keeps
/// its slot and overwrites the name
#[derive(Debug, Clone, Default)]
pub struct AmenitySelector {
    selected: Vec<Amenity>,
}

impl AmenitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one checkbox change event
    pub fn toggle(&mut self, id: &str, name: &str, checked: bool) {
        let position = self.selected.iter().position(|a| a.id == id);

        match (checked, position) {
            (true, Some(i)) => self.selected[i].name = name.to_string(),
            (true, None) => self.selected.push(Amenity::new(id, name)),
            (false, Some(i)) => {
                self.selected.remove(i);
            }
            (false, None) => {}
        }

        log::debug!(
            "Amenity {} ({}) {} - {} selected",
            id,
            name,
            if checked { "checked" } else { "unchecked" },
            self.selected.len()
        );
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|a| a.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Checked amenities in mapping order
    #[cfg(test)]
    pub fn selected(&self) -> &[Amenity] {
        &self.selected
    }

    /// Identifiers in mapping order, the only part sent to the search endpoint
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().map(|a| a.id.clone()).collect()
    }

    /// Names joined by ", ", or None when nothing is checked
    pub fn label(&self) -> Option<String> {
        if self.selected.is_empty() {
            return None;
        }

        Some(
            self.selected
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn to_filter(&self) -> SearchFilter {
        SearchFilter {
            amenities: self.ids(),
        }
    }
}
