// src/models/search.rs
// DOCUMENTATION: Request body of POST /api/v1/places_search/
// PURPOSE: Carry the selected amenity identifiers to the search endpoint

use serde::{Deserialize, Serialize};

/// Search filter
/// An empty filter serializes as `{}`, the body the page sends on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl SearchFilter {
    #[cfg(test)]
    pub fn with_amenities<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            amenities: ids.into_iter().map(Into::into).collect(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.amenities.is_empty()
    }
}
