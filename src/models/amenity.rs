// src/models/amenity.rs
// DOCUMENTATION: Amenity records served by GET /api/v1/amenities
// PURPOSE: Source of the checkbox list rendered on the listing page

use serde::{Deserialize, Serialize};

/// Amenity as returned by the HBNB API
/// Only the fields the page needs are kept; the rest of the payload is ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// Amenity identifier, sent back in search filters
    pub id: String,

    /// Display name shown next to the checkbox and in the heading label
    pub name: String,
}

impl Amenity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
