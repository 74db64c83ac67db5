// src/models/place.rs
// DOCUMENTATION: Place records returned by POST /api/v1/places_search/
// PURPOSE: Read-only listing data, alive for one render pass

use serde::{Deserialize, Deserializer, Serialize};

/// Any JSON number; null and missing both read as 0
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Place listing as serialized by the HBNB API
/// DOCUMENTATION: The API sends the full storage dict (ids, city_id, timestamps...)
/// Only the fields rendered on a card are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place identifier (not rendered)
    #[serde(default)]
    pub id: Option<String>,

    /// Listing title
    pub name: String,

    /// Nightly price in dollars
    #[serde(default, deserialize_with = "number_or_zero")]
    pub price_by_night: f64,

    /// Guest capacity
    #[serde(default, deserialize_with = "number_or_zero")]
    pub max_guest: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub number_rooms: f64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub number_bathrooms: f64,

    /// Free-text description; null, missing and empty are all "absent"
    #[serde(default)]
    pub description: Option<String>,
}

impl Place {
    /// Description if the listing has a non-empty one
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
