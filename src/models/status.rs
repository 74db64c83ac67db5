// src/models/status.rs
// DOCUMENTATION: Status endpoint payload and the indicator state derived from it
// PURPOSE: Model every observable outcome of the status poll

use serde::{Deserialize, Serialize};

/// Body of GET /api/v1/status/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// State of the #api_status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// Poll not completed yet
    #[default]
    Pending,
    /// API answered {"status": "OK"}
    Available,
    /// API answered with any other status value
    Down,
    /// Request failed (transport, HTTP status or body)
    Unreachable,
}

impl ApiStatus {
    /// Map a successful status response onto the indicator
    pub fn from_response(response: &StatusResponse) -> Self {
        if response.status == "OK" {
            ApiStatus::Available
        } else {
            ApiStatus::Down
        }
    }

    /// CSS classes carried by the indicator element
    pub fn css_classes(&self) -> &'static [&'static str] {
        match self {
            ApiStatus::Available => &["available"],
            ApiStatus::Unreachable => &["unreachable"],
            ApiStatus::Pending | ApiStatus::Down => &[],
        }
    }
}
