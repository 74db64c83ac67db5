// src/services/page.rs
// DOCUMENTATION: State of one listing page instance
// PURPOSE: Own the selector, status indicator and places container, and order search results

use crate::errors::PageError;
use crate::models::{ApiStatus, Place, SearchFilter, StatusResponse};
use crate::services::render;
use crate::services::AmenitySelector;

/// Handle for one issued search
/// DOCUMENTATION: Returned by begin_search and consumed by complete_search;
/// only the ticket of the latest generation may update the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub filter: SearchFilter,
}

/// What complete_search did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Container replaced with this many cards
    Rendered(usize),
    /// Request failed; container left as it was
    Failed,
    /// A newer search was issued before this one finished
    Stale,
}

/// Listing page state
/// DOCUMENTATION: Created at page initialization and dropped with the page.
/// Everything the page shows is derived from this struct.
#[derive(Debug, Default)]
pub struct ListingPage {
    selector: AmenitySelector,
    api_status: ApiStatus,
    /// Inner HTML of section.places
    places_html: String,
    rendered_count: usize,
    /// Generation of the latest issued search (0 = none yet)
    latest_generation: u64,
    last_search_error: Option<String>,
}

impl ListingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(&self) -> &AmenitySelector {
        &self.selector
    }

    /// Checkbox change event
    pub fn toggle_amenity(&mut self, id: &str, name: &str, checked: bool) {
        self.selector.toggle(id, name, checked);
    }

    /// Inner HTML of the amenities heading
    pub fn amenities_heading(&self) -> String {
        render::amenities_heading(self.selector.label().as_deref()).into_string()
    }

    pub fn api_status(&self) -> ApiStatus {
        self.api_status
    }

    /// Apply the result of the status poll
    pub fn apply_status(&mut self, result: Result<StatusResponse, PageError>) {
        self.api_status = match result {
            Ok(response) => {
                let status = ApiStatus::from_response(&response);
                log::info!("HBNB API status {:?} -> {:?}", response.status, status);
                status
            }
            Err(e) => {
                log::warn!("HBNB API status poll failed: {}", e);
                ApiStatus::Unreachable
            }
        };
    }

    /// Filter built from the current selection
    pub fn current_filter(&self) -> SearchFilter {
        self.selector.to_filter()
    }

    /// Issue a new search generation
    pub fn begin_search(&mut self, filter: SearchFilter) -> SearchTicket {
        self.latest_generation += 1;
        SearchTicket {
            generation: self.latest_generation,
            filter,
        }
    }

    pub fn is_latest(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.latest_generation
    }

    /// Apply a search result if its ticket is still the latest
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<Place>, PageError>,
    ) -> SearchOutcome {
        if !self.is_latest(ticket) {
            log::debug!(
                "Discarding stale search #{} (latest is #{})",
                ticket.generation,
                self.latest_generation
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(places) => {
                self.places_html = render::render_places(&places).into_string();
                self.rendered_count = places.len();
                self.last_search_error = None;
                SearchOutcome::Rendered(places.len())
            }
            Err(e) => {
                log::warn!(
                    "Places search #{} failed, keeping previous listing: {}",
                    ticket.generation,
                    e
                );
                self.last_search_error = Some(e.to_string());
                SearchOutcome::Failed
            }
        }
    }

    pub fn places_html(&self) -> &str {
        &self.places_html
    }

    /// Number of cards currently in the container
    #[cfg(test)]
    pub fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    #[cfg(test)]
    pub fn last_search_error(&self) -> Option<&str> {
        self.last_search_error.as_deref()
    }
}
