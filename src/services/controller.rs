// src/services/controller.rs
// DOCUMENTATION: Event handling for a listing page
// PURPOSE: Bind the HBNB API client to a ListingPage (load, checkbox change, search click)

use crate::models::SearchFilter;
use crate::services::{ListingApi, ListingPage, SearchOutcome};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Controller for one page instance
/// DOCUMENTATION: The page lock is released while a request is in flight,
/// so checkbox events and further searches are never blocked by the network
pub struct PageController<A> {
    api: Arc<A>,
    page: Mutex<ListingPage>,
}

impl<A: ListingApi> PageController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            page: Mutex::new(ListingPage::new()),
        }
    }

    /// Page load: status poll and unfiltered search, concurrently
    pub async fn initialize(&self) -> SearchOutcome {
        let ((), outcome) = tokio::join!(self.poll_status(), self.search_with(SearchFilter::default()));
        outcome
    }

    /// Page load with amenities already checked: status poll and filtered search only
    pub async fn initialize_filtered(&self) -> SearchOutcome {
        let ((), outcome) = tokio::join!(self.poll_status(), self.search());
        outcome
    }

    /// Single status poll
    pub async fn poll_status(&self) {
        let result = self.api.status().await;
        self.page.lock().await.apply_status(result);
    }

    /// Checkbox change event
    pub async fn toggle_amenity(&self, id: &str, name: &str, checked: bool) {
        self.page.lock().await.toggle_amenity(id, name, checked);
    }

    /// Search button: filter by the currently checked amenities
    pub async fn search(&self) -> SearchOutcome {
        let filter = self.page.lock().await.current_filter();
        self.search_with(filter).await
    }

    /// Run one search and apply it unless a newer one was issued meanwhile
    pub async fn search_with(&self, filter: SearchFilter) -> SearchOutcome {
        let ticket = self.page.lock().await.begin_search(filter);
        log::debug!(
            "Places search #{} issued with {} amenities",
            ticket.generation,
            ticket.filter.amenities.len()
        );

        let result = self.api.places_search(&ticket.filter).await;
        self.page.lock().await.complete_search(&ticket, result)
    }

    /// Locked access to the page, for rendering
    pub async fn page(&self) -> MutexGuard<'_, ListingPage> {
        self.page.lock().await
    }
}
