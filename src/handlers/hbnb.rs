// src/handlers/hbnb.rs
// DOCUMENTATION: HTTP handlers for the dynamic listing page
// PURPOSE: Build a page per request, run its load/search events, return HTML

use crate::errors::PageError;
use crate::models::{Amenity, SearchFilter};
use crate::services::{render, CatalogCache, HbnbApiClient, ListingApi, PageController};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

/// Query string of GET /4-hbnb/
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Comma-separated amenity ids to pre-check, e.g. "id1,id2"
    pub amenities: Option<String>,
}

impl PageQuery {
    pub fn amenity_ids(&self) -> Vec<String> {
        self.amenities
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Amenity catalog sorted by name, from cache when fresh
/// A failed fetch yields an empty catalog and is not cached
async fn load_catalog<A: ListingApi>(api: &A, cache: &CatalogCache) -> Vec<Amenity> {
    if let Some(catalog) = cache.get().await {
        return catalog;
    }

    match api.amenities().await {
        Ok(mut catalog) => {
            catalog.sort_by(|a, b| a.name.cmp(&b.name));
            cache.set(catalog.clone()).await;
            catalog
        }
        Err(e) => {
            log::warn!("Amenity catalog unavailable, rendering without filters: {}", e);
            Vec::new()
        }
    }
}

/// GET /4-hbnb/
/// Full listing page: status poll plus one search, filtered when the query
/// pre-checks amenities
pub async fn listing_page(
    api: web::Data<HbnbApiClient>,
    cache: web::Data<CatalogCache>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let catalog = load_catalog(api.get_ref(), cache.get_ref()).await;
    let controller = PageController::new(api.into_inner());

    for id in query.amenity_ids() {
        match catalog.iter().find(|a| a.id == id) {
            Some(amenity) => {
                controller
                    .toggle_amenity(&amenity.id, &amenity.name, true)
                    .await
            }
            None => log::warn!("Ignoring unknown amenity id: {}", id),
        }
    }

    let has_selection = !controller.page().await.selector().is_empty();
    if has_selection {
        controller.initialize_filtered().await;
    } else {
        controller.initialize().await;
    }

    let page = controller.page().await;
    let html = render::render_page(&page, &catalog, Uuid::new_v4()).into_string();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// POST /4-hbnb/places
/// Rendered place cards for a search filter
pub async fn places_fragment(
    api: web::Data<HbnbApiClient>,
    filter: web::Json<SearchFilter>,
) -> Result<HttpResponse, PageError> {
    let filter = filter.into_inner();

    if filter.amenities.iter().any(|id| id.trim().is_empty()) {
        return Err(PageError::InvalidInput(
            "amenity ids must not be blank".to_string(),
        ));
    }

    let places = api.places_search(&filter).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render::render_places(&places).into_string()))
}

/// Configuration for listing page routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/4-hbnb")
            .route("", web::get().to(listing_page))
            .route("/", web::get().to(listing_page))
            .route("/places", web::post().to(places_fragment)),
    );
}
