// src/services/testing.rs
// DOCUMENTATION: Test doubles for the HBNB API
// PURPOSE: In-memory ListingApi stub and a throwaway actix server speaking the real wire format

use crate::errors::PageError;
use crate::models::{Amenity, Place, SearchFilter, StatusResponse};
use crate::services::ListingApi;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Listings known to the test doubles, with the amenity ids each place offers
pub fn sample_listings() -> Vec<(Place, Vec<&'static str>)> {
    vec![
        (
            Place {
                id: Some("p1".to_string()),
                name: "Beach house".to_string(),
                price_by_night: 150.0,
                max_guest: 4.0,
                number_rooms: 2.0,
                number_bathrooms: 1.0,
                description: Some("Steps from the sand".to_string()),
            },
            vec!["1", "2", "3"],
        ),
        (
            Place {
                id: Some("p2".to_string()),
                name: "Cabin".to_string(),
                price_by_night: 60.0,
                max_guest: 1.0,
                number_rooms: 1.0,
                number_bathrooms: 0.0,
                description: None,
            },
            vec!["1", "2"],
        ),
    ]
}

pub fn sample_amenities() -> Vec<Amenity> {
    vec![
        Amenity::new("1", "Wifi"),
        Amenity::new("2", "Pool"),
        Amenity::new("3", "TV"),
    ]
}

/// Places offering every requested amenity, in listing order
pub fn matching_places(filter: &SearchFilter) -> Vec<Place> {
    sample_listings()
        .into_iter()
        .filter(|(_, offered)| {
            filter
                .amenities
                .iter()
                .all(|id| offered.contains(&id.as_str()))
        })
        .map(|(place, _)| place)
        .collect()
}

/// In-memory ListingApi
pub struct StubApi {
    reachable: bool,
    unfiltered_delay: Option<Duration>,
    status_calls: Mutex<usize>,
    search_calls: Mutex<Vec<SearchFilter>>,
}

impl StubApi {
    pub fn healthy() -> Self {
        Self {
            reachable: true,
            unfiltered_delay: None,
            status_calls: Mutex::new(0),
            search_calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the API host refused connections
    pub fn down() -> Self {
        Self {
            reachable: false,
            ..Self::healthy()
        }
    }

    /// Delay answers to unfiltered searches
    pub fn with_unfiltered_delay(mut self, delay: Duration) -> Self {
        self.unfiltered_delay = Some(delay);
        self
    }

    pub fn status_calls(&self) -> usize {
        *self.status_calls.lock().unwrap()
    }

    pub fn search_calls(&self) -> Vec<SearchFilter> {
        self.search_calls.lock().unwrap().clone()
    }

    fn refused() -> PageError {
        PageError::Unreachable("connection refused".to_string())
    }
}

impl ListingApi for StubApi {
    async fn status(&self) -> Result<StatusResponse, PageError> {
        *self.status_calls.lock().unwrap() += 1;
        if !self.reachable {
            return Err(Self::refused());
        }
        Ok(StatusResponse {
            status: "OK".to_string(),
        })
    }

    async fn places_search(&self, filter: &SearchFilter) -> Result<Vec<Place>, PageError> {
        self.search_calls.lock().unwrap().push(filter.clone());
        if let (Some(delay), true) = (self.unfiltered_delay, filter.is_empty()) {
            tokio::time::sleep(delay).await;
        }
        if !self.reachable {
            return Err(Self::refused());
        }
        Ok(matching_places(filter))
    }

    async fn amenities(&self) -> Result<Vec<Amenity>, PageError> {
        if !self.reachable {
            return Err(Self::refused());
        }
        Ok(sample_amenities())
    }
}

/// Behaviour of the fake HTTP API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeMode {
    /// Correct answers for every endpoint
    Healthy,
    /// Status answers {"status": "KO"}
    Degraded,
    /// Status sends a non-JSON body, other endpoints answer 500
    Failing,
    /// Unfiltered searches are correct; filtered ones return records the
    /// page cannot read (missing name, null counts, nested extras)
    Malformed,
}

struct FakeState {
    mode: FakeMode,
    filters: Arc<Mutex<Vec<SearchFilter>>>,
}

/// HBNB API served by actix on an ephemeral local port
pub struct FakeHbnbApi {
    pub base_url: String,
    filters: Arc<Mutex<Vec<SearchFilter>>>,
}

impl FakeHbnbApi {
    /// Start the server on the current actix system
    pub async fn start(mode: FakeMode) -> Self {
        let filters = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(FakeState {
            mode,
            filters: filters.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route("/api/v1/status/", web::get().to(fake_status))
                .route("/api/v1/places_search/", web::post().to(fake_places_search))
                .route("/api/v1/amenities", web::get().to(fake_amenities))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake HBNB API");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{}", addr),
            filters,
        }
    }

    /// Search bodies received so far, in arrival order
    pub fn received_filters(&self) -> Vec<SearchFilter> {
        self.filters.lock().unwrap().clone()
    }
}

async fn fake_status(state: web::Data<FakeState>) -> impl Responder {
    match state.mode {
        FakeMode::Healthy | FakeMode::Malformed => HttpResponse::Ok().json(StatusResponse {
            status: "OK".to_string(),
        }),
        FakeMode::Degraded => HttpResponse::Ok().json(StatusResponse {
            status: "KO".to_string(),
        }),
        FakeMode::Failing => HttpResponse::Ok()
            .content_type("application/json")
            .body("<html>not json</html>"),
    }
}

async fn fake_places_search(
    state: web::Data<FakeState>,
    filter: web::Json<SearchFilter>,
) -> impl Responder {
    let filter = filter.into_inner();
    state.filters.lock().unwrap().push(filter.clone());

    match state.mode {
        FakeMode::Failing => HttpResponse::InternalServerError().body("storage offline"),
        FakeMode::Malformed if !filter.is_empty() => HttpResponse::Ok().json(json!([
            { "name": "Readable", "price_by_night": 10 },
            {
                "price_by_night": null,
                "max_guest": null,
                "owner": { "profile": { "photos": [] } }
            }
        ])),
        _ => HttpResponse::Ok().json(matching_places(&filter)),
    }
}

async fn fake_amenities(state: web::Data<FakeState>) -> impl Responder {
    match state.mode {
        FakeMode::Failing => HttpResponse::InternalServerError().body("storage offline"),
        _ => HttpResponse::Ok().json(sample_amenities()),
    }
}
