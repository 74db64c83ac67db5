// src/services/cache.rs
// DOCUMENTATION: In-memory cache for the amenity catalog
// PURPOSE: Avoid one GET /api/v1/amenities per page view

use crate::models::Amenity;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Amenity catalog cache with TTL
/// DOCUMENTATION: Shared by all page requests; a TTL of 0 disables caching
pub struct CatalogCache {
    entry: RwLock<Option<CacheEntry<Vec<Amenity>>>>,
    ttl: Duration,
}

impl CatalogCache {
    /// Create new cache with TTL
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Get cached catalog
    pub async fn get(&self) -> Option<Vec<Amenity>> {
        let entry = self.entry.read().await;

        match entry.as_ref() {
            Some(e) if !e.is_expired() => {
                log::debug!("Catalog cache HIT ({} amenities)", e.data.len());
                Some(e.data.clone())
            }
            Some(_) => {
                log::debug!("Catalog cache EXPIRED");
                None
            }
            None => {
                log::debug!("Catalog cache MISS");
                None
            }
        }
    }

    /// Store a freshly fetched catalog
    pub async fn set(&self, amenities: Vec<Amenity>) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entry = self.entry.write().await;
        log::debug!(
            "Catalog cache SET: {} amenities (TTL: {}s)",
            amenities.len(),
            self.ttl.as_secs()
        );
        *entry = Some(CacheEntry::new(amenities, self.ttl));
    }
}
