//! Trail photo discovery and proxying
//!
//! Three sources, tried in order of fidelity: Places photo references for a
//! known place, Custom Search for a free-text query, and a seeded picsum
//! placeholder so every trail always renders with an image. Resolved query
//! URLs are cached in memory for a day to conserve search quota.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::external::{ImageSearchClient, PlacesClient};
use crate::Config;

/// How long a resolved image URL stays cached
const CACHE_TTL_HOURS: i64 = 24;

/// User agent sent when fetching third-party images
const IMAGE_USER_AGENT: &str = "Mozilla/5.0 (compatible; TrailFinder/1.0)";

/// Where a proxied image came from, reported in `X-Image-Source`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Places,
    Search,
    Picsum,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Places => "places",
            ImageSource::Search => "google",
            ImageSource::Picsum => "picsum",
        }
    }
}

#[derive(Debug, Clone)]
struct CachedUrl {
    url: String,
    source: ImageSource,
    expires: DateTime<Utc>,
}

/// Shared TTL cache of resolved image URLs, keyed by query + cache key
#[derive(Clone, Default)]
pub struct PhotoUrlCache {
    entries: Arc<RwLock<HashMap<String, CachedUrl>>>,
}

impl PhotoUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get(&self, key: &str) -> Option<(String, ImageSource)> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|cached| cached.expires > Utc::now())
            .map(|cached| (cached.url.clone(), cached.source))
    }

    async fn insert(&self, key: String, url: String, source: ImageSource) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CachedUrl {
                url,
                source,
                expires: Utc::now() + Duration::hours(CACHE_TTL_HOURS),
            },
        );
    }
}

/// Photo resolution and proxying service
#[derive(Clone)]
pub struct PhotoService {
    http: reqwest::Client,
    places: Option<PlacesClient>,
    image_search: Option<ImageSearchClient>,
    cache: PhotoUrlCache,
}

impl PhotoService {
    /// Create a photo service from the application config
    pub fn new(http: reqwest::Client, config: Arc<Config>, cache: PhotoUrlCache) -> Self {
        let places = config.google.is_configured().then(|| {
            PlacesClient::new(
                http.clone(),
                config.google.maps_api_key.clone(),
                config.google.places_endpoint.clone(),
            )
        });
        let image_search = config.google.search_is_configured().then(|| {
            ImageSearchClient::new(
                http.clone(),
                config.google.maps_api_key.clone(),
                config.google.search_engine_id.clone(),
                config.google.search_endpoint.clone(),
            )
        });
        Self {
            http,
            places,
            image_search,
            cache,
        }
    }

    /// List proxied Places photo URLs for a place id or text query.
    ///
    /// Tries place details first (authoritative), then a text search whose
    /// top hit supplies the photos. Returns an empty list when the places
    /// client is unavailable or nothing matches.
    pub async fn places_photo_urls(
        &self,
        place_id: Option<&str>,
        query: Option<&str>,
        count: usize,
    ) -> AppResult<Vec<String>> {
        let places = match &self.places {
            Some(places) => places,
            None => return Ok(vec![]),
        };

        if let Some(place_id) = place_id {
            let photos = places.place_photos(place_id).await?;
            if !photos.is_empty() {
                return Ok(proxy_urls(photos, place_id, count));
            }
        }

        if let Some(query) = query {
            let results = places.text_search(query).await?;
            if let Some(top) = results.into_iter().next() {
                let photos = match top.photos {
                    Some(photos) if !photos.is_empty() => photos,
                    _ => places.place_photos(&top.place_id).await?,
                };
                if !photos.is_empty() {
                    return Ok(proxy_urls(photos, &top.place_id, count));
                }
            }
        }

        Ok(vec![])
    }

    /// Stream the bytes of a Places photo reference
    pub async fn fetch_place_photo(&self, photo_reference: &str) -> AppResult<(Vec<u8>, String)> {
        let places = self
            .places
            .as_ref()
            .ok_or_else(|| AppError::Configuration("places API key not configured".to_string()))?;
        places.fetch_photo(photo_reference).await
    }

    /// Resolve an image URL for a query and fetch its bytes.
    ///
    /// Resolution order: URL cache, Custom Search, seeded picsum fallback.
    /// If fetching the resolved URL fails, a fresh picsum fallback is tried
    /// before giving up.
    pub async fn fetch_query_image(
        &self,
        query: &str,
        cache_key: &str,
    ) -> AppResult<(Vec<u8>, String, ImageSource)> {
        let full_key = format!("{}-{}", query.to_lowercase(), cache_key);

        let (url, source) = match self.cache.get(&full_key).await {
            Some(hit) => hit,
            None => {
                let resolved = self.resolve_query_url(query, &full_key).await;
                self.cache
                    .insert(full_key.clone(), resolved.0.clone(), resolved.1)
                    .await;
                resolved
            }
        };

        match self.fetch_image(&url).await {
            Ok((bytes, content_type)) => Ok((bytes, content_type, source)),
            Err(e) => {
                tracing::warn!("Image fetch failed for {}: {}", url, e);
                let fallback = picsum_url(&format!("{}fallback", full_key));
                let (bytes, content_type) = self.fetch_image(&fallback).await?;
                Ok((bytes, content_type, ImageSource::Picsum))
            }
        }
    }

    async fn resolve_query_url(&self, query: &str, full_key: &str) -> (String, ImageSource) {
        if let Some(search) = &self.image_search {
            match search.find_image(query).await {
                Ok(Some(url)) => return (url, ImageSource::Search),
                Ok(None) => {}
                Err(e) => tracing::warn!("Image search failed: {}", e),
            }
        }
        (picsum_url(full_key), ImageSource::Picsum)
    }

    async fn fetch_image(&self, url: &str) -> AppResult<(Vec<u8>, String)> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, IMAGE_USER_AGENT)
            .header(reqwest::header::ACCEPT, "image/*")
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("image fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "image fetch returned {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalService(format!("image body failed: {}", e)))?;

        Ok((bytes.to_vec(), content_type))
    }
}

fn proxy_urls(
    mut photos: Vec<crate::external::places::PlacePhoto>,
    place_id: &str,
    count: usize,
) -> Vec<String> {
    // Largest photos first
    photos.sort_by_key(|photo| std::cmp::Reverse(photo.width * photo.height));
    photos
        .iter()
        .take(count)
        .map(|photo| {
            format!(
                "/api/place-photo?photoRef={}&placeId={}",
                urlencoding::encode(&photo.photo_reference),
                place_id
            )
        })
        .collect()
}

/// Stable placeholder image URL seeded from the key
pub fn picsum_url(key: &str) -> String {
    format!("https://picsum.photos/seed/{}/800/500", seed_hash(key))
}

/// FNV-1a hash, used to derive stable seeds from strings
pub fn seed_hash(value: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in value.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
