//! Google Places API client
//!
//! Covers the text search, nearby search, place details and photo media
//! endpoints used for trail discovery and photo proxying.

use reqwest::Client;
use serde::Deserialize;
use shared::Coordinates;

use crate::error::{AppError, AppResult};

/// Search radius for nearby trail lookups, meters
pub const NEARBY_RADIUS_METERS: u32 = 50_000;

/// Maximum width requested for proxied photos
const PHOTO_MAX_WIDTH: u32 = 800;

/// Google Places client
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// A photo reference attached to a place
#[derive(Debug, Clone, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    pub height: i64,
    pub width: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: Coordinates,
}

/// A place returned by a search
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: PlaceGeometry,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub photos: Option<Vec<PlacePhoto>>,
    pub types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PlacesSearchResponse {
    #[serde(default)]
    results: Vec<PlaceResult>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    result: Option<PlaceDetails>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    photos: Option<Vec<PlacePhoto>>,
}

impl PlacesClient {
    /// Create a new client
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Text search for places matching a query
    pub async fn text_search(&self, query: &str) -> AppResult<Vec<PlaceResult>> {
        let url = format!(
            "{}/textsearch/json?query={}&type=park|natural_feature|tourist_attraction&key={}",
            self.base_url,
            urlencoding::encode(query),
            self.api_key
        );
        self.search(&url).await
    }

    /// Nearby search around a coordinate
    pub async fn nearby_search(&self, lat: f64, lng: f64, keyword: &str) -> AppResult<Vec<PlaceResult>> {
        let url = format!(
            "{}/nearbysearch/json?location={},{}&radius={}&type=park|natural_feature&keyword={}&key={}",
            self.base_url,
            lat,
            lng,
            NEARBY_RADIUS_METERS,
            urlencoding::encode(keyword),
            self.api_key
        );
        self.search(&url).await
    }

    /// Fetch the photo references for a place
    pub async fn place_photos(&self, place_id: &str) -> AppResult<Vec<PlacePhoto>> {
        let url = format!(
            "{}/details/json?place_id={}&fields=photos&key={}",
            self.base_url,
            urlencoding::encode(place_id),
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::PlacesApiError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PlacesApiError(format!(
                "details returned {}",
                response.status()
            )));
        }

        let data: PlaceDetailsResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApiError(format!("failed to parse details: {}", e)))?;

        if data.status != "OK" {
            return Ok(vec![]);
        }

        Ok(data.result.and_then(|r| r.photos).unwrap_or_default())
    }

    /// Download the photo bytes for a photo reference
    ///
    /// Returns the body plus its content type. The media endpoint replies
    /// with a redirect that reqwest follows automatically.
    pub async fn fetch_photo(&self, photo_reference: &str) -> AppResult<(Vec<u8>, String)> {
        let url = format!(
            "{}/photo?maxwidth={}&photo_reference={}&key={}",
            self.base_url,
            PHOTO_MAX_WIDTH,
            urlencoding::encode(photo_reference),
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::PlacesApiError(format!("photo request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PlacesApiError(format!(
                "photo returned {}",
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
            .map_err(|e| AppError::PlacesApiError(format!("photo body failed: {}", e)))?;

        Ok((bytes.to_vec(), content_type))
    }

    async fn search(&self, url: &str) -> AppResult<Vec<PlaceResult>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::PlacesApiError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PlacesApiError(format!(
                "search returned {}",
                response.status()
            )));
        }

        let data: PlacesSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApiError(format!("failed to parse search: {}", e)))?;

        match data.status.as_str() {
            "OK" => Ok(data.results),
            "ZERO_RESULTS" => Ok(vec![]),
            other => Err(AppError::PlacesApiError(format!(
                "search status {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_components_are_percent_encoded() {
        assert_eq!(
            urlencoding::encode("hiking trails singapore"),
            "hiking%20trails%20singapore"
        );
        assert_eq!(urlencoding::encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(urlencoding::encode("safe-chars_.~"), "safe-chars_.~");
    }

    #[test]
    fn test_place_result_deserializes() {
        let json = r#"{
            "place_id": "ChIJxyz",
            "name": "MacRitchie Reservoir Park",
            "formatted_address": "MacRitchie, Singapore",
            "geometry": { "location": { "lat": 1.3417, "lng": 103.8343 } },
            "rating": 4.7,
            "user_ratings_total": 12034,
            "photos": [
                { "photo_reference": "ref123", "height": 1080, "width": 1920 }
            ],
            "types": ["park", "tourist_attraction"]
        }"#;

        let place: PlaceResult = serde_json::from_str(json).unwrap();
        assert_eq!(place.place_id, "ChIJxyz");
        assert_eq!(place.geometry.location.lat, 1.3417);
        assert_eq!(place.photos.unwrap()[0].photo_reference, "ref123");
    }
}
