//! Google Custom Search client for trail imagery
//!
//! Used by the photo proxy when a query-based lookup is requested.
//! Landscape-oriented results are preferred since the UI renders wide cards.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Google Custom Search client
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    api_key: String,
    search_engine_id: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    items: Option<Vec<SearchItem>>,
    error: Option<SearchError>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
    image: ImageInfo,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    height: i64,
    width: i64,
}

#[derive(Debug, Deserialize)]
struct SearchError {
    message: String,
}

impl ImageSearchClient {
    /// Create a new client
    pub fn new(client: Client, api_key: String, search_engine_id: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            search_engine_id,
            base_url,
        }
    }

    /// Find an image URL for a query, preferring landscape orientation
    pub async fn find_image(&self, query: &str) -> AppResult<Option<String>> {
        let search_query = format!("{} hiking trail nature scenery", query);
        let url = format!(
            "{}?key={}&cx={}&q={}&searchType=image&imgSize=large&imgType=photo&num=3&safe=active",
            self.base_url,
            self.api_key,
            self.search_engine_id,
            urlencoding::encode(&search_query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ImageSearchError(format!("request failed: {}", e)))?;

        let data: CustomSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::ImageSearchError(format!("failed to parse response: {}", e)))?;

        if let Some(error) = data.error {
            tracing::warn!("Custom Search error: {}", error.message);
            return Ok(None);
        }

        let items = match data.items {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(None),
        };

        let link = items
            .iter()
            .find(|item| item.image.width > item.image.height)
            .or_else(|| items.first())
            .map(|item| item.link.clone());

        Ok(link)
    }
}
