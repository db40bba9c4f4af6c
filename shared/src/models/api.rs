//! API response envelopes

use serde::{Deserialize, Serialize};

use crate::models::{Trail, Weather};
use crate::suitability::HikingSuitability;

/// Response for trail search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailsResponse {
    pub trails: Vec<Trail>,
    pub total: usize,
}

/// Response for the weather endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub weather: Weather,
    pub suitability: HikingSuitability,
}

/// Response for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Response for image discovery endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
    pub source: String,
}
