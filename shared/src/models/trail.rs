//! Trail data models

use serde::{Deserialize, Serialize};

use crate::types::{Coordinates, Difficulty, TrailType};

/// Where a trail is located
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailLocation {
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates: Coordinates,
}

/// Trail statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailStats {
    /// Trail length in kilometers
    pub distance: f64,
    /// Total elevation gain in meters
    pub elevation_gain: f64,
    /// Estimated completion time in minutes
    pub estimated_time: i64,
    pub difficulty: Difficulty,
    pub trail_type: TrailType,
}

/// Facilities available at or near a trail
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFacilities {
    pub parking: bool,
    pub toilets: bool,
    pub water_points: bool,
    pub campsites: bool,
}

/// A hiking trail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: String,
    /// Places identifier for fetching authoritative photos and details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub name: String,
    pub description: String,
    pub location: TrailLocation,
    pub stats: TrailStats,
    pub facilities: TrailFacilities,
    pub safety_notes: Vec<String>,
    pub path: Vec<Coordinates>,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: i64,
}
