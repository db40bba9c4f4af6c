//! Trail search handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use shared::{Coordinates, Trail, TrailsResponse};

use crate::error::{AppError, AppResult};
use crate::services::trails::TrailService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TrailSearchQuery {
    pub q: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// GET /api/trails
///
/// Searches by text query when `q` is present, otherwise near the given
/// coordinates, otherwise a default discovery search.
pub async fn list_trails(
    State(state): State<AppState>,
    Query(params): Query<TrailSearchQuery>,
) -> AppResult<Json<TrailsResponse>> {
    let near = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => {
            shared::validate_coordinates(&Coordinates::new(lat, lng))
                .map_err(|e| AppError::ValidationError(e.to_string()))?;
            Some(Coordinates::new(lat, lng))
        }
        _ => None,
    };

    let service = TrailService::new(state.http.clone(), state.config.clone());
    let trails = service.search(params.q.as_deref(), near).await?;

    let total = trails.len();
    Ok(Json(TrailsResponse { trails, total }))
}

/// GET /api/trails/{trail_id}
///
/// Trails are not persisted server-side; clients hold the full trail object
/// from the search response, so a lookup by id always misses.
pub async fn get_trail(Path(trail_id): Path<String>) -> AppResult<Json<Trail>> {
    Err(AppError::NotFound(format!("Trail {}", trail_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_trail_always_misses() {
        let result = get_trail(Path("place-abc123".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
