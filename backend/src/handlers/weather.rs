//! Weather handler

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use shared::WeatherResponse;

use crate::error::{AppError, AppResult};
use crate::services::weather::WeatherService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// GET /api/weather
///
/// Both coordinates are required. Past validation the endpoint always
/// succeeds: upstream failures degrade to synthetic weather.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let lat = params.lat.ok_or(AppError::MissingParameter("lat"))?;
    let lng = params.lng.ok_or(AppError::MissingParameter("lng"))?;

    shared::validate_latitude(lat).map_err(|e| AppError::ValidationError(e.to_string()))?;
    shared::validate_longitude(lng).map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = WeatherService::new(state.http.clone(), state.config.clone());
    Ok(Json(service.current(lat, lng).await))
}
