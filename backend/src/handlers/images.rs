//! Image discovery and proxy handlers

use axum::extract::{Query, State};
use axum::http::header::{self, HeaderName};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shared::ImagesResponse;

use crate::error::{AppError, AppResult};
use crate::services::photos::{ImageSource, PhotoService};
use crate::AppState;

const CACHE_CONTROL_VALUE: &str = "public, max-age=86400, s-maxage=86400";
const X_IMAGE_SOURCE: HeaderName = HeaderName::from_static("x-image-source");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesQuery {
    pub query: Option<String>,
    pub place_id: Option<String>,
    pub count: Option<usize>,
}

/// GET /api/images
///
/// Lists proxied photo URLs for a place id or free-text query.
pub async fn list_images(
    State(state): State<AppState>,
    Query(params): Query<ImagesQuery>,
) -> AppResult<Json<ImagesResponse>> {
    if params.query.is_none() && params.place_id.is_none() {
        return Err(AppError::MissingParameter("query"));
    }
    let count = params.count.unwrap_or(5).min(10);

    let service = PhotoService::new(
        state.http.clone(),
        state.config.clone(),
        state.photo_cache.clone(),
    );
    let images = service
        .places_photo_urls(params.place_id.as_deref(), params.query.as_deref(), count)
        .await?;

    Ok(Json(ImagesResponse {
        images,
        source: "google-places".to_string(),
    }))
}

#[derive(Serialize)]
pub struct TrailImageResponse {
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailImageQuery {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub count: Option<usize>,
}

/// GET /api/trail-image
///
/// Like /api/images but shaped for trail cards; misses return 404 so the
/// client can fall back to its own placeholder.
pub async fn get_trail_image(
    State(state): State<AppState>,
    Query(params): Query<TrailImageQuery>,
) -> AppResult<Json<TrailImageResponse>> {
    if params.name.is_none() && params.place_id.is_none() {
        return Err(AppError::MissingParameter("name"));
    }
    let count = params.count.unwrap_or(2).min(5);

    let service = PhotoService::new(
        state.http.clone(),
        state.config.clone(),
        state.photo_cache.clone(),
    );
    let images = service
        .places_photo_urls(params.place_id.as_deref(), params.name.as_deref(), count)
        .await?;

    if images.is_empty() {
        return Err(AppError::NotFound("Trail image".to_string()));
    }

    Ok(Json(TrailImageResponse { images }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePhotoQuery {
    pub photo_ref: Option<String>,
    pub query: Option<String>,
    pub cache_key: Option<String>,
}

/// GET /api/place-photo
///
/// Proxies image bytes. A `photoRef` streams the referenced provider photo;
/// otherwise a `query` resolves through search with a placeholder fallback.
pub async fn get_place_photo(
    State(state): State<AppState>,
    Query(params): Query<PlacePhotoQuery>,
) -> AppResult<impl IntoResponse> {
    let service = PhotoService::new(
        state.http.clone(),
        state.config.clone(),
        state.photo_cache.clone(),
    );

    let (bytes, content_type, source) = if let Some(photo_ref) = &params.photo_ref {
        let (bytes, content_type) = service.fetch_place_photo(photo_ref).await?;
        (bytes, content_type, ImageSource::Places)
    } else if let Some(query) = &params.query {
        let cache_key = params.cache_key.as_deref().unwrap_or("default");
        service.fetch_query_image(query, cache_key).await?
    } else {
        return Err(AppError::MissingParameter("photoRef"));
    };

    let headers = [
        (header::CONTENT_TYPE, content_type),
        (header::CACHE_CONTROL, CACHE_CONTROL_VALUE.to_string()),
        (X_IMAGE_SOURCE, source.as_str().to_string()),
    ];
    Ok((headers, bytes))
}
