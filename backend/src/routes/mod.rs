//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// Routes mounted under /api
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/trails", get(handlers::list_trails))
        .route("/trails/:trail_id", get(handlers::get_trail))
        .route("/weather", get(handlers::get_weather))
        .route("/chat", post(handlers::chat))
        .route("/images", get(handlers::list_images))
        .route("/trail-image", get(handlers::get_trail_image))
        .route("/place-photo", get(handlers::get_place_photo))
}
