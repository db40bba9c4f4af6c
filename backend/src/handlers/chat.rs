//! Assistant chat handler

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use shared::{ChatMessage, ChatResponse, HikingSuitability, Trail, Weather};

use crate::error::{AppError, AppResult};
use crate::services::chat::ChatService;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub trail_context: Option<Trail>,
    #[serde(default)]
    pub weather_context: Option<Weather>,
    #[serde(default)]
    pub suitability_context: Option<HikingSuitability>,
}

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if request.messages.is_empty() {
        return Err(AppError::ValidationError(
            "messages must not be empty".to_string(),
        ));
    }

    let service = ChatService::new(state.http.clone(), state.config.clone());
    let message = service
        .respond(
            &request.messages,
            request.trail_context.as_ref(),
            request.weather_context.as_ref(),
            request.suitability_context.as_ref(),
        )
        .await;

    Ok(Json(ChatResponse { message }))
}
