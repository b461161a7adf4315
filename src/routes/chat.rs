use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Parsed leniently: an unreadable or non-JSON body is treated as an empty
    // request, so every message-less POST gets the same 400 JSON error
    // instead of the framework's plain-text rejections.
    let payload: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("No message provided".to_string()));
    }

    // The message goes to the model verbatim; the request stays blocked until
    // the upstream answers. Failures become a 500 with the error text.
    let response = state.generator.generate(trimmed).await.map_err(|e| {
        tracing::error!(error = ?e, "Error generating response");
        e
    })?;

    Ok(Json(ChatResponse { response }))
}
