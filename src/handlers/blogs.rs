use crate::dtos::{GenerateBlogRequest, GenerateBlogResponse};
use crate::error::AppError;
use crate::services::storage_key;
use crate::startup::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use validator::Validate;

/// Success body dictated by the existing gateway contract.
const COMPLETED_MESSAGE: &str = "✅ Blog Generation is completed";

#[tracing::instrument(skip(state, request))]
pub async fn generate_blog(
    State(state): State<AppState>,
    Json(request): Json<GenerateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    tracing::info!(topic = %request.blog_topic, "Received blog topic");

    let text = state
        .generator
        .generate(&request.blog_topic)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Blog generation failed");
            AppError::BadGateway(format!("Blog generation failed: {}", e))
        })?;

    if text.is_empty() {
        tracing::warn!("No blog was generated");
        return Err(AppError::BadGateway(
            "Model returned no content".to_string(),
        ));
    }

    let key = storage_key(&state.config.storage.key_prefix, Utc::now());

    // Best effort: a failed write is logged but never changes the response.
    match state.store.put(&key, text.into_bytes()).await {
        Ok(()) => {
            tracing::info!(key = %key, "Generated blog stored");
        }
        Err(e) => {
            tracing::error!(
                key = %key,
                bucket = %state.config.storage.bucket,
                error = %e,
                "Failed to store generated blog"
            );
        }
    }

    Ok(Json(GenerateBlogResponse {
        body: COMPLETED_MESSAGE.to_string(),
    }))
}
