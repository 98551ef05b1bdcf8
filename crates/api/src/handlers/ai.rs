//! Handler for AI background generation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateImageRequest {
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_url: String,
}

/// POST /api/v1/ai/generate-image
///
/// Forward a prompt to the image-generation service. The result is a
/// candidate only; nothing is stored.
pub async fn generate_image(
    State(state): State<AppState>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let prompt = input.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest("Prompt is required".to_string()));
    }

    let image_url = state.generator.generate(prompt).await?;
    if image_url.trim().is_empty() {
        return Err(AppError::InternalError(
            "Image service returned an empty URL".to_string(),
        ));
    }

    tracing::info!(prompt_len = prompt.len(), "Generated background image");
    Ok(Json(DataResponse {
        data: GenerateImageResponse { image_url },
    }))
}
