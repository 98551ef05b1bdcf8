use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// AI routes mounted at `/ai`.
///
/// ```text
/// POST /generate-image -> generate_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-image", post(ai::generate_image))
}
