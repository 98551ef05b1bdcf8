use axum::routing::get;
use axum::Router;

use crate::handlers::presets;
use crate::state::AppState;

/// Catalog routes mounted at `/presets`.
///
/// ```text
/// GET /          -> list_presets (optional ?theme=)
/// GET /palette   -> palette
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(presets::list_presets))
        .route("/palette", get(presets::palette))
}
