pub mod ai;
pub mod cards;
pub mod health;
pub mod presets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cards/{owner_id}                 get, replace (PUT)
/// /cards/{owner_id}/disable         hide from guests (POST)
/// /cards/{owner_id}/preview         compose a draft (POST)
/// /cards/{owner_id}/view            guest view
///
/// /presets                          catalog (?theme=)
/// /presets/palette                  colors and fonts
///
/// /ai/generate-image                generate a background (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cards", cards::router())
        .nest("/presets", presets::router())
        .nest("/ai", ai::router())
}
