use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Card routes mounted at `/cards`.
///
/// ```text
/// GET  /{owner_id}          -> get_card
/// PUT  /{owner_id}          -> save_card
/// POST /{owner_id}/disable  -> disable_card
/// POST /{owner_id}/preview  -> preview_card
/// GET  /{owner_id}/view     -> view_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{owner_id}", get(cards::get_card).put(cards::save_card))
        .route("/{owner_id}/disable", post(cards::disable_card))
        .route("/{owner_id}/preview", post(cards::preview_card))
        .route("/{owner_id}/view", get(cards::view_card))
}
