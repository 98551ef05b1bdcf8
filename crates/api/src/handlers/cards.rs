//! Handlers for wedding card design, preview and guest view.
//!
//! Writes go through an [`EditorSession`](wedcard_core::editor::EditorSession)
//! so the HTTP surface stores exactly what the editor would.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use wedcard_core::composer::CardLayout;
use wedcard_core::descriptor::{CardDescriptor, StoredCard};
use wedcard_core::error::CoreError;
use wedcard_core::migrate;
use wedcard_db::repositories::WeddingCardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a preview response.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub layout: CardLayout,
    /// Hydration problems the editor should surface to the operator.
    pub notices: Vec<String>,
}

/// Body of a guest view response.
#[derive(Debug, Serialize)]
pub struct GuestViewResponse {
    pub available: bool,
    pub layout: Option<CardLayout>,
}

#[derive(Debug, Serialize)]
pub struct EnabledResponse {
    pub enabled: bool,
}

fn card_not_found(owner_id: String) -> CoreError {
    CoreError::NotFound {
        entity: "WeddingCard",
        owner: owner_id,
    }
}

/// GET /api/v1/cards/{owner_id}
///
/// Return the migrated descriptor for `owner_id`.
pub async fn get_card(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = WeddingCardRepo::find_by_owner(&state.pool, &owner_id)
        .await?
        .ok_or_else(|| card_not_found(owner_id.clone()))?;

    Ok(Json(DataResponse {
        data: migrate::upgrade(StoredCard::from(row)),
    }))
}

/// PUT /api/v1/cards/{owner_id}
///
/// Replace the card with the posted draft. The draft is normalized
/// (preset references, media fields, versioned blob) before it is stored;
/// the normalized descriptor is returned.
pub async fn save_card(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Json(draft): Json<CardDescriptor>,
) -> AppResult<impl IntoResponse> {
    let mut session = state.open_editor(&owner_id).await;
    session.replace_draft(draft);
    session.save().await?;

    tracing::info!(
        owner_id = %owner_id,
        enabled = session.draft().enabled,
        theme = %session.draft().theme,
        "Wedding card saved",
    );

    Ok(Json(DataResponse {
        data: session.draft().clone(),
    }))
}

/// POST /api/v1/cards/{owner_id}/disable
///
/// Hide the card from guests. The design is kept.
pub async fn disable_card(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !WeddingCardRepo::set_enabled(&state.pool, &owner_id, false).await? {
        return Err(card_not_found(owner_id).into());
    }

    tracing::info!(owner_id = %owner_id, "Wedding card disabled");
    Ok(Json(DataResponse {
        data: EnabledResponse { enabled: false },
    }))
}

/// POST /api/v1/cards/{owner_id}/preview
///
/// Compose a posted draft against the owner's wedding details without
/// storing anything.
pub async fn preview_card(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Json(draft): Json<CardDescriptor>,
) -> AppResult<impl IntoResponse> {
    let mut session = state.open_editor(&owner_id).await;
    session.replace_draft(draft);

    let notices = session
        .load_notices()
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(Json(DataResponse {
        data: PreviewResponse {
            layout: session.preview(),
            notices,
        },
    }))
}

/// GET /api/v1/cards/{owner_id}/view
///
/// Guest-facing view. Missing, disabled and unreadable cards all answer
/// `available: false`.
pub async fn view_card(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let view = state.guest_viewer().view(&owner_id).await;

    Ok(Json(DataResponse {
        data: GuestViewResponse {
            available: view.is_available(),
            layout: view.layout().cloned(),
        },
    }))
}
