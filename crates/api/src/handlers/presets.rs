//! Handlers for the background preset catalog and the editor palette.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use wedcard_core::catalog::{Preset, PRESET_COLORS, PRESET_FONTS};
use wedcard_core::descriptor::{FontFamily, Theme};
use wedcard_core::design::{font_stack, FontWeight};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PresetQuery {
    pub theme: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse<'a> {
    pub theme: Theme,
    pub presets: Vec<&'a Preset>,
}

#[derive(Debug, Serialize)]
pub struct FontResponse {
    pub family: FontFamily,
    pub regular: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub colors: &'static [&'static str],
    pub fonts: Vec<FontResponse>,
}

/// GET /api/v1/presets?theme=
///
/// List preset categories in catalog order, optionally for one theme.
pub async fn list_presets(
    State(state): State<AppState>,
    Query(query): Query<PresetQuery>,
) -> AppResult<impl IntoResponse> {
    let theme: Option<Theme> = query
        .theme
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::parse::<Theme>)
        .transpose()?;

    let categories: Vec<CategoryResponse<'_>> = state
        .catalog
        .categories()
        .iter()
        .filter(|c| theme.map_or(true, |t| c.theme == t))
        .map(|c| CategoryResponse {
            theme: c.theme,
            presets: c.presets.values().collect(),
        })
        .collect();

    Ok(Json(DataResponse { data: categories }).into_response())
}

/// GET /api/v1/presets/palette
///
/// Selectable colors and font families with their concrete typefaces.
pub async fn palette() -> AppResult<impl IntoResponse> {
    let fonts = PRESET_FONTS
        .iter()
        .map(|&family| FontResponse {
            family,
            regular: font_stack(family, FontWeight::Regular),
            bold: font_stack(family, FontWeight::Bold),
            italic: font_stack(family, FontWeight::Italic),
        })
        .collect();

    Ok(Json(DataResponse {
        data: PaletteResponse {
            colors: PRESET_COLORS,
            fonts,
        },
    }))
}
