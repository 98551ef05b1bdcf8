//! Wedding card rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wedcard_core::descriptor::StoredCard;
use wedcard_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `wedding_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeddingCard {
    pub id: DbId,
    pub owner_id: String,
    pub enabled: bool,
    pub theme: Option<String>,
    pub custom_text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub name_font_size: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub accent_color: Option<String>,
    pub overlay_opacity: Option<f64>,
    pub text_align: Option<String>,
    pub resize_mode: Option<String>,
    pub plate_type: Option<String>,
    pub plate_color: Option<String>,
    pub background_scale: Option<f64>,
    pub background_image: Option<String>,
    pub background_video: Option<String>,
    pub card_design: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<WeddingCard> for StoredCard {
    fn from(row: WeddingCard) -> Self {
        StoredCard {
            enabled: row.enabled,
            theme: row.theme,
            custom_text: row.custom_text,
            font_family: row.font_family,
            font_size: row.font_size,
            name_font_size: row.name_font_size,
            text_color: row.text_color,
            background_color: row.background_color,
            accent_color: row.accent_color,
            overlay_opacity: row.overlay_opacity,
            text_align: row.text_align,
            resize_mode: row.resize_mode,
            plate_type: row.plate_type,
            plate_color: row.plate_color,
            background_scale: row.background_scale,
            background_image: row.background_image,
            background_video: row.background_video,
            card_design: row.card_design,
        }
    }
}

// ---------------------------------------------------------------------------
// DTO
// ---------------------------------------------------------------------------

/// Full replacement of a card's stored fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertWeddingCard {
    pub enabled: bool,
    pub theme: Option<String>,
    pub custom_text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub name_font_size: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub accent_color: Option<String>,
    pub overlay_opacity: Option<f64>,
    pub text_align: Option<String>,
    pub resize_mode: Option<String>,
    pub plate_type: Option<String>,
    pub plate_color: Option<String>,
    pub background_scale: Option<f64>,
    pub background_image: Option<String>,
    pub background_video: Option<String>,
    pub card_design: Option<String>,
}

impl From<&StoredCard> for UpsertWeddingCard {
    fn from(card: &StoredCard) -> Self {
        let card = card.clone();
        UpsertWeddingCard {
            enabled: card.enabled,
            theme: card.theme,
            custom_text: card.custom_text,
            font_family: card.font_family,
            font_size: card.font_size,
            name_font_size: card.name_font_size,
            text_color: card.text_color,
            background_color: card.background_color,
            accent_color: card.accent_color,
            overlay_opacity: card.overlay_opacity,
            text_align: card.text_align,
            resize_mode: card.resize_mode,
            plate_type: card.plate_type,
            plate_color: card.plate_color,
            background_scale: card.background_scale,
            background_image: card.background_image,
            background_video: card.background_video,
            card_design: card.card_design,
        }
    }
}
