//! Repository for the `wedding_cards` table.

use sqlx::PgPool;

use crate::models::wedding_card::{UpsertWeddingCard, WeddingCard};

/// Column list for `wedding_cards` queries.
const COLUMNS: &str = "\
    id, owner_id, enabled, theme, custom_text, font_family, font_size, \
    name_font_size, text_color, background_color, accent_color, overlay_opacity, \
    text_align, resize_mode, plate_type, plate_color, background_scale, \
    background_image, background_video, card_design, created_at, updated_at";

/// Provides data access for wedding cards.
pub struct WeddingCardRepo;

impl WeddingCardRepo {
    /// Get the card for `owner_id`, or `None` if it was never saved.
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Option<WeddingCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wedding_cards WHERE owner_id = $1");
        sqlx::query_as::<_, WeddingCard>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the card for `owner_id`.
    ///
    /// Every column is overwritten; a `NULL` in the DTO clears the column.
    pub async fn upsert(
        pool: &PgPool,
        owner_id: &str,
        dto: &UpsertWeddingCard,
    ) -> Result<WeddingCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO wedding_cards \
                 (owner_id, enabled, theme, custom_text, font_family, font_size, \
                  name_font_size, text_color, background_color, accent_color, \
                  overlay_opacity, text_align, resize_mode, plate_type, plate_color, \
                  background_scale, background_image, background_video, card_design) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, \
                     $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             ON CONFLICT (owner_id) DO UPDATE SET \
                 enabled = EXCLUDED.enabled, \
                 theme = EXCLUDED.theme, \
                 custom_text = EXCLUDED.custom_text, \
                 font_family = EXCLUDED.font_family, \
                 font_size = EXCLUDED.font_size, \
                 name_font_size = EXCLUDED.name_font_size, \
                 text_color = EXCLUDED.text_color, \
                 background_color = EXCLUDED.background_color, \
                 accent_color = EXCLUDED.accent_color, \
                 overlay_opacity = EXCLUDED.overlay_opacity, \
                 text_align = EXCLUDED.text_align, \
                 resize_mode = EXCLUDED.resize_mode, \
                 plate_type = EXCLUDED.plate_type, \
                 plate_color = EXCLUDED.plate_color, \
                 background_scale = EXCLUDED.background_scale, \
                 background_image = EXCLUDED.background_image, \
                 background_video = EXCLUDED.background_video, \
                 card_design = EXCLUDED.card_design, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeddingCard>(&query)
            .bind(owner_id)
            .bind(dto.enabled)
            .bind(&dto.theme)
            .bind(&dto.custom_text)
            .bind(&dto.font_family)
            .bind(&dto.font_size)
            .bind(&dto.name_font_size)
            .bind(&dto.text_color)
            .bind(&dto.background_color)
            .bind(&dto.accent_color)
            .bind(dto.overlay_opacity)
            .bind(&dto.text_align)
            .bind(&dto.resize_mode)
            .bind(&dto.plate_type)
            .bind(&dto.plate_color)
            .bind(dto.background_scale)
            .bind(&dto.background_image)
            .bind(&dto.background_video)
            .bind(&dto.card_design)
            .fetch_one(pool)
            .await
    }

    /// Flip the `enabled` column only. Returns `false` if no card exists.
    pub async fn set_enabled(
        pool: &PgPool,
        owner_id: &str,
        enabled: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE wedding_cards SET enabled = $2, updated_at = NOW() WHERE owner_id = $1",
        )
        .bind(owner_id)
        .bind(enabled)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
