//! Read-time migration from a [`StoredCard`] to a [`CardDescriptor`].
//!
//! Runs once per load. The `cardDesign` blob is parsed and its present
//! fields are folded over the discrete columns; the merged record is then
//! normalized into the single in-memory schema. An unparsable blob is
//! logged and ignored.

use crate::descriptor::{
    normalize_opacity, parse_or_default, CardDescriptor, CardDesignBlob, StoredCard,
    DEFAULT_OVERLAY_OPACITY,
};
use crate::resolver::parse_asset_ref;

/// Outcome of applying the legacy blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobMerge {
    /// No blob was stored.
    Absent,
    /// The blob parsed and its fields took precedence.
    Applied { version: u32 },
    /// The blob did not parse; the discrete columns were used as-is.
    Skipped,
}

/// Fold the blob over the columns. Present blob fields always win.
pub fn merge_blob(stored: StoredCard) -> (StoredCard, BlobMerge) {
    let raw = match stored.card_design.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => return (stored, BlobMerge::Absent),
    };

    let blob: CardDesignBlob = match serde_json::from_str(&raw) {
        Ok(blob) => blob,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse cardDesign blob, using stored columns");
            return (stored, BlobMerge::Skipped);
        }
    };

    let version = blob.schema_version();
    let mut merged = stored;

    // A present `null` clears the column; the blank value then takes the
    // field's default during normalization.
    macro_rules! take {
        ($($field:ident),+ $(,)?) => {
            $(if let Some(value) = blob.$field.clone() {
                merged.$field = Some(value.unwrap_or_default());
            })+
        };
    }
    take!(
        theme,
        custom_text,
        font_family,
        font_size,
        name_font_size,
        text_color,
        background_color,
        accent_color,
        text_align,
        resize_mode,
        plate_type,
        plate_color,
    );

    if let Some(opacity) = blob.overlay_opacity {
        let fraction = blob.opacity_is_fraction() && (0.0..=1.0).contains(&opacity);
        merged.overlay_opacity = Some(if fraction { opacity * 100.0 } else { opacity });
    }
    if let Some(scale) = blob.background_scale {
        merged.background_scale = Some(scale);
    }
    if let Some(image) = blob.background_image.clone() {
        merged.background_image = image;
    }
    if let Some(video) = blob.background_video.clone() {
        merged.background_video = video;
    }

    // v1 mobile writers kept video URIs in `backgroundImage` and flagged
    // them through `backgroundType`.
    let flagged_video = blob
        .background_type
        .as_deref()
        .map(|t| t.eq_ignore_ascii_case("video"))
        .unwrap_or(false);
    if flagged_video && is_blank(merged.background_video.as_deref()) {
        if let Some(image) = merged.background_image.take() {
            if parse_asset_ref(&image).is_some() {
                merged.background_image = Some(image);
            } else {
                merged.background_video = Some(image);
            }
        }
    }

    (merged, BlobMerge::Applied { version })
}

/// Normalize merged columns into a descriptor, applying defaults.
pub fn from_columns(stored: &StoredCard) -> CardDescriptor {
    let column = |value: &Option<String>| value.clone().unwrap_or_default();

    let mut card = CardDescriptor {
        enabled: stored.enabled,
        theme: parse_or_default(stored.theme.as_deref()),
        custom_text: column(&stored.custom_text),
        font_family: parse_or_default(stored.font_family.as_deref()),
        font_size: column(&stored.font_size),
        name_font_size: column(&stored.name_font_size),
        text_color: column(&stored.text_color),
        background_color: column(&stored.background_color),
        accent_color: column(&stored.accent_color),
        overlay_opacity: stored
            .overlay_opacity
            .map(normalize_opacity)
            .unwrap_or(DEFAULT_OVERLAY_OPACITY),
        text_align: parse_or_default(stored.text_align.as_deref()),
        resize_mode: parse_or_default(stored.resize_mode.as_deref()),
        plate_type: parse_or_default(stored.plate_type.as_deref()),
        plate_color: column(&stored.plate_color),
        background_scale: stored.background_scale.unwrap_or(1.0),
        background_image: column(&stored.background_image),
        background_video: column(&stored.background_video),
    };
    card.normalize();
    card
}

/// Migrate a stored record into the in-memory descriptor.
pub fn upgrade(stored: StoredCard) -> CardDescriptor {
    let (merged, outcome) = merge_blob(stored);
    if let BlobMerge::Applied { version } = outcome {
        tracing::debug!(version, "Applied cardDesign blob over stored columns");
    }
    from_columns(&merged)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{PlateType, TextAlign, Theme, DEFAULT_TEXT_COLOR};

    fn stored_with_blob(blob: &str) -> StoredCard {
        StoredCard {
            enabled: true,
            text_color: Some("#000000".into()),
            card_design: Some(blob.into()),
            ..StoredCard::default()
        }
    }

    #[test]
    fn blob_fields_take_precedence_over_columns() {
        let card = upgrade(stored_with_blob(r##"{"textColor":"#FFFFFF"}"##));
        assert_eq!(card.text_color, "#FFFFFF");
    }

    #[test]
    fn malformed_blob_is_skipped() {
        let (merged, outcome) = merge_blob(stored_with_blob("{not json"));
        assert_eq!(outcome, BlobMerge::Skipped);
        assert_eq!(from_columns(&merged).text_color, "#000000");
    }

    #[test]
    fn absent_blob_uses_columns() {
        let stored = StoredCard {
            plate_type: Some("SOLID".into()),
            text_align: Some("right".into()),
            ..StoredCard::default()
        };
        let (merged, outcome) = merge_blob(stored);
        assert_eq!(outcome, BlobMerge::Absent);
        let card = from_columns(&merged);
        assert_eq!(card.plate_type, PlateType::Solid);
        assert_eq!(card.text_align, TextAlign::Right);
    }

    #[test]
    fn present_null_clears_column() {
        let stored = StoredCard {
            background_image: Some("https://x/a.jpg".into()),
            card_design: Some(r#"{"backgroundImage": null}"#.into()),
            ..StoredCard::default()
        };
        assert_eq!(upgrade(stored).background_image, "");
    }

    #[test]
    fn legacy_video_in_image_slot_moves_to_video() {
        let stored = StoredCard {
            card_design: Some(
                r#"{"backgroundImage": "file:///clip", "backgroundType": "VIDEO"}"#.into(),
            ),
            ..StoredCard::default()
        };
        let card = upgrade(stored);
        assert_eq!(card.background_video, "file:///clip");
        assert_eq!(card.background_image, "");
    }

    #[test]
    fn legacy_fraction_opacity_is_normalized() {
        let card = upgrade(stored_with_blob(r#"{"overlayOpacity": 0.3}"#));
        assert_eq!(card.overlay_opacity, 30);
    }

    #[test]
    fn defaults_fill_missing_columns() {
        let card = upgrade(StoredCard::default());
        let defaults = CardDescriptor::default();
        assert_eq!(card, defaults);
        assert_eq!(card.theme, Theme::Habesha);
    }

    #[test]
    fn versioned_blob_reports_version() {
        let (_, outcome) = merge_blob(stored_with_blob(r#"{"version": 2}"#));
        assert_eq!(outcome, BlobMerge::Applied { version: 2 });
    }

    #[test]
    fn null_blob_fields_clear_their_columns() {
        let stored = StoredCard {
            text_color: Some("#000000".into()),
            custom_text: Some("old body".into()),
            plate_type: Some("SOLID".into()),
            card_design: Some(
                r#"{"textColor": null, "customText": null, "plateType": null}"#.into(),
            ),
            ..StoredCard::default()
        };
        let card = upgrade(stored);
        assert_eq!(card.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(card.custom_text, "");
        assert_eq!(card.plate_type, PlateType::Glass);
    }

    #[test]
    fn absent_blob_fields_keep_their_columns() {
        let stored = StoredCard {
            custom_text: Some("old body".into()),
            card_design: Some(r#"{"version": 2}"#.into()),
            ..StoredCard::default()
        };
        assert_eq!(upgrade(stored).custom_text, "old body");
    }

    #[test]
    fn web_editor_full_opacity_stays_opaque() {
        let card = upgrade(stored_with_blob(
            r#"{"backgroundType": "image", "fontSize": "1.5rem", "overlayOpacity": 1}"#,
        ));
        assert_eq!(card.overlay_opacity, 100);
        assert_eq!(card.overlay_alpha(), 1.0);

        let card = upgrade(stored_with_blob(r#"{"backgroundType": "image", "overlayOpacity": 0}"#));
        assert_eq!(card.overlay_opacity, 0);
    }

    #[test]
    fn mobile_percent_opacity_is_kept() {
        let card = upgrade(stored_with_blob(r#"{"backgroundType": "IMAGE", "overlayOpacity": 1}"#));
        assert_eq!(card.overlay_opacity, 1);
    }

    #[test]
    fn blank_columns_read_as_defaults() {
        let stored = StoredCard {
            text_color: Some("  ".into()),
            accent_color: Some(String::new()),
            background_image: Some(" https://x/a.jpg ".into()),
            ..StoredCard::default()
        };
        let card = upgrade(stored);
        assert_eq!(card.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(card.accent_color, CardDescriptor::default().accent_color);
        assert_eq!(card.background_image, "https://x/a.jpg");
    }
}
