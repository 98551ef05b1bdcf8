//! Asset resolution: turn a stored background reference into a concrete,
//! renderable source.
//!
//! Resolution never fails. Unknown preset ids degrade to "no background"
//! and unrecognized extensions degrade to an image.

use serde::Serialize;

use crate::catalog::PresetCatalog;
use crate::descriptor::{CardDescriptor, MediaKind};

/// Prefix marking an indirect reference to a catalog preset.
pub const ASSET_PREFIX: &str = "ASSET:";

/// File extensions treated as video.
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".wmv", ".avi", ".flv"];

/// A resolved background. An empty `source` means no background layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMedia {
    pub source: String,
    pub media_kind: MediaKind,
}

impl ResolvedMedia {
    /// No background; the composer omits the layer.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// A descriptor together with its resolved background, ready to compose.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCard {
    pub descriptor: CardDescriptor,
    pub media: ResolvedMedia,
}

/// Build an `ASSET:<id>` reference.
pub fn asset_ref(preset_id: &str) -> String {
    format!("{ASSET_PREFIX}{preset_id}")
}

/// Extract the preset id from an `ASSET:<id>` reference.
pub fn parse_asset_ref(reference: &str) -> Option<&str> {
    reference.trim().strip_prefix(ASSET_PREFIX)
}

/// Guess the media kind of a direct reference from its extension.
///
/// Query strings and fragments are ignored; the literal word `video`
/// anywhere in the reference also marks it as video.
pub fn infer_media_kind(reference: &str) -> MediaKind {
    let lower = reference.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or_default();
    if VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) || lower.contains("video") {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Resolve a background.
///
/// A non-empty `explicit_video` always wins. Otherwise `reference` is either
/// empty (no background), an `ASSET:<id>` lookup in `catalog`, or a direct
/// URL whose kind is inferred from its extension.
pub fn resolve(reference: &str, explicit_video: &str, catalog: &PresetCatalog) -> ResolvedMedia {
    let video = explicit_video.trim();
    if !video.is_empty() {
        return ResolvedMedia {
            source: video.to_string(),
            media_kind: MediaKind::Video,
        };
    }

    let reference = reference.trim();
    if reference.is_empty() {
        return ResolvedMedia::none();
    }

    if let Some(id) = parse_asset_ref(reference) {
        return match catalog.find(id) {
            Some(preset) => ResolvedMedia {
                source: preset.url.clone(),
                media_kind: preset.media_kind,
            },
            None => {
                tracing::debug!(preset_id = id, "Unknown preset id, rendering without background");
                ResolvedMedia::none()
            }
        };
    }

    ResolvedMedia {
        source: reference.to_string(),
        media_kind: infer_media_kind(reference),
    }
}

/// Resolve a descriptor's background fields.
pub fn resolve_card(descriptor: &CardDescriptor, catalog: &PresetCatalog) -> ResolvedCard {
    let media = resolve(
        &descriptor.background_image,
        &descriptor.background_video,
        catalog,
    );
    ResolvedCard {
        descriptor: descriptor.clone(),
        media,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Theme;

    fn catalog() -> PresetCatalog {
        PresetCatalog::new()
            .with_preset(
                Theme::Habesha,
                "habesha_couple",
                "Couple",
                "https://cdn.example/img.jpg",
                MediaKind::Image,
            )
            .with_preset(
                Theme::Romantic,
                "dance",
                "Dance",
                "https://cdn.example/dance.mp4",
                MediaKind::Video,
            )
    }

    #[test]
    fn explicit_video_wins_over_image() {
        let media = resolve("https://x/a.jpg", "https://x/b.mp4", &catalog());
        assert_eq!(media.source, "https://x/b.mp4");
        assert_eq!(media.media_kind, MediaKind::Video);

        let media = resolve("ASSET:habesha_couple", "local/clip", &catalog());
        assert_eq!(media.source, "local/clip");
        assert_eq!(media.media_kind, MediaKind::Video);
    }

    #[test]
    fn empty_reference_means_no_background() {
        let media = resolve("", "", &catalog());
        assert!(media.is_empty());
        assert_eq!(media.media_kind, MediaKind::Image);
    }

    #[test]
    fn asset_reference_resolves_through_catalog() {
        let media = resolve("ASSET:habesha_couple", "", &catalog());
        assert_eq!(media.source, "https://cdn.example/img.jpg");
        assert_eq!(media.media_kind, MediaKind::Image);

        let media = resolve("ASSET:dance", "", &catalog());
        assert_eq!(media.media_kind, MediaKind::Video);
    }

    #[test]
    fn unknown_asset_resolves_to_no_background() {
        let media = resolve("ASSET:does-not-exist", "", &catalog());
        assert_eq!(media, ResolvedMedia::none());
    }

    #[test]
    fn direct_references_infer_kind() {
        assert_eq!(infer_media_kind("https://x/clip.MOV"), MediaKind::Video);
        assert_eq!(infer_media_kind("https://x/clip.mp4?token=1"), MediaKind::Video);
        assert_eq!(infer_media_kind("file:///videos/ours"), MediaKind::Video);
        assert_eq!(infer_media_kind("https://x/photo.png"), MediaKind::Image);
        assert_eq!(infer_media_kind("https://x/photo"), MediaKind::Image);
    }

    #[test]
    fn asset_ref_round_trips() {
        let reference = asset_ref("m1");
        assert_eq!(reference, "ASSET:m1");
        assert_eq!(parse_asset_ref(&reference), Some("m1"));
        assert_eq!(parse_asset_ref("https://x/a.jpg"), None);
    }
}
