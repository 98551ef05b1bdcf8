//! Editor session: the couple's working copy of their card.
//!
//! A session hydrates the stored descriptor and the wedding facts
//! concurrently, lets the caller mutate a draft, previews it through the
//! shared composer, and persists a normalized descriptor on save. Nothing
//! is written until [`EditorSession::save`] succeeds.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::PresetCatalog;
use crate::composer::{compose, CardLayout};
use crate::descriptor::{
    clamp_scale, CardDescriptor, FontFamily, MediaKind, PlateType, ResizeMode, TextAlign, Theme,
};
use crate::facts::WeddingFacts;
use crate::migrate;
use crate::ports::{CardStore, ImageGenerator, PortError, WeddingFactsSource};
use crate::resolver::{asset_ref, infer_media_kind, parse_asset_ref, resolve_card};
use crate::types::OwnerId;

/* --------------------------------------------------------------------------
   Errors and notices
   -------------------------------------------------------------------------- */

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Image generation failed: {0}")]
    Generation(PortError),

    #[error("No generated image to apply")]
    NoCandidate,

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("Media reference must not be empty")]
    EmptyMedia,

    #[error("Failed to serialize card design: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save card: {0}")]
    Save(PortError),
}

/// A hydration fetch that failed; the session continued without it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadNotice {
    #[error("Saved design could not be loaded ({0}); starting from defaults")]
    Descriptor(PortError),

    #[error("Wedding details could not be loaded ({0}); preview shows placeholders")]
    Facts(PortError),
}

/* --------------------------------------------------------------------------
   Background selection
   -------------------------------------------------------------------------- */

/// Where the active background comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundSelection {
    None,
    /// A catalog preset, stored by id.
    Preset { id: String, kind: MediaKind },
    /// A direct reference: uploaded media, a remote URL, or a generated image.
    Custom { uri: String, kind: MediaKind },
}

impl BackgroundSelection {
    /// Recover the selection from a descriptor's stored background fields.
    fn from_descriptor(descriptor: &CardDescriptor, catalog: &PresetCatalog) -> Self {
        let video = descriptor.background_video.trim();
        if !video.is_empty() {
            return match catalog.find_by_url(video) {
                Some(preset) => Self::Preset {
                    id: preset.id.clone(),
                    kind: MediaKind::Video,
                },
                None => Self::Custom {
                    uri: video.to_string(),
                    kind: MediaKind::Video,
                },
            };
        }

        let image = descriptor.background_image.trim();
        if image.is_empty() {
            return Self::None;
        }
        if let Some(id) = parse_asset_ref(image) {
            let kind = catalog.find(id).map(|p| p.media_kind).unwrap_or_default();
            return Self::Preset {
                id: id.to_string(),
                kind,
            };
        }
        match catalog.find_by_url(image) {
            Some(preset) => Self::Preset {
                id: preset.id.clone(),
                kind: preset.media_kind,
            },
            None => Self::Custom {
                uri: image.to_string(),
                kind: infer_media_kind(image),
            },
        }
    }

    /// Stored `(backgroundImage, backgroundVideo)` for this selection.
    ///
    /// Image presets are stored as `ASSET:<id>`; video presets as their URL.
    fn stored_fields(&self, catalog: &PresetCatalog) -> (String, String) {
        match self {
            Self::None => (String::new(), String::new()),
            Self::Preset {
                id,
                kind: MediaKind::Image,
            } => (asset_ref(id), String::new()),
            Self::Preset {
                id,
                kind: MediaKind::Video,
            } => match catalog.find(id) {
                Some(preset) => (String::new(), preset.url.clone()),
                None => (asset_ref(id), String::new()),
            },
            Self::Custom {
                uri,
                kind: MediaKind::Image,
            } => (uri.clone(), String::new()),
            Self::Custom {
                uri,
                kind: MediaKind::Video,
            } => (String::new(), uri.clone()),
        }
    }
}

/// Local media picked by the user during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedMedia {
    pub uri: String,
    pub kind: MediaKind,
}

/* --------------------------------------------------------------------------
   Session
   -------------------------------------------------------------------------- */

pub struct EditorSession {
    owner: OwnerId,
    store: Arc<dyn CardStore>,
    generator: Arc<dyn ImageGenerator>,
    catalog: Arc<PresetCatalog>,
    facts: WeddingFacts,
    draft: CardDescriptor,
    selection: BackgroundSelection,
    baseline: CardDescriptor,
    staged: VecDeque<StagedMedia>,
    candidate: Option<String>,
    notices: Vec<LoadNotice>,
}

impl EditorSession {
    /// Hydrate a session for `owner`.
    ///
    /// Never fails: a failed fetch is logged, recorded in
    /// [`load_notices`](Self::load_notices), and replaced by defaults.
    pub async fn open(
        owner: &str,
        store: Arc<dyn CardStore>,
        facts: Arc<dyn WeddingFactsSource>,
        generator: Arc<dyn ImageGenerator>,
        catalog: Arc<PresetCatalog>,
    ) -> Self {
        let (stored, loaded_facts) = tokio::join!(store.load(owner), facts.load_facts(owner));
        let mut notices = Vec::new();

        let descriptor = match stored {
            Ok(Some(stored)) => migrate::upgrade(stored),
            Ok(None) => CardDescriptor::default(),
            Err(e) => {
                tracing::warn!(owner, error = %e, "Failed to load card design");
                notices.push(LoadNotice::Descriptor(e));
                CardDescriptor::default()
            }
        };

        let facts = match loaded_facts {
            Ok(facts) => facts.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(owner, error = %e, "Failed to load wedding facts");
                notices.push(LoadNotice::Facts(e));
                WeddingFacts::default()
            }
        };

        let mut session = Self {
            owner: owner.to_string(),
            store,
            generator,
            catalog,
            facts,
            draft: CardDescriptor::default(),
            selection: BackgroundSelection::None,
            baseline: CardDescriptor::default(),
            staged: VecDeque::new(),
            candidate: None,
            notices,
        };
        session.replace_draft(descriptor);
        session.baseline = session.draft.clone();
        session
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn draft(&self) -> &CardDescriptor {
        &self.draft
    }

    pub fn facts(&self) -> &WeddingFacts {
        &self.facts
    }

    pub fn selection(&self) -> &BackgroundSelection {
        &self.selection
    }

    pub fn load_notices(&self) -> &[LoadNotice] {
        &self.notices
    }

    pub fn staged_media(&self) -> impl Iterator<Item = &StagedMedia> {
        self.staged.iter()
    }

    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    /// Replace the whole draft, e.g. with a descriptor posted by a client.
    ///
    /// The background fields are re-derived and normalized.
    pub fn replace_draft(&mut self, mut descriptor: CardDescriptor) {
        descriptor.normalize();
        let selection = BackgroundSelection::from_descriptor(&descriptor, &self.catalog);
        self.draft = descriptor;
        self.apply_selection(selection);
    }

    /// Whether the draft differs from what was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /* ---- scalar setters ---- */

    pub fn set_enabled(&mut self, enabled: bool) {
        self.draft.enabled = enabled;
    }

    /// Switch theme; staged media beyond the new theme's bound is dropped.
    pub fn set_theme(&mut self, theme: Theme) {
        self.draft.theme = theme;
        self.trim_staged();
    }

    pub fn set_custom_text(&mut self, text: impl Into<String>) {
        self.draft.custom_text = text.into();
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.draft.font_family = family;
    }

    pub fn set_font_size(&mut self, size: impl Into<String>) {
        self.draft.font_size = size.into();
        self.draft.normalize();
    }

    pub fn set_name_font_size(&mut self, size: impl Into<String>) {
        self.draft.name_font_size = size.into();
        self.draft.normalize();
    }

    /// Set the names and body color. A blank value restores the default.
    pub fn set_text_color(&mut self, color: impl Into<String>) {
        self.draft.text_color = color.into();
        self.draft.normalize();
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.draft.background_color = color.into();
        self.draft.normalize();
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.draft.accent_color = color.into();
        self.draft.normalize();
    }

    /// Overlay opacity in percent, clamped to 100.
    pub fn set_overlay_opacity(&mut self, percent: u8) {
        self.draft.overlay_opacity = percent.min(100);
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.draft.text_align = align;
    }

    pub fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.draft.resize_mode = mode;
    }

    pub fn set_plate_type(&mut self, plate: PlateType) {
        self.draft.plate_type = plate;
    }

    pub fn set_plate_color(&mut self, color: impl Into<String>) {
        self.draft.plate_color = color.into();
        self.draft.normalize();
    }

    /// Background zoom, clamped to 0.5..=3.0.
    pub fn set_background_scale(&mut self, scale: f64) {
        self.draft.background_scale = clamp_scale(scale);
    }

    /* ---- background ---- */

    pub fn select_preset(&mut self, id: &str) -> Result<(), EditorError> {
        let preset = self
            .catalog
            .find(id)
            .ok_or_else(|| EditorError::UnknownPreset(id.to_string()))?;
        let selection = BackgroundSelection::Preset {
            id: preset.id.clone(),
            kind: preset.media_kind,
        };
        self.apply_selection(selection);
        Ok(())
    }

    pub fn set_custom_background(
        &mut self,
        uri: &str,
        kind: MediaKind,
    ) -> Result<(), EditorError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(EditorError::EmptyMedia);
        }
        self.apply_selection(BackgroundSelection::Custom {
            uri: uri.to_string(),
            kind,
        });
        Ok(())
    }

    /// Override the media kind of the active background.
    pub fn set_media_kind(&mut self, media_kind: MediaKind) {
        let selection = match self.selection.clone() {
            BackgroundSelection::None => BackgroundSelection::None,
            BackgroundSelection::Preset { id, .. } => BackgroundSelection::Preset {
                id,
                kind: media_kind,
            },
            BackgroundSelection::Custom { uri, .. } => BackgroundSelection::Custom {
                uri,
                kind: media_kind,
            },
        };
        self.apply_selection(selection);
    }

    pub fn clear_background(&mut self) {
        self.apply_selection(BackgroundSelection::None);
    }

    /// Stage a locally picked file and make it the active background.
    ///
    /// The staged set holds at most as many items as the current theme
    /// offers presets (at least one). The oldest item is evicted first;
    /// staging a known uri again moves it to the newest slot.
    pub fn stage_media(&mut self, uri: &str, kind: MediaKind) -> Result<(), EditorError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(EditorError::EmptyMedia);
        }
        self.staged.retain(|m| m.uri != uri);
        self.staged.push_back(StagedMedia {
            uri: uri.to_string(),
            kind,
        });
        self.trim_staged();
        self.apply_selection(BackgroundSelection::Custom {
            uri: uri.to_string(),
            kind,
        });
        Ok(())
    }

    fn staged_bound(&self) -> usize {
        self.catalog.presets(self.draft.theme).len().max(1)
    }

    fn trim_staged(&mut self) {
        let bound = self.staged_bound();
        while self.staged.len() > bound {
            self.staged.pop_front();
        }
    }

    fn apply_selection(&mut self, selection: BackgroundSelection) {
        let (image, video) = selection.stored_fields(&self.catalog);
        self.draft.background_image = image;
        self.draft.background_video = video;
        self.selection = selection;
    }

    /* ---- generated backgrounds ---- */

    /// Ask the generator for an image. The result is held as a candidate
    /// and does not touch the draft.
    pub async fn generate_candidate(&mut self, prompt: &str) -> Result<&str, EditorError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(EditorError::EmptyPrompt);
        }

        let url = self
            .generator
            .generate(prompt)
            .await
            .map_err(EditorError::Generation)?;
        if url.trim().is_empty() {
            return Err(EditorError::Generation(PortError::Unexpected(
                "generator returned an empty image URL".to_string(),
            )));
        }

        tracing::info!(owner = %self.owner, "Generated background candidate");
        Ok(self.candidate.insert(url).as_str())
    }

    /// Make the held candidate the active image background.
    pub fn apply_candidate(&mut self) -> Result<(), EditorError> {
        let uri = self.candidate.take().ok_or(EditorError::NoCandidate)?;
        self.apply_selection(BackgroundSelection::Custom {
            uri,
            kind: MediaKind::Image,
        });
        Ok(())
    }

    pub fn discard_candidate(&mut self) {
        self.candidate = None;
    }

    /* ---- render and persist ---- */

    /// Compose the current draft exactly as guests would see it.
    pub fn preview(&self) -> CardLayout {
        compose(&resolve_card(&self.draft, &self.catalog), &self.facts)
    }

    /// Persist the normalized draft. On failure the draft is kept for retry.
    pub async fn save(&mut self) -> Result<(), EditorError> {
        let stored = self.draft.to_stored()?;
        self.store
            .save(&self.owner, &stored)
            .await
            .map_err(|e| {
                tracing::error!(owner = %self.owner, error = %e, "Failed to save card");
                EditorError::Save(e)
            })?;

        self.baseline = self.draft.clone();
        tracing::info!(
            owner = %self.owner,
            enabled = self.draft.enabled,
            plate_type = %self.draft.plate_type,
            "Card saved",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::StoredCard;
    use crate::store::{InMemoryCardStore, InMemoryFacts};
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    struct StubGenerator(Result<String, PortError>);

    #[async_trait]
    impl ImageGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, PortError> {
            self.0.clone()
        }
    }

    struct DownFacts;

    #[async_trait]
    impl WeddingFactsSource for DownFacts {
        async fn load_facts(&self, _owner: &str) -> Result<Option<WeddingFacts>, PortError> {
            Err(PortError::Unavailable("wedding service timed out".into()))
        }
    }

    struct DownStore;

    #[async_trait]
    impl CardStore for DownStore {
        async fn load(&self, _owner: &str) -> Result<Option<StoredCard>, PortError> {
            Err(PortError::Unavailable("connection refused".into()))
        }

        async fn save(&self, _owner: &str, _card: &StoredCard) -> Result<(), PortError> {
            Err(PortError::Unavailable("connection refused".into()))
        }

        async fn set_enabled(&self, _owner: &str, _enabled: bool) -> Result<bool, PortError> {
            Err(PortError::Unavailable("connection refused".into()))
        }
    }

    fn catalog() -> Arc<PresetCatalog> {
        Arc::new(
            PresetCatalog::new()
                .with_preset(
                    Theme::Habesha,
                    "habesha_couple",
                    "Couple",
                    "https://cdn.example/couple.jpg",
                    MediaKind::Image,
                )
                .with_preset(
                    Theme::Habesha,
                    "dance",
                    "Dance",
                    "https://cdn.example/dance.mp4",
                    MediaKind::Video,
                ),
        )
    }

    fn generator(result: Result<String, PortError>) -> Arc<dyn ImageGenerator> {
        Arc::new(StubGenerator(result))
    }

    async fn open_with(store: Arc<dyn CardStore>, gen: Arc<dyn ImageGenerator>) -> EditorSession {
        EditorSession::open(
            "owner-1",
            store,
            Arc::new(InMemoryFacts::new()),
            gen,
            catalog(),
        )
        .await
    }

    async fn open(store: Arc<InMemoryCardStore>) -> EditorSession {
        open_with(store, generator(Ok("https://ai/img.png".into()))).await
    }

    #[tokio::test]
    async fn new_owner_starts_from_defaults() {
        let session = open(Arc::new(InMemoryCardStore::new())).await;
        assert_eq!(session.draft(), &CardDescriptor::default());
        assert!(session.load_notices().is_empty());
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn failed_load_is_reported_and_defaults_used() {
        let session = open_with(Arc::new(DownStore), generator(Ok("u".into()))).await;
        assert_eq!(session.draft(), &CardDescriptor::default());
        assert_matches!(
            session.load_notices(),
            [LoadNotice::Descriptor(PortError::Unavailable(_))]
        );
    }

    #[tokio::test]
    async fn save_then_reload_renders_identically() {
        let store = Arc::new(InMemoryCardStore::new());

        let backgrounds = [("habesha_couple", MediaKind::Image), ("dance", MediaKind::Video)];
        for plate in PlateType::ALL {
            for align in TextAlign::ALL {
                for (preset, kind) in backgrounds {
                    let mut session = open(store.clone()).await;
                    session.set_enabled(true);
                    session.set_plate_type(plate);
                    session.set_text_align(align);
                    session.select_preset(preset).unwrap();
                    assert_eq!(
                        session.selection(),
                        &BackgroundSelection::Preset {
                            id: preset.into(),
                            kind
                        }
                    );
                    session.save().await.unwrap();
                    let before = session.preview();

                    let reopened = open(store.clone()).await;
                    assert_eq!(reopened.draft(), session.draft());
                    assert_eq!(reopened.preview(), before, "{plate} / {align} / {kind}");
                }
            }
        }
    }

    #[tokio::test]
    async fn save_normalizes_background_fields() {
        let store = Arc::new(InMemoryCardStore::new());
        let mut session = open(store.clone()).await;

        session.select_preset("habesha_couple").unwrap();
        session.save().await.unwrap();
        let stored = store.load("owner-1").await.unwrap().unwrap();
        assert_eq!(stored.background_image.as_deref(), Some("ASSET:habesha_couple"));
        assert_eq!(stored.background_video, None);

        session.select_preset("dance").unwrap();
        session.save().await.unwrap();
        let stored = store.load("owner-1").await.unwrap().unwrap();
        assert_eq!(stored.background_image, None);
        assert_eq!(stored.background_video.as_deref(), Some("https://cdn.example/dance.mp4"));
        assert!(stored.card_design.unwrap().contains("\"version\":2"));
    }

    #[tokio::test]
    async fn video_kind_moves_reference_to_video_field() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;
        session.set_custom_background("file:///clip", MediaKind::Image).unwrap();
        session.set_media_kind(MediaKind::Video);
        assert_eq!(session.draft().background_image, "");
        assert_eq!(session.draft().background_video, "file:///clip");
    }

    #[tokio::test]
    async fn candidate_does_not_touch_draft_until_applied() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;
        session.select_preset("habesha_couple").unwrap();
        let before = session.draft().clone();

        let url = session.generate_candidate("gold sunset").await.unwrap().to_string();
        assert_eq!(url, "https://ai/img.png");
        assert_eq!(session.draft(), &before);

        session.discard_candidate();
        assert_matches!(session.apply_candidate(), Err(EditorError::NoCandidate));
        assert_eq!(session.draft(), &before);

        session.generate_candidate("gold sunset").await.unwrap();
        session.apply_candidate().unwrap();
        assert_eq!(session.draft().background_image, "https://ai/img.png");
        assert!(session.candidate().is_none());
    }

    #[tokio::test]
    async fn generation_failures_surface_without_changes() {
        let mut session = open_with(
            Arc::new(InMemoryCardStore::new()),
            generator(Err(PortError::Rejected("quota exceeded".into()))),
        )
        .await;
        let before = session.draft().clone();

        assert_matches!(session.generate_candidate("   ").await, Err(EditorError::EmptyPrompt));
        assert_matches!(
            session.generate_candidate("flowers").await,
            Err(EditorError::Generation(PortError::Rejected(msg))) if msg == "quota exceeded"
        );
        assert_eq!(session.draft(), &before);
        assert!(session.candidate().is_none());
    }

    #[tokio::test]
    async fn failed_save_keeps_draft_for_retry() {
        let mut session = open_with(Arc::new(DownStore), generator(Ok("u".into()))).await;
        session.set_custom_text("Join us");
        assert!(session.is_dirty());

        assert_matches!(session.save().await, Err(EditorError::Save(PortError::Unavailable(_))));
        assert_eq!(session.draft().custom_text, "Join us");
        assert!(session.is_dirty());
    }

    #[tokio::test]
    async fn staged_media_is_bounded_by_theme_presets() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;

        session.stage_media("file:///a.jpg", MediaKind::Image).unwrap();
        session.stage_media("file:///b.jpg", MediaKind::Image).unwrap();
        session.stage_media("file:///a.jpg", MediaKind::Image).unwrap();
        session.stage_media("file:///c.mov", MediaKind::Video).unwrap();

        let uris: Vec<_> = session.staged_media().map(|m| m.uri.as_str()).collect();
        assert_eq!(uris, ["file:///a.jpg", "file:///c.mov"]);
        assert_eq!(session.draft().background_video, "file:///c.mov");

        session.set_theme(Theme::Modern);
        assert_eq!(session.staged_media().count(), 1);
    }

    #[tokio::test]
    async fn setters_clamp_their_inputs() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;
        session.set_background_scale(0.1);
        assert_eq!(session.draft().background_scale, 0.5);
        session.set_overlay_opacity(180);
        assert_eq!(session.draft().overlay_opacity, 100);
        assert_matches!(session.select_preset("nope"), Err(EditorError::UnknownPreset(_)));
    }

    #[tokio::test]
    async fn saving_clears_dirty_flag() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;
        session.set_accent_color("#ffffff");
        assert!(session.is_dirty());
        session.save().await.unwrap();
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn blank_colors_render_the_same_after_reload() {
        let store = Arc::new(InMemoryCardStore::new());
        let mut session = open(store.clone()).await;
        session.set_enabled(true);
        session.set_text_color("");
        session.set_plate_color("   ");
        session.set_font_size("");
        assert_eq!(session.draft().text_color, CardDescriptor::default().text_color);

        let before = session.preview();
        session.save().await.unwrap();
        let reopened = open(store).await;
        assert_eq!(reopened.draft(), session.draft());
        assert_eq!(reopened.preview(), before);
    }

    #[tokio::test]
    async fn posted_draft_with_blank_fields_is_normalized() {
        let mut session = open(Arc::new(InMemoryCardStore::new())).await;
        session.replace_draft(CardDescriptor {
            accent_color: " ".into(),
            background_color: String::new(),
            ..CardDescriptor::default()
        });
        assert_eq!(session.draft(), &CardDescriptor::default());
    }

    #[tokio::test]
    async fn facts_outage_is_a_notice_and_preview_still_works() {
        let session = EditorSession::open(
            "owner-1",
            Arc::new(InMemoryCardStore::new()),
            Arc::new(DownFacts),
            generator(Ok("u".into())),
            catalog(),
        )
        .await;

        assert_matches!(
            session.load_notices(),
            [LoadNotice::Facts(PortError::Unavailable(_))]
        );
        assert_eq!(session.facts(), &WeddingFacts::default());
        let layout = session.preview();
        assert_matches!(
            &layout.plate.blocks[1],
            crate::composer::Block::Names(run) if run.text == crate::facts::FALLBACK_NAMES
        );
    }

    #[tokio::test]
    async fn preview_uses_loaded_wedding_facts() {
        let facts = InMemoryFacts::new();
        facts
            .insert(
                "owner-1",
                WeddingFacts {
                    partners_name: Some("Sebrina, Anji".into()),
                    ..WeddingFacts::default()
                },
            )
            .await;
        let session = EditorSession::open(
            "owner-1",
            Arc::new(InMemoryCardStore::new()),
            Arc::new(facts),
            generator(Ok("u".into())),
            catalog(),
        )
        .await;

        assert!(session.load_notices().is_empty());
        assert_matches!(
            &session.preview().plate.blocks[1],
            crate::composer::Block::Names(run) if run.text == "SEBRINA & ANJI"
        );
    }
}
