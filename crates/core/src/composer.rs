//! Render composer: a resolved card plus wedding facts in, a layout tree out.
//!
//! The layout is what both the editor preview and the guest viewer draw.
//! Composition is pure: the same inputs always give an identical
//! [`CardLayout`].

use serde::Serialize;

use crate::descriptor::{MediaKind, PlateType, ResizeMode, TextAlign};
use crate::design::{
    font_stack, FontWeight, ACCENT_BAR_WIDTH, BODY_MULTIPLIER, DEFAULT_BODY_TEXT,
    DEFAULT_PLATE_COLOR, DETAILS_FONT_SIZE, DETAILS_OPACITY, DIVIDER_HEIGHT, DIVIDER_WIDTH,
    GLASS_BLUR_RADIUS, GLASS_FILL, HEADLINE_LABEL, LABEL_FONT_SIZE, LABEL_LETTER_SPACING,
    LINE_HEIGHT_FACTOR, NAME_LINE_HEIGHT_FACTOR, NAME_MULTIPLIER, PLATE_BORDER_COLOR,
    PLATE_BORDER_WIDTH, PLATE_PADDING, PLATE_RADIUS, PLATE_SHADOW_BLUR, PLATE_SHADOW_COLOR,
    PLATE_SHADOW_OFFSET_Y, PLATE_WIDTH_PERCENT,
};
use crate::facts::WeddingFacts;
use crate::resolver::ResolvedCard;

/* --------------------------------------------------------------------------
   Layout tree
   -------------------------------------------------------------------------- */

/// Full card layout, back to front: background, overlay, plate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    /// Omitted when the card has no background media.
    pub background: Option<BackgroundLayer>,
    pub overlay: Overlay,
    pub plate: Plate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundLayer {
    pub source: String,
    pub kind: MediaKind,
    pub scale: f64,
    pub fit: ResizeMode,
    pub looping: bool,
    pub muted: bool,
    pub autoplay: bool,
}

/// Solid color wash between the background and the plate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub color: String,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub offset_y: f64,
    pub blur: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentBar {
    pub side: BarSide,
    pub width: f64,
    pub color: String,
}

/// The box holding the invitation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub style: PlateType,
    pub fill: String,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    /// Backdrop blur radius; GLASS only.
    pub backdrop_blur: Option<f64>,
    pub radius: f64,
    pub padding: f64,
    pub width_percent: f64,
    /// Where the plate sits horizontally inside the card.
    pub self_align: TextAlign,
    pub text_align: TextAlign,
    pub accent_bar: Option<AccentBar>,
    pub blocks: Vec<Block>,
}

/// One styled run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    pub color: String,
    pub typeface: &'static str,
    pub font_size: f64,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub opacity: f64,
}

impl TextRun {
    fn new(text: impl Into<String>, color: &str, typeface: &'static str, font_size: f64) -> Self {
        Self {
            text: text.into(),
            color: color.to_string(),
            typeface,
            font_size,
            line_height: None,
            letter_spacing: None,
            opacity: 1.0,
        }
    }
}

/// Plate content, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Label(TextRun),
    Names(TextRun),
    Divider { width: f64, height: f64, color: String },
    Body(TextRun),
    Details { lines: Vec<TextRun> },
}

/* --------------------------------------------------------------------------
   Composition
   -------------------------------------------------------------------------- */

/// Compose the layout for a resolved card.
pub fn compose(card: &ResolvedCard, facts: &WeddingFacts) -> CardLayout {
    let d = &card.descriptor;

    let background = (!card.media.is_empty()).then(|| {
        let is_video = card.media.media_kind == MediaKind::Video;
        BackgroundLayer {
            source: card.media.source.clone(),
            kind: card.media.media_kind,
            scale: d.effective_scale(),
            fit: d.resize_mode,
            looping: is_video,
            muted: is_video,
            autoplay: is_video,
        }
    });

    let overlay = Overlay {
        color: d.background_color.clone(),
        alpha: d.overlay_alpha(),
    };

    let accent_bar = match d.text_align {
        TextAlign::Left => Some(BarSide::Left),
        TextAlign::Right => Some(BarSide::Right),
        TextAlign::Center => None,
    }
    .map(|side| AccentBar {
        side,
        width: ACCENT_BAR_WIDTH,
        color: d.accent_color.clone(),
    });

    let (fill, framed) = match d.plate_type {
        PlateType::Glass => (GLASS_FILL.to_string(), true),
        PlateType::Solid => (solid_fill(&d.plate_color), true),
        PlateType::None => ("transparent".to_string(), false),
    };

    let plate = Plate {
        style: d.plate_type,
        fill,
        border: framed.then(|| Border {
            width: PLATE_BORDER_WIDTH,
            color: PLATE_BORDER_COLOR.to_string(),
        }),
        shadow: framed.then(|| Shadow {
            color: PLATE_SHADOW_COLOR.to_string(),
            offset_y: PLATE_SHADOW_OFFSET_Y,
            blur: PLATE_SHADOW_BLUR,
        }),
        backdrop_blur: (d.plate_type == PlateType::Glass).then_some(GLASS_BLUR_RADIUS),
        radius: PLATE_RADIUS,
        padding: PLATE_PADDING,
        width_percent: PLATE_WIDTH_PERCENT,
        self_align: d.text_align,
        text_align: d.text_align,
        accent_bar,
        blocks: typography(card, facts),
    };

    CardLayout {
        background,
        overlay,
        plate,
    }
}

fn solid_fill(plate_color: &str) -> String {
    let color = plate_color.trim();
    if color.is_empty() {
        DEFAULT_PLATE_COLOR.to_string()
    } else {
        color.to_string()
    }
}

fn typography(card: &ResolvedCard, facts: &WeddingFacts) -> Vec<Block> {
    let d = &card.descriptor;
    let family = d.font_family;

    let mut label = TextRun::new(
        HEADLINE_LABEL,
        &d.accent_color,
        font_stack(family, FontWeight::Bold),
        LABEL_FONT_SIZE,
    );
    label.letter_spacing = Some(LABEL_LETTER_SPACING);

    let names_size = d.name_font_size_value() * NAME_MULTIPLIER;
    let mut names = TextRun::new(
        facts.display_names(),
        &d.text_color,
        font_stack(family, FontWeight::Bold),
        names_size,
    );
    names.line_height = Some(names_size * NAME_LINE_HEIGHT_FACTOR);

    let body_size = d.font_size_value() * BODY_MULTIPLIER;
    let body_text = if d.custom_text.trim().is_empty() {
        DEFAULT_BODY_TEXT
    } else {
        d.custom_text.as_str()
    };
    let mut body = TextRun::new(
        body_text,
        &d.text_color,
        font_stack(family, FontWeight::Italic),
        body_size,
    );
    body.line_height = Some(body_size * LINE_HEIGHT_FACTOR);

    let mut blocks = vec![
        Block::Label(label),
        Block::Names(names),
        Block::Divider {
            width: DIVIDER_WIDTH,
            height: DIVIDER_HEIGHT,
            color: d.accent_color.clone(),
        },
        Block::Body(body),
    ];

    if facts.has_details() {
        let detail = |text: String, weight: FontWeight| {
            let mut run = TextRun::new(
                text,
                &d.text_color,
                font_stack(family, weight),
                DETAILS_FONT_SIZE,
            );
            run.opacity = DETAILS_OPACITY;
            run
        };
        let lines = [
            facts.display_date().map(|t| detail(t, FontWeight::Bold)),
            facts.display_time().map(|t| detail(t, FontWeight::Regular)),
            facts.display_place().map(|t| detail(t, FontWeight::Regular)),
            facts.display_rules().map(|t| detail(t, FontWeight::Italic)),
        ]
        .into_iter()
        .flatten()
        .collect();
        blocks.push(Block::Details { lines });
    }

    blocks
}
