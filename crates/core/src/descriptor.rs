//! The card design descriptor and its persisted shape.
//!
//! [`CardDescriptor`] is the single in-memory form both sessions work with.
//! [`StoredCard`] is the record the store round-trips: nullable discrete
//! columns plus the `cardDesign` JSON blob ([`CardDesignBlob`]) kept for
//! older readers. Folding a `StoredCard` back into a descriptor lives in
//! [`crate::migrate`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::design::{DEFAULT_FONT_SIZE, DEFAULT_NAME_FONT_SIZE, DEFAULT_PLATE_COLOR};
use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Constants
   -------------------------------------------------------------------------- */

/// Current `cardDesign` blob schema version. Blobs without a version are v1.
pub const CARD_DESIGN_VERSION: u32 = 2;

/// Smallest background zoom the editor offers.
pub const MIN_BACKGROUND_SCALE: f64 = 0.5;

/// Largest background zoom the editor offers.
pub const MAX_BACKGROUND_SCALE: f64 = 3.0;

/// Default overlay opacity (percent).
pub const DEFAULT_OVERLAY_OPACITY: u8 = 50;

pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#2a2828";
pub const DEFAULT_ACCENT_COLOR: &str = "#d4af37";

/* --------------------------------------------------------------------------
   Enumerations
   -------------------------------------------------------------------------- */

/// Cultural theme; picks which preset category the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Habesha,
    Islamic,
    Christian,
    Modern,
    Romantic,
}

impl Theme {
    /// All themes in catalog order.
    pub const ALL: [Theme; 5] = [
        Theme::Habesha,
        Theme::Islamic,
        Theme::Christian,
        Theme::Modern,
        Theme::Romantic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Habesha => "habesha",
            Theme::Islamic => "islamic",
            Theme::Christian => "christian",
            Theme::Modern => "modern",
            Theme::Romantic => "romantic",
        }
    }
}

/// Logical font family. Concrete typefaces come from [`crate::design::font_stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Playfair,
    Cormorant,
    Roboto,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Playfair,
        FontFamily::Cormorant,
        FontFamily::Roboto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Playfair => "Playfair",
            FontFamily::Cormorant => "Cormorant",
            FontFamily::Roboto => "Roboto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// How background media is fit into the card frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeMode::Cover => "cover",
            ResizeMode::Contain => "contain",
        }
    }
}

/// Style of the box that holds the invitation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlateType {
    #[default]
    Glass,
    Solid,
    None,
}

impl PlateType {
    pub const ALL: [PlateType; 3] = [PlateType::Glass, PlateType::Solid, PlateType::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlateType::Glass => "GLASS",
            PlateType::Solid => "SOLID",
            PlateType::None => "NONE",
        }
    }
}

/// Kind of background media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Video => "VIDEO",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_via_as_str!(Theme, FontFamily, TextAlign, ResizeMode, PlateType, MediaKind);

fn invalid(kind: &str, raw: &str) -> CoreError {
    CoreError::Validation(format!("Unknown {kind} '{raw}'"))
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "habesha" => Ok(Theme::Habesha),
            "islamic" => Ok(Theme::Islamic),
            "christian" => Ok(Theme::Christian),
            "modern" => Ok(Theme::Modern),
            "romantic" => Ok(Theme::Romantic),
            _ => Err(invalid("theme", s)),
        }
    }
}

impl FromStr for FontFamily {
    type Err = CoreError;

    /// Accepts the short family name or the long display name the older
    /// web editor stored ("Playfair Display", "Cormorant Garamond").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.starts_with("playfair") {
            Ok(FontFamily::Playfair)
        } else if lower.starts_with("cormorant") {
            Ok(FontFamily::Cormorant)
        } else if lower.starts_with("roboto") {
            Ok(FontFamily::Roboto)
        } else {
            Err(invalid("font family", s))
        }
    }
}

impl FromStr for TextAlign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(invalid("text alignment", s)),
        }
    }
}

impl FromStr for ResizeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(ResizeMode::Cover),
            "contain" => Ok(ResizeMode::Contain),
            _ => Err(invalid("resize mode", s)),
        }
    }
}

impl FromStr for PlateType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GLASS" => Ok(PlateType::Glass),
            "SOLID" => Ok(PlateType::Solid),
            "NONE" => Ok(PlateType::None),
            _ => Err(invalid("plate type", s)),
        }
    }
}

impl FromStr for MediaKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMAGE" => Ok(MediaKind::Image),
            "VIDEO" => Ok(MediaKind::Video),
            _ => Err(invalid("media kind", s)),
        }
    }
}

/// Parse an enum value, falling back to its default for absent or unknown input.
pub fn parse_or_default<T: FromStr + Default>(raw: Option<&str>) -> T {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/* --------------------------------------------------------------------------
   Numeric helpers
   -------------------------------------------------------------------------- */

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid regex")
});

/// Parse the leading number of a size string (`"1.5rem"` -> 1.5).
///
/// Returns `fallback` when there is no leading number, or the value is not
/// finite or not positive.
pub fn parse_size(raw: &str, fallback: f64) -> f64 {
    LEADING_NUMBER_RE
        .find(raw.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(fallback)
}

/// Normalize an overlay opacity into the 0-100 percent range.
///
/// Older writers stored a fraction (`0.3`); any value strictly between 0
/// and 1 is read as a fraction and scaled up.
pub fn normalize_opacity(value: f64) -> u8 {
    if !value.is_finite() {
        return DEFAULT_OVERLAY_OPACITY;
    }
    let percent = if value > 0.0 && value < 1.0 {
        value * 100.0
    } else {
        value
    };
    percent.round().clamp(0.0, 100.0) as u8
}

/// Clamp a background zoom into the supported range.
pub fn clamp_scale(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_BACKGROUND_SCALE, MAX_BACKGROUND_SCALE)
    } else {
        1.0
    }
}

/* --------------------------------------------------------------------------
   Serde helpers
   -------------------------------------------------------------------------- */

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_string(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_or_default(raw.as_deref()))
}

fn numeric_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_string)
        .unwrap_or_default())
}

fn optional_numeric_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(NumberOrString::into_string))
}

fn opacity_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .map(normalize_opacity)
        .unwrap_or(DEFAULT_OVERLAY_OPACITY))
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_scale<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(1.0))
}

/// [`present`] for size fields, which older writers stored as numbers.
fn present_numeric<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_numeric_string(deserializer).map(Some)
}

/// Distinguishes a present `null` (`Some(None)`) from an absent key (`None`).
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/* --------------------------------------------------------------------------
   Descriptor
   -------------------------------------------------------------------------- */

/// One wedding's invitation design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDescriptor {
    #[serde(alias = "digitalCardEnabled", deserialize_with = "nullable_bool")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_enum")]
    pub theme: Theme,
    #[serde(deserialize_with = "nullable_string")]
    pub custom_text: String,
    #[serde(deserialize_with = "lenient_enum")]
    pub font_family: FontFamily,
    #[serde(deserialize_with = "numeric_string")]
    pub font_size: String,
    #[serde(deserialize_with = "numeric_string")]
    pub name_font_size: String,
    #[serde(deserialize_with = "nullable_string")]
    pub text_color: String,
    #[serde(deserialize_with = "nullable_string")]
    pub background_color: String,
    #[serde(deserialize_with = "nullable_string")]
    pub accent_color: String,
    #[serde(deserialize_with = "opacity_percent")]
    pub overlay_opacity: u8,
    #[serde(deserialize_with = "lenient_enum")]
    pub text_align: TextAlign,
    #[serde(deserialize_with = "lenient_enum")]
    pub resize_mode: ResizeMode,
    #[serde(deserialize_with = "lenient_enum")]
    pub plate_type: PlateType,
    #[serde(deserialize_with = "nullable_string")]
    pub plate_color: String,
    #[serde(deserialize_with = "nullable_scale")]
    pub background_scale: f64,
    #[serde(deserialize_with = "nullable_string")]
    pub background_image: String,
    #[serde(deserialize_with = "nullable_string")]
    pub background_video: String,
}

impl Default for CardDescriptor {
    fn default() -> Self {
        Self {
            enabled: false,
            theme: Theme::default(),
            custom_text: String::new(),
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            name_font_size: DEFAULT_NAME_FONT_SIZE.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            text_align: TextAlign::default(),
            resize_mode: ResizeMode::default(),
            plate_type: PlateType::default(),
            plate_color: DEFAULT_PLATE_COLOR.to_string(),
            background_scale: 1.0,
            background_image: String::new(),
            background_video: String::new(),
        }
    }
}

impl CardDescriptor {
    /// Body size in descriptor units, with the 1.5 fallback.
    pub fn font_size_value(&self) -> f64 {
        parse_size(&self.font_size, DEFAULT_FONT_SIZE)
    }

    /// Names size in descriptor units, with the 4.2 fallback.
    pub fn name_font_size_value(&self) -> f64 {
        parse_size(&self.name_font_size, DEFAULT_NAME_FONT_SIZE)
    }

    /// Overlay alpha in `0.0..=1.0`.
    pub fn overlay_alpha(&self) -> f64 {
        f64::from(self.overlay_opacity.min(100)) / 100.0
    }

    /// Background zoom clamped to the supported range.
    pub fn effective_scale(&self) -> f64 {
        clamp_scale(self.background_scale)
    }

    /// Bring every field into its canonical form.
    ///
    /// Colors and sizes are trimmed and blank ones take their defaults,
    /// opacity is capped at 100 and the zoom is clamped. Both the editor
    /// draft and the read-time migration pass through here, so a card
    /// renders the same before and after a save.
    pub fn normalize(&mut self) {
        fill_blank(&mut self.font_size, || DEFAULT_FONT_SIZE.to_string());
        fill_blank(&mut self.name_font_size, || DEFAULT_NAME_FONT_SIZE.to_string());
        fill_blank(&mut self.text_color, || DEFAULT_TEXT_COLOR.to_string());
        fill_blank(&mut self.background_color, || DEFAULT_BACKGROUND_COLOR.to_string());
        fill_blank(&mut self.accent_color, || DEFAULT_ACCENT_COLOR.to_string());
        fill_blank(&mut self.plate_color, || DEFAULT_PLATE_COLOR.to_string());
        trim_in_place(&mut self.background_image);
        trim_in_place(&mut self.background_video);
        self.overlay_opacity = self.overlay_opacity.min(100);
        self.background_scale = clamp_scale(self.background_scale);
    }

    /// The scalar set as written into the `cardDesign` blob.
    ///
    /// `enabled` is not part of the blob; the discrete column is its only
    /// source.
    pub fn design_blob(&self) -> CardDesignBlob {
        let some = |value: &str| Some(Some(value.to_string()));
        CardDesignBlob {
            version: Some(CARD_DESIGN_VERSION),
            theme: some(self.theme.as_str()),
            custom_text: some(&self.custom_text),
            font_family: some(self.font_family.as_str()),
            font_size: some(&self.font_size),
            name_font_size: some(&self.name_font_size),
            text_color: some(&self.text_color),
            background_color: some(&self.background_color),
            accent_color: some(&self.accent_color),
            overlay_opacity: Some(f64::from(self.overlay_opacity)),
            text_align: some(self.text_align.as_str()),
            resize_mode: some(self.resize_mode.as_str()),
            plate_type: some(self.plate_type.as_str()),
            plate_color: some(&self.plate_color),
            background_scale: Some(self.background_scale),
            background_image: Some(non_empty(&self.background_image)),
            background_video: Some(non_empty(&self.background_video)),
            background_type: None,
        }
    }

    /// Build the persisted record: discrete columns plus the serialized blob.
    pub fn to_stored(&self) -> Result<StoredCard, serde_json::Error> {
        let card_design = serde_json::to_string(&self.design_blob())?;
        Ok(StoredCard {
            enabled: self.enabled,
            theme: Some(self.theme.as_str().to_string()),
            custom_text: Some(self.custom_text.clone()),
            font_family: Some(self.font_family.as_str().to_string()),
            font_size: Some(self.font_size.clone()),
            name_font_size: Some(self.name_font_size.clone()),
            text_color: Some(self.text_color.clone()),
            background_color: Some(self.background_color.clone()),
            accent_color: Some(self.accent_color.clone()),
            overlay_opacity: Some(f64::from(self.overlay_opacity)),
            text_align: Some(self.text_align.as_str().to_string()),
            resize_mode: Some(self.resize_mode.as_str().to_string()),
            plate_type: Some(self.plate_type.as_str().to_string()),
            plate_color: Some(self.plate_color.clone()),
            background_scale: Some(self.background_scale),
            background_image: non_empty(&self.background_image),
            background_video: non_empty(&self.background_video),
            card_design: Some(card_design),
        })
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn fill_blank(value: &mut String, default: impl FnOnce() -> String) {
    trim_in_place(value);
    if value.is_empty() {
        *value = default();
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/* --------------------------------------------------------------------------
   Persisted record
   -------------------------------------------------------------------------- */

/// A card as the store holds it: every discrete column is nullable and the
/// `cardDesign` blob rides alongside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredCard {
    #[serde(alias = "digitalCardEnabled")]
    pub enabled: bool,
    pub theme: Option<String>,
    pub custom_text: Option<String>,
    pub font_family: Option<String>,
    #[serde(deserialize_with = "optional_numeric_string")]
    pub font_size: Option<String>,
    #[serde(deserialize_with = "optional_numeric_string")]
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

/// The `cardDesign` JSON blob.
///
/// Every field is optional; a present field overrides the matching discrete
/// column on read. String fields distinguish an absent key (`None`) from an
/// explicit `null` (`Some(None)`), which clears the column. The aliases
/// accept the field names earlier mobile and web editors wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDesignBlob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub theme: Option<Option<String>>,
    #[serde(
        default,
        alias = "message",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_text: Option<Option<String>>,
    #[serde(
        default,
        alias = "fontStyle",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_family: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_numeric",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<Option<String>>,
    #[serde(
        default,
        alias = "namesFontSize",
        deserialize_with = "present_numeric",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_font_size: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f64>,
    #[serde(
        default,
        alias = "alignment",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_align: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub plate_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub plate_color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_scale: Option<f64>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub background_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub background_video: Option<Option<String>>,
    /// Legacy hint ("image" / "video") written by older editors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_type: Option<String>,
}

impl CardDesignBlob {
    /// Schema version, treating an unversioned blob as v1.
    pub fn schema_version(&self) -> u32 {
        self.version.unwrap_or(1)
    }

    /// Whether `overlayOpacity` is a 0-1 fraction rather than a percent.
    ///
    /// The web editor wrote unversioned blobs with a lowercase
    /// `backgroundType` and `rem` font sizes, and kept opacity on a 0-1
    /// slider, so there `1` means fully opaque.
    pub fn opacity_is_fraction(&self) -> bool {
        if self.version.is_some() {
            return false;
        }
        let lowercase_type = matches!(self.background_type.as_deref(), Some("image" | "video"));
        let rem_size = [&self.font_size, &self.name_font_size]
            .into_iter()
            .any(|size| matches!(size, Some(Some(s)) if s.trim().ends_with("rem")));
        lowercase_type || rem_size
    }
}
