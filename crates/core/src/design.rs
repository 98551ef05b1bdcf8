//! Static design constants and font-stack resolution.
//!
//! Sizes stored on a descriptor are abstract "rem-like" units; the composer
//! multiplies them by the factors here to get layout points.

use serde::{Deserialize, Serialize};

use crate::descriptor::FontFamily;

/* --------------------------------------------------------------------------
   Scaling factors
   -------------------------------------------------------------------------- */

/// Multiplier applied to `nameFontSize` for the couple's names.
pub const NAME_MULTIPLIER: f64 = 8.5;

/// Multiplier applied to `fontSize` for the invitation body.
pub const BODY_MULTIPLIER: f64 = 12.0;

/// Body line height as a factor of the body font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.5;

/// Default body size when `fontSize` is absent or unparsable.
pub const DEFAULT_FONT_SIZE: f64 = 1.5;

/// Default names size when `nameFontSize` is absent or unparsable.
pub const DEFAULT_NAME_FONT_SIZE: f64 = 4.2;

/* --------------------------------------------------------------------------
   Plate geometry
   -------------------------------------------------------------------------- */

/// Inner padding of the text plate, in points.
pub const PLATE_PADDING: f64 = 28.0;

/// Plate width relative to the card width.
pub const PLATE_WIDTH_PERCENT: f64 = 85.0;

/// Plate corner radius, in points.
pub const PLATE_RADIUS: f64 = 20.0;

/// Border width of GLASS and SOLID plates.
pub const PLATE_BORDER_WIDTH: f64 = 1.0;

/// Border color of GLASS and SOLID plates.
pub const PLATE_BORDER_COLOR: &str = "rgba(255,255,255,0.5)";

/// Fill of a GLASS plate (drawn over a backdrop blur).
pub const GLASS_FILL: &str = "rgba(255,255,255,0.75)";

/// Backdrop blur radius behind a GLASS plate.
pub const GLASS_BLUR_RADIUS: f64 = 20.0;

/// Fill used for SOLID plates that carry no color of their own.
pub const DEFAULT_PLATE_COLOR: &str = "rgba(255,255,255,0.85)";

/// Drop shadow under GLASS and SOLID plates.
pub const PLATE_SHADOW_COLOR: &str = "rgba(0,0,0,0.1)";
pub const PLATE_SHADOW_OFFSET_Y: f64 = 10.0;
pub const PLATE_SHADOW_BLUR: f64 = 30.0;

/// Width of the accent bar drawn on the aligned edge of the plate.
pub const ACCENT_BAR_WIDTH: f64 = 4.0;

/* --------------------------------------------------------------------------
   Typography details
   -------------------------------------------------------------------------- */

/// Fixed label drawn above the names.
pub const HEADLINE_LABEL: &str = "THE WEDDING OF";

/// Label font size, in points.
pub const LABEL_FONT_SIZE: f64 = 11.0;

/// Label letter spacing, in points.
pub const LABEL_LETTER_SPACING: f64 = 3.0;

/// Names line height as a factor of the names font size.
pub const NAME_LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Accent divider width, in points.
pub const DIVIDER_WIDTH: f64 = 40.0;

/// Accent divider height, in points.
pub const DIVIDER_HEIGHT: f64 = 2.0;

/// Font size of the date/location block, in points.
pub const DETAILS_FONT_SIZE: f64 = 14.0;

/// Opacity of the date/location block text.
pub const DETAILS_OPACITY: f64 = 0.8;

/// Body text used when the descriptor carries none.
pub const DEFAULT_BODY_TEXT: &str = "We invite you to celebrate our special day!";

/* --------------------------------------------------------------------------
   Font stacks
   -------------------------------------------------------------------------- */

/// Typeface weight requested by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
    Italic,
}

struct FontStack {
    regular: &'static str,
    bold: &'static str,
    italic: Option<&'static str>,
}

const PLAYFAIR: FontStack = FontStack {
    regular: "PlayfairDisplay_400Regular",
    bold: "PlayfairDisplay_700Bold",
    italic: Some("PlayfairDisplay_400Regular_Italic"),
};

const CORMORANT: FontStack = FontStack {
    regular: "CormorantGaramond_400Regular",
    bold: "CormorantGaramond_700Bold",
    italic: Some("CormorantGaramond_400Regular_Italic"),
};

const ROBOTO: FontStack = FontStack {
    regular: "Roboto_400Regular",
    bold: "Roboto_700Bold",
    italic: None,
};

/// Resolve a logical family and weight to the concrete typeface name.
///
/// A weight the family does not ship falls back to its regular face.
pub fn font_stack(family: FontFamily, weight: FontWeight) -> &'static str {
    let stack = match family {
        FontFamily::Playfair => &PLAYFAIR,
        FontFamily::Cormorant => &CORMORANT,
        FontFamily::Roboto => &ROBOTO,
    };
    match weight {
        FontWeight::Regular => stack.regular,
        FontWeight::Bold => stack.bold,
        FontWeight::Italic => stack.italic.unwrap_or(stack.regular),
    }
}
