//! Wedding facts consumed by the composer, and their display formatting.
//!
//! The facts belong to the wedding-details collaborator; this crate only
//! reads them.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heading used when the couple's names are unknown.
pub const FALLBACK_NAMES: &str = "WEDDING INVITATION";

/// Read-only wedding details shown on the card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeddingFacts {
    pub partners_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub wedding_time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub rules: Option<String>,
}

impl WeddingFacts {
    /// Names heading for the card.
    pub fn display_names(&self) -> String {
        format_partner_names(self.partners_name.as_deref().unwrap_or_default())
    }

    /// `"Saturday, June 14, 2025"`, if a date is known.
    pub fn display_date(&self) -> Option<String> {
        self.wedding_date
            .map(|d| d.format("%A, %B %-d, %Y").to_string())
    }

    /// `"4:30 PM"`, if a time is known. Unparsable times are shown verbatim.
    pub fn display_time(&self) -> Option<String> {
        let raw = non_blank(self.wedding_time.as_deref())?;
        let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"));
        Some(match parsed {
            Ok(t) => t.format("%-I:%M %p").to_string(),
            Err(_) => raw.to_string(),
        })
    }

    /// `"venue, location"`, or whichever of the two is known.
    pub fn display_place(&self) -> Option<String> {
        match (non_blank(self.venue.as_deref()), non_blank(self.location.as_deref())) {
            (Some(venue), Some(location)) if venue != location => {
                Some(format!("{venue}, {location}"))
            }
            (Some(venue), _) => Some(venue.to_string()),
            (None, Some(location)) => Some(location.to_string()),
            (None, None) => None,
        }
    }

    /// Guest-facing rules line, if any.
    pub fn display_rules(&self) -> Option<String> {
        non_blank(self.rules.as_deref()).map(str::to_string)
    }

    /// Whether the details block has anything to show.
    pub fn has_details(&self) -> bool {
        self.wedding_date.is_some() || non_blank(self.location.as_deref()).is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/* --------------------------------------------------------------------------
   Partner names
   -------------------------------------------------------------------------- */

static SEPARATORS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\s*&\s*").expect("valid regex"),
        Regex::new(r"(?i)\s+and\s+").expect("valid regex"),
        Regex::new(r",\s*").expect("valid regex"),
        Regex::new(r"\s+").expect("valid regex"),
    ]
});

/// Format the stored partners string as an uppercase `"A & B"` heading.
///
/// Accepts `"a & b"`, `"a and b"`, `"a, b"` and `"a b"`. Duplicate names are
/// collapsed; a blank input yields [`FALLBACK_NAMES`].
pub fn format_partner_names(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FALLBACK_NAMES.to_string();
    }

    let mut names: Vec<String> = vec![trimmed.to_string()];
    for separator in SEPARATORS.iter() {
        if separator.is_match(trimmed) {
            let split: Vec<String> = separator
                .split(trimmed)
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect();
            if split.len() > 1 {
                names = split;
                break;
            }
        }
    }

    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let upper = name.to_uppercase();
        if !unique.contains(&upper) {
            unique.push(upper);
        }
    }

    if unique.is_empty() {
        return trimmed.to_uppercase();
    }
    unique.join(" & ")
}
