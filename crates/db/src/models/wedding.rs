//! Wedding detail rows read by the card composer.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wedcard_core::facts::WeddingFacts;
use wedcard_core::types::{DbId, Timestamp};

/// A row from the `weddings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wedding {
    pub id: DbId,
    pub owner_id: String,
    pub partners_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub wedding_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub rules: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Wedding> for WeddingFacts {
    fn from(row: Wedding) -> Self {
        WeddingFacts {
            partners_name: row.partners_name,
            wedding_date: row.wedding_date,
            wedding_time: row.wedding_time.map(|t| t.format("%H:%M:%S").to_string()),
            location: row.location,
            venue: row.venue,
            rules: row.rules,
        }
    }
}

/// DTO for creating or replacing a wedding's details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertWedding {
    pub partners_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub wedding_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub rules: Option<String>,
}
