/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identity of the couple that owns a wedding (the auth provider's user id).
///
/// Every card and wedding record is keyed by this value.
pub type OwnerId = String;
