//! PostgreSQL implementation of the card store and facts ports.

use async_trait::async_trait;
use sqlx::PgPool;
use wedcard_core::descriptor::StoredCard;
use wedcard_core::facts::WeddingFacts;
use wedcard_core::ports::{CardStore, PortError, WeddingFactsSource};

use crate::models::wedding_card::UpsertWeddingCard;
use crate::repositories::{WeddingCardRepo, WeddingRepo};

/// Card store and facts source backed by a connection pool.
#[derive(Debug, Clone)]
pub struct PgCardStore {
    pool: PgPool,
}

impl PgCardStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a database error onto the port's failure kinds.
///
/// Connection-level failures are reported as unavailability; the detail of
/// anything else stays in the log.
pub fn port_error(err: sqlx::Error) -> PortError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "Database unavailable");
            PortError::Unavailable("database unavailable".to_string())
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint().is_some() => {
            tracing::warn!(error = %err, "Database constraint violation");
            PortError::Rejected("constraint violation".to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            PortError::Unexpected("database error".to_string())
        }
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn load(&self, owner: &str) -> Result<Option<StoredCard>, PortError> {
        let row = WeddingCardRepo::find_by_owner(&self.pool, owner)
            .await
            .map_err(port_error)?;
        Ok(row.map(StoredCard::from))
    }

    async fn save(&self, owner: &str, card: &StoredCard) -> Result<(), PortError> {
        let row = WeddingCardRepo::upsert(&self.pool, owner, &UpsertWeddingCard::from(card))
            .await
            .map_err(port_error)?;
        tracing::debug!(owner, card_id = row.id, "Card row upserted");
        Ok(())
    }

    async fn set_enabled(&self, owner: &str, enabled: bool) -> Result<bool, PortError> {
        WeddingCardRepo::set_enabled(&self.pool, owner, enabled)
            .await
            .map_err(port_error)
    }
}

#[async_trait]
impl WeddingFactsSource for PgCardStore {
    async fn load_facts(&self, owner: &str) -> Result<Option<WeddingFacts>, PortError> {
        let row = WeddingRepo::find_by_owner(&self.pool, owner)
            .await
            .map_err(port_error)?;
        Ok(row.map(WeddingFacts::from))
    }
}
