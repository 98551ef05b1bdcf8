//! Repository for the `weddings` table.
//!
//! Cards only read wedding details; the upsert exists for seeding and for
//! deployments where this service also owns the wedding record.

use sqlx::PgPool;

use crate::models::wedding::{UpsertWedding, Wedding};

const COLUMNS: &str = "\
    id, owner_id, partners_name, wedding_date, wedding_time, \
    location, venue, rules, created_at, updated_at";

pub struct WeddingRepo;

impl WeddingRepo {
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Option<Wedding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weddings WHERE owner_id = $1");
        sqlx::query_as::<_, Wedding>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        pool: &PgPool,
        owner_id: &str,
        dto: &UpsertWedding,
    ) -> Result<Wedding, sqlx::Error> {
        let query = format!(
            "INSERT INTO weddings \
                 (owner_id, partners_name, wedding_date, wedding_time, location, venue, rules) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (owner_id) DO UPDATE SET \
                 partners_name = EXCLUDED.partners_name, \
                 wedding_date = EXCLUDED.wedding_date, \
                 wedding_time = EXCLUDED.wedding_time, \
                 location = EXCLUDED.location, \
                 venue = EXCLUDED.venue, \
                 rules = EXCLUDED.rules, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wedding>(&query)
            .bind(owner_id)
            .bind(&dto.partners_name)
            .bind(dto.wedding_date)
            .bind(dto.wedding_time)
            .bind(&dto.location)
            .bind(&dto.venue)
            .bind(&dto.rules)
            .fetch_one(pool)
            .await
    }
}
