//! In-process implementations of the store and facts ports.
//!
//! Used by tests, demos and single-process deployments that do not need
//! PostgreSQL. Semantics match the database store: one record per owner,
//! last write wins.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::descriptor::StoredCard;
use crate::facts::WeddingFacts;
use crate::ports::{CardStore, PortError, WeddingFactsSource};

/// Card store backed by a map keyed by owner.
#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    cards: RwLock<HashMap<String, StoredCard>>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, bypassing the editor (e.g. a legacy row).
    pub async fn insert_raw(&self, owner: &str, card: StoredCard) {
        self.cards.write().await.insert(owner.to_string(), card);
    }

    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cards.read().await.is_empty()
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn load(&self, owner: &str) -> Result<Option<StoredCard>, PortError> {
        Ok(self.cards.read().await.get(owner).cloned())
    }

    async fn save(&self, owner: &str, card: &StoredCard) -> Result<(), PortError> {
        self.cards
            .write()
            .await
            .insert(owner.to_string(), card.clone());
        Ok(())
    }

    async fn set_enabled(&self, owner: &str, enabled: bool) -> Result<bool, PortError> {
        match self.cards.write().await.get_mut(owner) {
            Some(card) => {
                card.enabled = enabled;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Wedding facts held in memory.
#[derive(Debug, Default)]
pub struct InMemoryFacts {
    facts: RwLock<HashMap<String, WeddingFacts>>,
}

impl InMemoryFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, owner: &str, facts: WeddingFacts) {
        self.facts.write().await.insert(owner.to_string(), facts);
    }
}

#[async_trait]
impl WeddingFactsSource for InMemoryFacts {
    async fn load_facts(&self, owner: &str) -> Result<Option<WeddingFacts>, PortError> {
        Ok(self.facts.read().await.get(owner).cloned())
    }
}
