//! Guest viewer: the read-only rendering of a published card.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::PresetCatalog;
use crate::composer::{compose, CardLayout};
use crate::facts::WeddingFacts;
use crate::migrate;
use crate::ports::{CardStore, WeddingFactsSource};
use crate::resolver::resolve_card;

/// What a guest gets to see.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GuestView {
    /// No card, a disabled card, or the card could not be loaded.
    Unavailable,
    Card { layout: CardLayout },
}

impl GuestView {
    pub fn is_available(&self) -> bool {
        matches!(self, GuestView::Card { .. })
    }

    pub fn layout(&self) -> Option<&CardLayout> {
        match self {
            GuestView::Card { layout } => Some(layout),
            GuestView::Unavailable => None,
        }
    }
}

#[derive(Clone)]
pub struct GuestViewer {
    store: Arc<dyn CardStore>,
    facts: Arc<dyn WeddingFactsSource>,
    catalog: Arc<PresetCatalog>,
}

impl GuestViewer {
    pub fn new(
        store: Arc<dyn CardStore>,
        facts: Arc<dyn WeddingFactsSource>,
        catalog: Arc<PresetCatalog>,
    ) -> Self {
        Self {
            store,
            facts,
            catalog,
        }
    }

    /// Load and render `owner`'s card for a guest.
    pub async fn view(&self, owner: &str) -> GuestView {
        let (stored, facts) = tokio::join!(self.store.load(owner), self.facts.load_facts(owner));

        let stored = match stored {
            Ok(Some(stored)) => stored,
            Ok(None) => return GuestView::Unavailable,
            Err(e) => {
                tracing::warn!(owner, error = %e, "Failed to load card for guest view");
                return GuestView::Unavailable;
            }
        };

        let descriptor = migrate::upgrade(stored);
        if !descriptor.enabled {
            tracing::debug!(owner, "Card disabled, hiding from guests");
            return GuestView::Unavailable;
        }

        let facts = facts.unwrap_or_else(|e| {
            tracing::warn!(owner, error = %e, "Failed to load wedding facts for guest view");
            None
        });
        let facts = facts.unwrap_or_else(WeddingFacts::default);

        let layout = compose(&resolve_card(&descriptor, &self.catalog), &facts);
        GuestView::Card { layout }
    }
}
