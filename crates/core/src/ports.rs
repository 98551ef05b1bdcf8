//! Collaborator ports.
//!
//! The editor and viewer reach the descriptor store, the wedding-details
//! service and the image generator only through these traits. The database
//! crate, the image-generation client and the in-memory store implement them.

use async_trait::async_trait;

use crate::descriptor::StoredCard;
use crate::facts::WeddingFacts;

/// A failed call to a collaborator, carrying a short human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The collaborator could not be reached or did not answer in time.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The collaborator answered with something unusable.
    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

/// The design descriptor store. One record per owner; writes are upserts.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Load the stored card for `owner`, if one exists.
    async fn load(&self, owner: &str) -> Result<Option<StoredCard>, PortError>;

    /// Create or fully replace the card for `owner`.
    async fn save(&self, owner: &str, card: &StoredCard) -> Result<(), PortError>;

    /// Flip guest visibility without touching the design.
    ///
    /// Returns `false` when no card exists for `owner`.
    async fn set_enabled(&self, owner: &str, enabled: bool) -> Result<bool, PortError>;
}

/// Read-only access to the wedding-details collaborator.
#[async_trait]
pub trait WeddingFactsSource: Send + Sync {
    async fn load_facts(&self, owner: &str) -> Result<Option<WeddingFacts>, PortError>;
}

/// Opaque prompt to image-URL generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, PortError>;
}
