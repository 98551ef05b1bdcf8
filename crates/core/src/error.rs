#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} for owner {owner}")]
    NotFound { entity: &'static str, owner: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
