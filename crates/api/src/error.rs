use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wedcard_core::editor::EditorError;
use wedcard_core::error::CoreError;
use wedcard_core::ports::PortError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, the session and collaborator
/// errors from `wedcard_core`, and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wedcard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An editor session operation failed.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// A collaborator (store, image service) failed.
    #[error(transparent)]
    Port(#[from] PortError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Editor session ---
            AppError::Editor(err) => match err {
                EditorError::EmptyPrompt
                | EditorError::EmptyMedia
                | EditorError::NoCandidate
                | EditorError::UnknownPreset(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
                EditorError::Generation(port) | EditorError::Save(port) => {
                    classify_port_error(port)
                }
                EditorError::Serialize(e) => internal(&e.to_string()),
            },

            // --- Collaborators ---
            AppError::Port(port) => classify_port_error(port),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => internal(msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal(detail: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %detail, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, owner } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} not found for owner {owner}"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}

/// Classify a collaborator failure.
///
/// - `Unavailable` maps to 503.
/// - `Rejected` and `Unexpected` map to 502 and carry the collaborator's
///   short reason, which never includes internal detail.
fn classify_port_error(err: &PortError) -> (StatusCode, &'static str, String) {
    match err {
        PortError::Unavailable(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            msg.clone(),
        ),
        PortError::Rejected(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_REJECTED", msg.clone()),
        PortError::Unexpected(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone()),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            internal(&db_err.to_string())
        }
        other => internal(&other.to_string()),
    }
}
