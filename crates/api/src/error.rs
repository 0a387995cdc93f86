use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use imagingpedia_core::error::CoreError;
use serde_json::json;

/// Failure of an HTTP handler or extractor.
///
/// Every variant renders as a JSON body `{"error": <message>, "code": <CODE>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request input rejected before reaching a handler body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and message for the response body.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Database(err) => store_failure_parts(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Map a sqlx error onto the response contract.
///
/// A missing row is a 404 and a `uq_*` unique violation a 409. Any other
/// failure is a 500 whose message is the store's own, so a failed cascade
/// delete reports what went wrong.
fn store_failure_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            )
        }
        sqlx::Error::Database(db_err) => db_err,
        other => {
            tracing::error!(error = %other, "Store failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                other.to_string(),
            );
        }
    };

    // 23505: unique_violation
    if db_err.code().as_deref() == Some("23505") {
        if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            );
        }
    }

    tracing::error!(error = %db_err, code = ?db_err.code(), "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR",
        db_err.message().to_string(),
    )
}
