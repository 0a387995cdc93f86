//! Request extractors whose rejections render as `{error, code}` JSON.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use imagingpedia_core::types::DbId;

use crate::error::AppError;

/// Numeric resource id taken from a `/{id}` path segment.
///
/// Axum's own `Path<DbId>` rejects a non-numeric segment with a plain-text
/// body; this extractor routes the rejection through [`AppError`] instead.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(IdPath(id))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameter");
        AppError::BadRequest(rejection.body_text())
    }
}
