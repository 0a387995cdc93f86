//! Handlers for the `/subjects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use imagingpedia_core::error::CoreError;
use imagingpedia_core::subject::{normalize_subject_name, MSG_ALREADY_EXISTS};
use imagingpedia_db::models::subject::{CreateSubject, Subject};
use imagingpedia_db::repositories::SubjectRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// Confirmation message returned after a cascading delete.
pub const MSG_SUBJECT_DELETED: &str = "Subject and all related data deleted successfully";

/// Body of a successful `DELETE /subjects/{id}`.
#[derive(Debug, Serialize)]
pub struct SubjectDeletedResponse {
    pub message: &'static str,
    /// The subject as it was immediately before deletion.
    pub subject: Subject,
}

/// GET /subjects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subject>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(subjects))
}

/// POST /subjects
///
/// Rejects blank names and names already taken (compared ignoring case)
/// with 400.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubject>,
) -> AppResult<(StatusCode, Json<Subject>)> {
    let name = normalize_subject_name(input.subject_name.as_deref())?;

    if SubjectRepo::find_by_name_ci(&state.pool, &name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            MSG_ALREADY_EXISTS.into(),
        )));
    }

    let subject = SubjectRepo::create(&state.pool, &name).await?;
    tracing::info!(subject_id = subject.id, subject_name = %subject.subject_name, "Subject created");
    Ok((StatusCode::CREATED, Json(subject)))
}

/// GET /subjects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Subject",
                id,
            })
        })?;
    Ok(Json(subject))
}

/// DELETE /subjects/{id}
///
/// Removes the subject with its questions, their submissions and the
/// subject's students in one transaction. 404 if the subject is absent,
/// 500 with the store's message if anything fails (nothing is removed).
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<SubjectDeletedResponse>> {
    let deletion = SubjectRepo::delete_cascade(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Subject",
                id,
            })
        })?;

    tracing::info!(
        subject_id = id,
        submissions_deleted = deletion.submissions_deleted,
        questions_deleted = deletion.questions_deleted,
        students_deleted = deletion.students_deleted,
        "Subject and dependents deleted"
    );

    Ok(Json(SubjectDeletedResponse {
        message: MSG_SUBJECT_DELETED,
        subject: deletion.subject,
    }))
}
