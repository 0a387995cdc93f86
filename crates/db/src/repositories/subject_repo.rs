//! Repository for the `subjects` table, including the cascading delete of
//! everything that hangs off a subject.

use imagingpedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{Subject, SubjectDeletion};
use crate::repositories::{QuestionRepo, StudentRepo, SubmissionRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject_name, created_at, updated_at";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    ///
    /// `subject_name` is expected to be validated and trimmed already.
    pub async fn create(pool: &PgPool, subject_name: &str) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (subject_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(subject_name)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a subject whose name matches `subject_name` ignoring case.
    pub async fn find_by_name_ci(
        pool: &PgPool,
        subject_name: &str,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subjects WHERE LOWER(subject_name) = LOWER($1)");
        sqlx::query_as::<_, Subject>(&query)
            .bind(subject_name)
            .fetch_optional(pool)
            .await
    }

    /// List all subjects ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY subject_name, id");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }

    /// Delete a subject together with its questions, their submissions and
    /// the subject's students, all in one transaction.
    ///
    /// Returns `Ok(None)` when the subject does not exist (nothing changes),
    /// `Ok(Some(_))` with the removed row and dependent counts on success.
    /// Any error rolls the whole transaction back before it is returned.
    ///
    /// The subject row is locked with `FOR UPDATE` before any dependent is
    /// touched. A concurrent delete of the same subject waits on that lock
    /// and, once the first transaction commits, finds no row and reports
    /// `None` instead of deleting twice.
    pub async fn delete_cascade(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubjectDeletion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        match Self::delete_cascade_inner(&mut tx, id).await {
            Ok(Some(deletion)) => {
                tx.commit().await?;
                Ok(Some(deletion))
            }
            Ok(None) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        subject_id = id,
                        error = %rollback_err,
                        "Rollback of subject lookup failed"
                    );
                }
                Ok(None)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        subject_id = id,
                        error = %rollback_err,
                        "Rollback after failed subject delete failed"
                    );
                }
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Run the lookup and every delete on an open transaction.
    ///
    /// Order matters: submissions reference questions, questions and
    /// students reference the subject, and none of the foreign keys cascade.
    async fn delete_cascade_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<SubjectDeletion>, sqlx::Error> {
        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM subjects WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let question_ids = QuestionRepo::ids_for_subject_in(tx, id).await?;

        let submissions_deleted = if question_ids.is_empty() {
            0
        } else {
            SubmissionRepo::delete_by_question_ids_in(tx, &question_ids).await?
        };
        let questions_deleted = QuestionRepo::delete_by_subject_in(tx, id).await?;
        let students_deleted = StudentRepo::delete_by_subject_in(tx, id).await?;

        let query = format!("DELETE FROM subjects WHERE id = $1 RETURNING {COLUMNS}");
        let subject = sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;

        tracing::debug!(
            subject_id = id,
            submissions_deleted,
            questions_deleted,
            students_deleted,
            "Subject dependents removed"
        );

        Ok(Some(SubjectDeletion {
            subject,
            submissions_deleted,
            questions_deleted,
            students_deleted,
        }))
    }
}
