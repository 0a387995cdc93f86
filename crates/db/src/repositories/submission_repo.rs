//! Repository for the `submissions` table.

use imagingpedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

const COLUMNS: &str = "id, question_id, answer_text, created_at, updated_at";

/// Provides CRUD operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (question_id, answer_text)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(input.question_id)
            .bind(&input.answer_text)
            .fetch_one(pool)
            .await
    }

    /// List the submissions for a question in creation order.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM submissions WHERE question_id = $1 ORDER BY id");
        sqlx::query_as::<_, Submission>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every submission answering one of `question_ids`.
    /// Returns the number of rows removed.
    pub async fn delete_by_question_ids_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE question_id = ANY($1)")
            .bind(question_ids)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
