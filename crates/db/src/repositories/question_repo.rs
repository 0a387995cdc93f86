//! Repository for the `questions` table.

use imagingpedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

const COLUMNS: &str = "id, subject_id, question_text, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (subject_id, question_text)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(input.subject_id)
            .bind(&input.question_text)
            .fetch_one(pool)
            .await
    }

    /// List the questions of a subject in creation order.
    pub async fn list_by_subject(
        pool: &PgPool,
        subject_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE subject_id = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(subject_id)
            .fetch_all(pool)
            .await
    }

    /// Collect the IDs of a subject's questions within an open transaction.
    pub async fn ids_for_subject_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        subject_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as("SELECT id FROM questions WHERE subject_id = $1")
            .bind(subject_id)
            .fetch_all(&mut **tx)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Delete every question of a subject. Returns the number of rows removed.
    ///
    /// Fails with a foreign key violation if any of them still has submissions.
    pub async fn delete_by_subject_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        subject_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE subject_id = $1")
            .bind(subject_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
