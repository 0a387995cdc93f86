//! Repository for the `students` table.

use imagingpedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str = "id, subject_id, student_name, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (subject_id, student_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.subject_id)
            .bind(&input.student_name)
            .fetch_one(pool)
            .await
    }

    /// List the students enrolled in a subject.
    pub async fn list_by_subject(
        pool: &PgPool,
        subject_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE subject_id = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(subject_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every student of a subject. Returns the number of rows removed.
    pub async fn delete_by_subject_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        subject_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE subject_id = $1")
            .bind(subject_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
