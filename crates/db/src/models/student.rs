//! Student entity model.

use imagingpedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row from the `students` table, enrolled in exactly one subject.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub subject_id: DbId,
    pub student_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub subject_id: DbId,
    pub student_name: String,
}
