//! Submission entity model.

use imagingpedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submission row from the `submissions` table. Belongs to one question.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub question_id: DbId,
    pub answer_text: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub question_id: DbId,
    pub answer_text: Option<String>,
}
