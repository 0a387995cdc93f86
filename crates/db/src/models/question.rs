//! Question entity model.

use imagingpedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question row from the `questions` table. Belongs to one subject.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub subject_id: DbId,
    pub question_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub subject_id: DbId,
    pub question_text: String,
}
