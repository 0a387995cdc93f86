//! Subject entity model and DTOs.

use imagingpedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subject row from the `subjects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub subject_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new subject.
///
/// `subject_name` is optional at the wire level so a missing field reaches
/// validation and yields a 400 instead of a JSON rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubject {
    pub subject_name: Option<String>,
}

/// Outcome of a cascading subject delete.
///
/// `subject` holds the row as it was just before removal. The counters are
/// advisory and are only logged by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDeletion {
    pub subject: Subject,
    pub submissions_deleted: u64,
    pub questions_deleted: u64,
    pub students_deleted: u64,
}

impl SubjectDeletion {
    /// Total dependent rows removed alongside the subject.
    pub fn dependents_deleted(&self) -> u64 {
        self.submissions_deleted + self.questions_deleted + self.students_deleted
    }
}
