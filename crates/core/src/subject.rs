//! Subject name rules.
//!
//! Names are compared case-insensitively for uniqueness; the database backs
//! this with a unique index on `LOWER(subject_name)`.

use crate::error::CoreError;

/// Upper bound matching the `VARCHAR(100)` column.
pub const MAX_SUBJECT_NAME_LEN: usize = 100;

pub const MSG_NAME_REQUIRED: &str = "Subject name is required";
pub const MSG_ALREADY_EXISTS: &str = "Subject already exists";

/// Validate a submitted subject name and return it with surrounding
/// whitespace removed.
///
/// A missing or blank name is rejected with [`MSG_NAME_REQUIRED`].
pub fn normalize_subject_name(raw: Option<&str>) -> Result<String, CoreError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(CoreError::Validation(MSG_NAME_REQUIRED.into()));
    }
    if name.chars().count() > MAX_SUBJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Subject name must be at most {MAX_SUBJECT_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}
