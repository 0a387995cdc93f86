//! Row models and input DTOs, one module per table group.

pub mod course;
pub mod question;
pub mod student;
pub mod subject;
pub mod submission;
