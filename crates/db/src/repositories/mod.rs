//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods suffixed `_in` run on an
//! already-open transaction instead.

pub mod course_repo;
pub mod question_repo;
pub mod student_repo;
pub mod subject_repo;
pub mod submission_repo;

pub use course_repo::CourseRepo;
pub use question_repo::QuestionRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
pub use submission_repo::SubmissionRepo;
