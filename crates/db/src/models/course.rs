//! Course and course video models.

use imagingpedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row with its video count, as listed by the catalogue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseSummary {
    pub id: DbId,
    pub course_name: String,
    pub course_description: String,
    pub course_image: String,
    pub video_count: i64,
    pub created_at: Timestamp,
}

/// A video row from the `course_videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseVideo {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub video_url: String,
    pub duration: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Course detail: the summary plus its ordered videos.
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithVideos {
    #[serde(flatten)]
    pub course: CourseSummary,
    pub videos: Vec<CourseVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub course_name: String,
    pub course_description: Option<String>,
    pub course_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseVideo {
    pub course_id: DbId,
    pub title: String,
    pub video_url: String,
    pub duration: Option<String>,
    pub sort_order: Option<i32>,
}
