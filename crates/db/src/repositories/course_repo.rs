//! Repository for the `courses` and `course_videos` tables.

use imagingpedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{
    CourseSummary, CourseVideo, CourseWithVideos, CreateCourse, CreateCourseVideo,
};

/// Course columns plus the aggregated video count. Requires `GROUP BY c.id`.
const SUMMARY_COLUMNS: &str = "c.id, c.course_name, c.course_description, c.course_image, \
    COUNT(v.id) AS video_count, c.created_at";

const VIDEO_COLUMNS: &str = "id, course_id, title, video_url, duration, sort_order, created_at";

/// Read-side access to the course catalogue.
pub struct CourseRepo;

impl CourseRepo {
    /// List all courses, newest first, each with its video count.
    pub async fn list(pool: &PgPool) -> Result<Vec<CourseSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} \
             FROM courses c \
             LEFT JOIN course_videos v ON v.course_id = c.id \
             GROUP BY c.id \
             ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, CourseSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a course by ID, enriched with its videos.
    pub async fn find_by_id_with_videos(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseWithVideos>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} \
             FROM courses c \
             LEFT JOIN course_videos v ON v.course_id = c.id \
             WHERE c.id = $1 \
             GROUP BY c.id"
        );
        let course = sqlx::query_as::<_, CourseSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match course {
            Some(course) => {
                let videos = Self::list_videos(pool, course.id).await?;
                Ok(Some(CourseWithVideos { course, videos }))
            }
            None => Ok(None),
        }
    }

    /// List a course's videos in playback order.
    pub async fn list_videos(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseVideo>, sqlx::Error> {
        let query = format!(
            "SELECT {VIDEO_COLUMNS} FROM course_videos \
             WHERE course_id = $1 \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, CourseVideo>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a course and return it as a summary with no videos.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<CourseSummary, sqlx::Error> {
        sqlx::query_as::<_, CourseSummary>(
            "INSERT INTO courses (course_name, course_description, course_image) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, '')) \
             RETURNING id, course_name, course_description, course_image, \
                 0::BIGINT AS video_count, created_at",
        )
        .bind(&input.course_name)
        .bind(&input.course_description)
        .bind(&input.course_image)
        .fetch_one(pool)
        .await
    }

    /// Attach a video to a course.
    pub async fn add_video(
        pool: &PgPool,
        input: &CreateCourseVideo,
    ) -> Result<CourseVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_videos (course_id, title, video_url, duration, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             RETURNING {VIDEO_COLUMNS}"
        );
        sqlx::query_as::<_, CourseVideo>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.video_url)
            .bind(&input.duration)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }
}
