//! Handlers for the `/courses` resource.

use axum::extract::State;
use axum::Json;
use imagingpedia_core::error::CoreError;
use imagingpedia_db::models::course::{CourseSummary, CourseWithVideos};
use imagingpedia_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// GET /courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CourseSummary>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<CourseWithVideos>> {
    let course = CourseRepo::find_by_id_with_videos(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Course",
                id,
            })
        })?;
    Ok(Json(course))
}
