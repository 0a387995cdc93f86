pub mod courses;
pub mod health;
pub mod subjects;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /subjects                 list, create
/// /subjects/{id}            get, delete (cascades to questions,
///                           submissions and students)
///
/// /courses                  list with video counts
/// /courses/{id}             detail with videos
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/subjects", subjects::router())
        .nest("/courses", courses::router())
}
