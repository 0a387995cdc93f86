//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list))
        .route("/{id}", get(course::get_by_id))
}
