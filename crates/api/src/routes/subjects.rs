//! Route definitions for the `/subjects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subject;
use crate::state::AppState;

/// Routes mounted at `/subjects`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subject::list).post(subject::create))
        .route("/{id}", get(subject::get_by_id).delete(subject::delete))
}
