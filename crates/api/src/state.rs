/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted internally. Tests build one
/// per isolated database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Every request checks out its own connection.
    pub pool: imagingpedia_db::DbPool,
}
