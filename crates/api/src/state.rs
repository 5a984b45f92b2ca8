use catalog_db::DbPool;

/// State handed to every handler through `State<AppState>`.
///
/// Configuration is consumed while the router is built and is not needed
/// per request, so only the pool lives here.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
