//! Liveness and readiness report.
//!
//! `status` is `ok` only when the database answers and every embedded
//! migration has been applied; otherwise it is `degraded`. The endpoint
//! itself always answers `200`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the count could not be read.
    pub pending_migrations: Option<usize>,
}

impl HealthReport {
    async fn probe(pool: &DbPool) -> Self {
        let db_healthy = catalog_db::health_check(pool).await.is_ok();
        let pending_migrations = if db_healthy {
            catalog_db::pending_migrations(pool)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Could not read migration ledger"))
                .ok()
        } else {
            None
        };

        let ready = db_healthy && pending_migrations == Some(0);

        Self {
            status: if ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pending_migrations,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::probe(&state.pool).await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
