//! Readiness check at `GET /health`.
//!
//! The service is ready when the database answers, every embedded migration
//! has been applied, and the catalog tables can be counted.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use dram_db::repositories::StatsRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogSize {
    pub whiskies: i64,
    pub distilleries: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the migration table cannot be read.
    pub pending_migrations: Option<usize>,
    pub catalog: Option<CatalogSize>,
}

/// 200 when ready, 503 otherwise. The body is returned in both cases.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = dram_db::health_check(&state.pool).await.is_ok();

    let (pending_migrations, catalog) = if db_healthy {
        let pending = dram_db::pending_migrations(&state.pool).await.ok();
        let catalog = StatsRepo::counts(&state.pool)
            .await
            .ok()
            .map(|stats| CatalogSize {
                whiskies: stats.whiskies,
                distilleries: stats.distilleries,
            });
        (pending, catalog)
    } else {
        (None, None)
    };

    let ready = db_healthy && pending_migrations == Some(0) && catalog.is_some();
    if !ready {
        tracing::warn!(db_healthy, ?pending_migrations, "Health check degraded");
    }

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pending_migrations,
            catalog,
        }),
    )
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
