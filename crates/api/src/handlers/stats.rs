use axum::extract::State;
use axum::Json;
use dram_db::models::stats::CatalogStats;
use dram_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<CatalogStats>> {
    let stats = StatsRepo::counts(&state.pool).await?;
    Ok(Json(stats))
}
