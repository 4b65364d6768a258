//! Handlers for the `/distilleries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dram_core::error::CoreError;
use dram_core::types::DbId;
use dram_db::models::distillery::{Distillery, DistilleryInput};
use dram_db::repositories::DistilleryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Distillery",
        id,
    })
}

/// GET /api/distilleries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Distillery>>> {
    let distilleries = DistilleryRepo::list(&state.pool).await?;
    Ok(Json(distilleries))
}

/// GET /api/distilleries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Distillery>> {
    let distillery = DistilleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(distillery))
}

/// POST /api/distilleries
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<DistilleryInput>,
) -> AppResult<(StatusCode, Json<Distillery>)> {
    input.validate()?;
    let distillery = DistilleryRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, distillery_id = distillery.id, "Distillery created");
    Ok((StatusCode::CREATED, Json(distillery)))
}

/// PUT /api/distilleries/{id}
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DistilleryInput>,
) -> AppResult<Json<Distillery>> {
    input.validate()?;
    let distillery = DistilleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = admin.user_id, distillery_id = id, "Distillery updated");
    Ok(Json(distillery))
}

/// DELETE /api/distilleries/{id}
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DistilleryRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = admin.user_id, distillery_id = id, "Distillery deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
