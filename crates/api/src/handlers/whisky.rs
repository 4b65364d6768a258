//! Handlers for the `/whiskies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dram_core::error::CoreError;
use dram_core::types::DbId;
use dram_db::models::whisky::{Whisky, WhiskyInput};
use dram_db::repositories::WhiskyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Whisky",
        id,
    })
}

/// GET /api/whiskies
///
/// Active whiskies only, ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Whisky>>> {
    let whiskies = WhiskyRepo::list_active(&state.pool).await?;
    Ok(Json(whiskies))
}

/// GET /api/whiskies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Whisky>> {
    let whisky = WhiskyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(whisky))
}

/// POST /api/whiskies
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<WhiskyInput>,
) -> AppResult<(StatusCode, Json<Whisky>)> {
    input.validate()?;

    let id = WhiskyRepo::create(&state.pool, &input).await?;
    let whisky = WhiskyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = admin.user_id, whisky_id = id, "Whisky created");
    Ok((StatusCode::CREATED, Json(whisky)))
}

/// PUT /api/whiskies/{id}
///
/// Replaces every field; omitted optional fields become `null`.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<WhiskyInput>,
) -> AppResult<Json<Whisky>> {
    input.validate()?;

    if !WhiskyRepo::update(&state.pool, id, &input).await? {
        return Err(not_found(id));
    }
    let whisky = WhiskyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = admin.user_id, whisky_id = id, "Whisky updated");
    Ok(Json(whisky))
}

/// DELETE /api/whiskies/{id}
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WhiskyRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = admin.user_id, whisky_id = id, "Whisky deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
