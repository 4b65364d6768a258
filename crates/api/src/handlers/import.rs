//! Handlers for the CSV bulk importers.
//!
//! Both endpoints take a multipart form with a single `file` field. The file
//! is staged on disk, streamed row by row through the importer, and removed
//! once the request finishes.

use axum::extract::{Multipart, State};
use axum::Json;
use dram_core::import::{self, ImportReport, RecordKind};
use dram_db::PgCatalogStore;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::admin::AdminUser;
use crate::staging::StagedUpload;
use crate::state::AppState;

/// Multipart field carrying the CSV file.
const FILE_FIELD: &str = "file";

/// Outcome of one import request.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    pub imported: u32,
    /// Only reported by the distillery importer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<u32>,
    pub skipped: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ImportResponse {
    fn new(kind: RecordKind, report: ImportReport) -> Self {
        let message = report.summary(kind);
        Self {
            success: true,
            message,
            imported: report.imported,
            updated: (kind == RecordKind::Distillery).then_some(report.updated),
            skipped: report.skipped,
            errors: report.errors,
        }
    }
}

async fn stage(state: &AppState, multipart: &mut Multipart) -> AppResult<StagedUpload> {
    StagedUpload::from_multipart(
        &state.config.staging_dir,
        multipart,
        FILE_FIELD,
        state.config.max_upload_bytes,
    )
    .await
}

/// POST /api/import/whiskies
pub async fn import_whiskies(
    admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportResponse>> {
    let staged = stage(&state, &mut multipart).await?;
    tracing::info!(
        user_id = admin.user_id,
        file = staged.original_name().unwrap_or("-"),
        size_bytes = staged.size_bytes(),
        staged_at = %staged.path().display(),
        "Starting whisky import",
    );

    let store = PgCatalogStore::new(state.pool.clone());
    let contents = staged.read().await?;
    let report = import::import_whiskies(&store, contents.as_slice()).await?;

    Ok(Json(ImportResponse::new(RecordKind::Whisky, report)))
}

/// POST /api/import/distilleries
pub async fn import_distilleries(
    admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportResponse>> {
    let staged = stage(&state, &mut multipart).await?;
    tracing::info!(
        user_id = admin.user_id,
        file = staged.original_name().unwrap_or("-"),
        size_bytes = staged.size_bytes(),
        staged_at = %staged.path().display(),
        "Starting distillery import",
    );

    let store = PgCatalogStore::new(state.pool.clone());
    let contents = staged.read().await?;
    let report = import::import_distilleries(&store, contents.as_slice()).await?;

    Ok(Json(ImportResponse::new(RecordKind::Distillery, report)))
}
