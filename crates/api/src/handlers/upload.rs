//! Handler for `POST /uploads/photo`.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminUser;
use crate::state::AppState;

/// Accepted photo extensions (lowercase).
pub const SUPPORTED_PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Serialize)]
pub struct PhotoUploadResponse {
    /// Public path under `/uploads`.
    pub url: String,
    pub filename: String,
}

/// Lowercased extension of `filename` if it is a supported photo format.
fn photo_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    if SUPPORTED_PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}

/// POST /api/uploads/photo
///
/// Multipart form with a `photo` field. The file is stored under a random
/// name in `<UPLOAD_DIR>/photos` and served back from `/uploads/photos/`.
pub async fn upload_photo(
    admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<PhotoUploadResponse>)> {
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("photo") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            photo = Some((filename, data.to_vec()));
        }
    }

    let (original, data) =
        photo.ok_or_else(|| AppError::BadRequest("Missing required 'photo' field".into()))?;

    let ext = photo_extension(&original).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unsupported image format. Supported: {}",
            SUPPORTED_PHOTO_EXTENSIONS.join(", ")
        ))
    })?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let dir = state.config.photo_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let filename = format!("{}.{ext}", uuid::Uuid::new_v4());
    tokio::fs::write(dir.join(&filename), &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(user_id = admin.user_id, %filename, size = data.len(), "Photo uploaded");

    Ok((
        StatusCode::CREATED,
        Json(PhotoUploadResponse {
            url: format!("/uploads/photos/{filename}"),
            filename,
        }),
    ))
}
