//! Temporary on-disk copies of uploaded CSV files.

use std::path::Path;

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// An uploaded file written to the staging directory.
///
/// The file is removed when this value is dropped, so every exit path of an
/// import (success, skipped rows, fatal parse error, early `?` return)
/// releases it.
pub struct StagedUpload {
    file: NamedTempFile,
    original_name: Option<String>,
    size_bytes: u64,
}

fn staging_error(e: std::io::Error) -> AppError {
    AppError::InternalError(format!("Failed to stage upload: {e}"))
}

impl StagedUpload {
    /// Stream the multipart field named `field_name` into a new file under `dir`.
    ///
    /// Other fields are ignored. Fails with 400 when the field is missing,
    /// empty, or larger than `max_bytes`.
    pub async fn from_multipart(
        dir: &Path,
        multipart: &mut Multipart,
        field_name: &str,
        max_bytes: usize,
    ) -> AppResult<Self> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            if field.name() == Some(field_name) {
                return Self::from_field(dir, field, max_bytes).await;
            }
        }

        Err(AppError::BadRequest(format!(
            "Missing multipart field '{field_name}'"
        )))
    }

    async fn from_field(dir: &Path, mut field: Field<'_>, max_bytes: usize) -> AppResult<Self> {
        tokio::fs::create_dir_all(dir).await.map_err(staging_error)?;

        let original_name = field.file_name().map(str::to_string);
        let file = tempfile::Builder::new()
            .prefix("import-")
            .suffix(".csv")
            .tempfile_in(dir)
            .map_err(staging_error)?;

        let mut out = tokio::fs::File::from_std(file.as_file().try_clone().map_err(staging_error)?);
        let mut size_bytes: u64 = 0;

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            size_bytes += chunk.len() as u64;
            if size_bytes > max_bytes as u64 {
                return Err(AppError::BadRequest(format!(
                    "Uploaded file exceeds the {max_bytes} byte limit"
                )));
            }
            out.write_all(&chunk).await.map_err(staging_error)?;
        }
        out.flush().await.map_err(staging_error)?;

        if size_bytes == 0 {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        tracing::debug!(
            path = %file.path().display(),
            size_bytes,
            "Staged uploaded file"
        );

        Ok(Self {
            file,
            original_name,
            size_bytes,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// File name as sent by the client, if any.
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// The staged contents, read without blocking the runtime.
    ///
    /// Bounded by the upload limit enforced in [`StagedUpload::from_multipart`].
    pub async fn read(&self) -> AppResult<Vec<u8>> {
        tokio::fs::read(self.file.path()).await.map_err(staging_error)
    }
}
