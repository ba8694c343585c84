//! Upload sink for place and agency images

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
};

/// A file part received in a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
    public_prefix: String,
}

impl UploadService {
    pub fn new(config: &UploadsConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            public_prefix: config.public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Directory the files are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the file to the upload directory and return its relative path
    pub async fn store(&self, file: &UploadedFile) -> AppResult<String> {
        let name = stored_file_name(file.file_name.as_deref());

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {}", e)))?;
        tokio::fs::write(self.dir.join(&name), &file.bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write upload {}: {}", name, e)))?;

        tracing::debug!(
            file = %name,
            size = file.bytes.len(),
            content_type = file.content_type.as_deref().unwrap_or("unknown"),
            "Upload stored"
        );

        Ok(format!("{}/{}", self.public_prefix, name))
    }

    /// Remove a file returned by [`store`](Self::store) whose row was never written
    pub async fn discard(&self, stored_path: &str) {
        let name = stored_path.rsplit('/').next().unwrap_or(stored_path);
        if let Err(e) = tokio::fs::remove_file(self.dir.join(name)).await {
            tracing::warn!("Failed to remove orphaned upload {}: {}", stored_path, e);
        }
    }
}

/// Unique on-disk name keeping the original extension when it is a plain one
fn stored_file_name(original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        extension
    )
}
