//! Optional on-disk copy of generated videos.

use crate::{Error, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct VideoArchive {
    dir: PathBuf,
}

impl VideoArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decodes the `video` field of a backend reply and writes it as an
    /// mp4. Returns `None` when the reply carries no video.
    pub async fn store(&self, body: &Value) -> Result<Option<PathBuf>> {
        let Some(encoded) = body.get("video").and_then(Value::as_str) else {
            debug!("Backend reply has no video field, nothing to archive");
            return Ok(None);
        };

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| Error::archive(format!("Invalid base64 video: {}", e)))?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!(
            "video_{}_{}.mp4",
            Utc::now().format("%Y%m%dT%H%M%SZ"),
            Uuid::new_v4().simple()
        );
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;

        info!("Archived {} byte video to {}", bytes.len(), path.display());

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_decodes_video() {
        let temp_dir = TempDir::new().unwrap();
        let archive = VideoArchive::new(temp_dir.path().join("videos"));

        let body = json!({ "video": STANDARD.encode(b"fake mp4 bytes") });
        let path = archive.store(&body).await.unwrap().unwrap();

        assert!(path.starts_with(archive.dir()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp4"));
        assert_eq!(std::fs::read(&path).unwrap(), b"fake mp4 bytes");
    }

    #[tokio::test]
    async fn test_store_without_video_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let archive = VideoArchive::new(temp_dir.path().join("videos"));

        let result = archive.store(&json!({ "status": "done" })).await.unwrap();

        assert!(result.is_none());
        assert!(!archive.dir().exists());
    }

    #[tokio::test]
    async fn test_store_rejects_invalid_base64() {
        let temp_dir = TempDir::new().unwrap();
        let archive = VideoArchive::new(temp_dir.path());

        let result = archive.store(&json!({ "video": "!!not base64!!" })).await;

        assert!(matches!(result, Err(Error::Archive(_))));
    }
}
