//! Profile image upload collaborator
//!
//! The portal has no upload endpoint, so [`SimulatedUploader`] validates the
//! file locally and reports what a remote service would.

use std::path::Path;
use std::time::Duration;

use sacco_core::prelude::*;

/// Image extensions accepted for a profile picture.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Default size ceiling for a profile picture (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Acknowledgement of a completed upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub file_name: String,
    pub bytes: u64,
}

/// Uploads a profile image and reports the outcome
#[trait_variant::make(ImageUploader: Send)]
pub trait LocalImageUploader {
    async fn upload(&self, path: &Path) -> Result<UploadReceipt>;
}

/// Local stand-in for the upload endpoint.
#[derive(Debug, Clone)]
pub struct SimulatedUploader {
    max_bytes: u64,
    latency: Duration,
}

impl Default for SimulatedUploader {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            latency: Duration::ZERO,
        }
    }
}

impl SimulatedUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

/// Display name of an upload: the final path component, or the whole path.
pub fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

impl ImageUploader for SimulatedUploader {
    async fn upload(&self, path: &Path) -> Result<UploadReceipt> {
        let file_name = upload_file_name(path);

        if !has_image_extension(path) {
            return Err(Error::upload(file_name, "not a supported image type"));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::upload(&file_name, e.to_string()))?;
        if !metadata.is_file() {
            return Err(Error::upload(file_name, "not a regular file"));
        }
        if metadata.len() > self.max_bytes {
            return Err(Error::upload(
                file_name,
                format!("larger than {} bytes", self.max_bytes),
            ));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        debug!("Simulated upload of {} ({} bytes)", file_name, metadata.len());
        Ok(UploadReceipt {
            file_name,
            bytes: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{upload_file_name, ImageUploader, SimulatedUploader};
    use sacco_core::prelude::*;
    use std::path::Path;

    #[tokio::test]
    async fn test_upload_accepts_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.PNG");
        std::fs::write(&path, [0u8; 64]).unwrap();

        let receipt = SimulatedUploader::new().upload(&path).await.unwrap();
        assert_eq!(receipt.file_name, "avatar.PNG");
        assert_eq!(receipt.bytes, 64);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = SimulatedUploader::new().upload(&path).await.unwrap_err();
        assert!(matches!(err, Error::Upload { ref file, .. } if file == "notes.txt"));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_upload_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.jpg");

        let err = SimulatedUploader::new().upload(&path).await.unwrap_err();
        assert!(err.to_string().starts_with("gone.jpg file upload failed"));
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.webp");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let uploader = SimulatedUploader::new().with_max_bytes(1024);
        assert!(uploader.upload(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_upload_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folder.gif");
        std::fs::create_dir(&path).unwrap();

        assert!(SimulatedUploader::new().upload(&path).await.is_err());
    }

    #[test]
    fn test_upload_file_name() {
        assert_eq!(upload_file_name(Path::new("/tmp/me.jpg")), "me.jpg");
        assert_eq!(upload_file_name(Path::new("/")), "/");
    }
}
