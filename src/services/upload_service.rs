use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    config::Config,
    error::{AppError, Result},
};

/// Where an uploaded image ended up. `Fallback` carries a synthesized public
/// path whose file never made it to disk; callers see the distinction instead
/// of a silently substituted URL.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredImage {
    Stored { url: String },
    Fallback { url: String },
}

impl StoredImage {
    pub fn url(&self) -> &str {
        match self {
            Self::Stored { url } | Self::Fallback { url } => url,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }
}

/// Image upload: local validation first, then a write under a generated
/// unique filename served from `/uploads`.
#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(config: &Config) -> Self {
        Self {
            dir: PathBuf::from(&config.upload_dir),
            max_bytes: config.max_upload_bytes,
        }
    }

    /// Rejects non-images and oversized files before anything touches disk
    pub fn validate(&self, content_type: Option<&str>, size: usize) -> Result<()> {
        match content_type {
            Some(ct) if ct.starts_with("image/") => {}
            _ => {
                return Err(AppError::Upload(
                    "يسمح فقط برفع ملفات الصور".to_string(),
                ));
            }
        }

        if size > self.max_bytes {
            return Err(AppError::Upload(format!(
                "حجم الملف يتجاوز الحد المسموح ({} ميجابايت)",
                self.max_bytes / (1024 * 1024)
            )));
        }

        Ok(())
    }

    pub async fn store(
        &self,
        content_type: Option<&str>,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredImage> {
        self.validate(content_type, bytes.len())?;

        let filename = format!("{}.{}", Uuid::new_v4(), extension(content_type, original_name));
        let url = format!("/uploads/{filename}");

        if let Err(e) = self.write_file(&filename, bytes).await {
            // The caller still gets a path, but tagged as unbacked
            tracing::warn!(%e, filename, "image write failed, returning unbacked path");
            return Ok(StoredImage::Fallback { url });
        }

        Ok(StoredImage::Stored { url })
    }

    async fn write_file(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(filename), bytes).await
    }
}

/// Pick a file extension from the original name, falling back to the MIME
/// subtype when the name has none worth keeping
fn extension(content_type: Option<&str>, original_name: Option<&str>) -> String {
    if let Some(name) = original_name {
        if let Some((_, ext)) = name.rsplit_once('.') {
            if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return ext.to_ascii_lowercase();
            }
        }
    }

    content_type
        .and_then(|ct| ct.strip_prefix("image/"))
        .map(|sub| sub.to_ascii_lowercase())
        .unwrap_or_else(|| "img".to_string())
}
