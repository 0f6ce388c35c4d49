use image::{imageops::FilterType, ImageFormat};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PictureError;

/// Longest edge of a cached picture
const PICTURE_SIZE: u32 = 512;

/// Default limit for a whole picture download
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// On-disk cache of downloaded pet pictures.
///
/// Files are named after the SHA-256 of their URL, so the same URL always
/// maps to the same file. One HTTP client is shared by every fetch.
#[derive(Debug, Clone)]
pub struct PictureCache {
    dir: PathBuf,
    /// Relative picture paths are resolved against this directory
    base_dir: Option<PathBuf>,
    client: reqwest::Client,
}

impl PictureCache {
    /// Create a cache whose downloads give up after `timeout`
    pub fn new(dir: PathBuf, timeout: Duration) -> Result<Self, PictureError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            dir,
            base_dir: None,
            client,
        })
    }

    /// Resolve relative picture paths from `base_dir` (usually the catalog's
    /// directory) instead of the working directory
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// Default cache location
    /// Returns ~/.cache/pet-adoption/pictures on Linux
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::cache_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir);

        path.push("pet-adoption");
        path.push("pictures");
        path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the cached copy of `url` lives (whether or not it exists yet)
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.jpg", cache_key(url)))
    }

    /// Resolve a picture URL to a local file the UI can display.
    ///
    /// Local files are used in place. Remote pictures are downloaded once,
    /// downscaled and kept in the cache directory. A stalled server fails
    /// with `PictureError::Http` once the client timeout expires.
    pub async fn fetch(self, url: String) -> Result<PathBuf, PictureError> {
        if let Some(path) = self.local_path(&url).await {
            return Ok(path);
        }

        let cached = self.path_for(&url);
        if tokio::fs::try_exists(&cached).await? {
            return Ok(cached);
        }

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PictureError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;

        tokio::fs::create_dir_all(&self.dir).await?;

        // Decoding and resizing are CPU-bound
        let path = tokio::task::spawn_blocking(move || save_picture(&bytes, &cached)).await??;

        tracing::debug!("📸 Cached picture {} at {}", url, path.display());
        Ok(path)
    }

    /// A picture URL that names an existing local file (plain path or file://).
    /// Relative paths are joined onto the base directory when one is set.
    async fn local_path(&self, url: &str) -> Option<PathBuf> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return None;
        }

        let raw = Path::new(url.strip_prefix("file://").unwrap_or(url));
        let path = match &self.base_dir {
            Some(base) if raw.is_relative() => base.join(raw),
            _ => raw.to_path_buf(),
        };

        let metadata = tokio::fs::metadata(&path).await.ok()?;
        metadata.is_file().then_some(path)
    }
}

/// Hex SHA-256 of the URL
pub fn cache_key(url: &str) -> String {
    format!("{:x}", Sha256::digest(url.as_bytes()))
}

/// Decode, downscale and save a picture as JPEG.
///
/// The file is written next to `path` first and renamed into place, so an
/// interrupted save never leaves a truncated picture at `path`.
fn save_picture(bytes: &[u8], path: &Path) -> Result<PathBuf, PictureError> {
    let img = image::load_from_memory(bytes)?;

    let resized = if img.width() > PICTURE_SIZE || img.height() > PICTURE_SIZE {
        img.resize(PICTURE_SIZE, PICTURE_SIZE, FilterType::Lanczos3)
    } else {
        img
    };

    let partial = path.with_extension("jpg.part");

    // JPEG has no alpha channel
    if let Err(e) = resized.to_rgb8().save_with_format(&partial, ImageFormat::Jpeg) {
        let _ = std::fs::remove_file(&partial);
        return Err(e.into());
    }
    std::fs::rename(&partial, path)?;

    Ok(path.to_path_buf())
}
