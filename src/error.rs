//! Error types for the pet adoption app.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the pet catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures while fetching or caching a pet picture
#[derive(Error, Debug)]
pub enum PictureError {
    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode picture: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failures while reading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
