/// Pet picture loading
///
/// This module handles:
/// - Downloading and caching pictures on disk (cache.rs)
/// - Tracking which pictures are loading, ready or failed (PictureBoard)

pub mod cache;

pub use cache::PictureCache;

use std::collections::HashMap;
use std::path::PathBuf;

/// Loading state of one picture URL
#[derive(Debug, Clone, PartialEq)]
pub enum PictureState {
    Loading,
    Ready(PathBuf),
    Failed(String),
}

/// Per-URL picture state, owned by the app and read by the views
#[derive(Debug, Default)]
pub struct PictureBoard {
    pictures: HashMap<String, PictureState>,
}

impl PictureBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a URL as loading.
    ///
    /// Returns true only the first time a URL is requested; callers start a
    /// fetch only then.
    pub fn request(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() || self.pictures.contains_key(url) {
            return false;
        }
        self.pictures.insert(url.to_string(), PictureState::Loading);
        true
    }

    /// Record the outcome of a fetch. Unrequested URLs are ignored.
    pub fn resolve(&mut self, url: &str, result: Result<PathBuf, String>) {
        let Some(state) = self.pictures.get_mut(url) else {
            tracing::debug!("Ignoring picture result for unrequested {}", url);
            return;
        };

        *state = match result {
            Ok(path) => PictureState::Ready(path),
            Err(e) => {
                tracing::warn!("⚠️  Picture {} unavailable: {}", url, e);
                PictureState::Failed(e)
            }
        };
    }

    /// State of a URL; None if it was never requested
    pub fn state(&self, url: &str) -> Option<&PictureState> {
        self.pictures.get(url)
    }

    /// Number of pictures still loading
    pub fn pending(&self) -> usize {
        self.pictures
            .values()
            .filter(|state| matches!(state, PictureState::Loading))
            .count()
    }
}
