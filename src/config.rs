//! App configuration
//!
//! Config file: ~/.config/pet-adoption/config.toml (missing file = defaults).
//! Command line flags override the file.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Grid column bounds
const MIN_COLUMNS: usize = 1;
const MAX_COLUMNS: usize = 6;

/// Command line flags
#[derive(Parser, Debug, Default)]
#[command(name = "pet-adoption", version, about = "Browse pets available for adoption")]
pub struct Cli {
    /// Catalog JSON file to load instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Number of cards per grid row
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Do not download pet pictures
    #[arg(long)]
    pub no_pictures: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Settings read from config.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file; None = bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Cards per grid row
    pub columns: usize,
    /// Download and show pet pictures
    pub fetch_pictures: bool,
    /// Picture cache directory; None = user cache dir
    pub picture_cache_dir: Option<PathBuf>,
    /// Give up on a picture download after this many seconds
    pub picture_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            columns: 2,
            fetch_pictures: true,
            picture_cache_dir: None,
            picture_timeout_secs: 15,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pet-adoption").join("config.toml"))
    }

    /// Parse config TOML
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content, path)
    }

    /// Resolve the effective config: file (or defaults), then CLI overrides.
    ///
    /// A broken config file is logged and replaced by the defaults.
    pub fn resolve(cli: &Cli) -> Self {
        let path = cli.config.clone().or_else(Self::default_path);

        let config = match path {
            Some(path) => Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("⚠️  {}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        };

        config.with_overrides(cli)
    }

    /// Apply command line flags on top of this config
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(catalog) = &cli.catalog {
            self.catalog_path = Some(catalog.clone());
        }
        if let Some(columns) = cli.columns {
            self.columns = columns;
        }
        if cli.no_pictures {
            self.fetch_pictures = false;
        }
        self.normalized()
    }

    /// Download timeout for pet pictures
    pub fn picture_timeout(&self) -> Duration {
        Duration::from_secs(self.picture_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.columns = self.columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
        self.picture_timeout_secs = self.picture_timeout_secs.max(1);
        self
    }
}
