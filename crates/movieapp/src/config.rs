//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading from
//! TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `MOVIES_DATA_DIR`, `OMDB_API_KEY`, etc.
//! 2. **Local Config**: `./movies.toml` in the working directory.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_dir` | `MOVIES_DATA_DIR` | `data` | Directory holding the store files |
//! | `template` | `MOVIES_TEMPLATE` | built-in | HTML template for the website |
//! | `output` | `MOVIES_OUTPUT` | `_static/index.html` | Generated website |
//! | `omdb_api_key` | `OMDB_API_KEY`, then `API_KEY` | none | Enables lookups when adding movies |
//! | `omdb_url` | `OMDB_URL` | `http://www.omdbapi.com/` | OMDb endpoint |

use crate::error::{MovieError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "movies.toml";

/// Older name of the API key variable, read when `OMDB_API_KEY` is unset.
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// File name of the store used when no per-user store is requested.
pub const DEFAULT_STORE_FILENAME: &str = "movie_database.json";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoviesConfig {
    /// Directory holding the JSON/CSV store files.
    #[config(env = "MOVIES_DATA_DIR", default = "data")]
    pub data_dir: PathBuf,

    /// HTML template containing the movie grid marker.
    #[config(env = "MOVIES_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Where the generated website is written.
    #[config(env = "MOVIES_OUTPUT", default = "_static/index.html")]
    pub output: PathBuf,

    /// OMDb API key. Without it, movies are added by typing their details.
    #[config(env = "OMDB_API_KEY")]
    pub omdb_api_key: Option<String>,

    #[config(env = "OMDB_URL", default = "http://www.omdbapi.com/")]
    pub omdb_url: String,
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            template: None,
            output: PathBuf::from("_static/index.html"),
            omdb_api_key: None,
            omdb_url: crate::lookup::DEFAULT_OMDB_URL.to_string(),
        }
    }
}

impl MoviesConfig {
    /// Load from the environment, `./movies.toml` and the user config file.
    pub fn load() -> Result<Self> {
        let user_file = ProjectDirs::from("com", "movies", "movies")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME));
        Self::load_from(Path::new(CONFIG_FILENAME), user_file.as_deref())
    }

    /// Load with explicit file locations. Missing files are skipped.
    pub fn load_from(local: &Path, user: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env().file(local);
        if let Some(user) = user {
            builder = builder.file(user);
        }
        let config = builder
            .load()
            .map_err(|e| MovieError::Config(e.to_string()))?;
        Ok(config.with_fallback_key(std::env::var(LEGACY_API_KEY_ENV).ok()))
    }

    /// Use `key` when no API key was configured anywhere else.
    pub fn with_fallback_key(mut self, key: Option<String>) -> Self {
        if self.api_key().is_none() {
            if let Some(key) = key {
                self.omdb_api_key = Some(key);
            }
        }
        self
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.omdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn default_store_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_STORE_FILENAME)
    }
}
