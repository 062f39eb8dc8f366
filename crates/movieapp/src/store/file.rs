use super::{HealReason, Loaded, RecordStore, StoreHealth};
use crate::error::{MovieError, Result};
use crate::model::{Movie, MovieUpdate};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Encoding of a whole collection to and from the text of a single file.
pub trait RecordFormat {
    /// Short name used in log lines.
    const NAME: &'static str;

    /// File extension without the dot.
    const EXTENSION: &'static str;

    const SUPPORTS_NOTES: bool;

    fn decode(raw: &str) -> Result<Vec<Movie>>;

    fn encode(movies: &[Movie]) -> Result<String>;
}

/// Ratings must be finite: JSON has no NaN or infinity and CSV stats depend on ordering.
pub(super) fn ensure_finite_ratings(movies: &[Movie]) -> Result<()> {
    match movies.iter().find(|m| !m.rating.is_finite()) {
        Some(movie) => Err(MovieError::Store(format!(
            "rating of {} is not a number: {}",
            movie.title, movie.rating
        ))),
        None => Ok(()),
    }
}

/// A flat-file store: one file, rewritten in full on every mutation.
pub struct FileStore<F: RecordFormat> {
    path: PathBuf,
    _format: PhantomData<F>,
}

impl<F: RecordFormat> std::fmt::Debug for FileStore<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("format", &F::NAME)
            .field("path", &self.path)
            .finish()
    }
}

impl<F: RecordFormat> FileStore<F> {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(MovieError::Store("Store path cannot be empty".to_string()));
        }
        Ok(Self {
            path,
            _format: PhantomData,
        })
    }

    /// Per-user store inside `data_dir`, named `<username>.<ext>`.
    pub fn for_user(data_dir: &Path, username: &str) -> Result<Self> {
        if username.trim().is_empty() {
            return Err(MovieError::Store("Username cannot be empty".to_string()));
        }
        Self::new(data_dir.join(format!("{}.{}", username, F::EXTENSION)))
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(MovieError::Io)?;
        }
        Ok(())
    }

    /// Read and decode the file as-is, without any healing.
    fn read_movies(&self) -> Result<Vec<Movie>> {
        let bytes = fs::read(&self.path).map_err(MovieError::Io)?;
        let raw = String::from_utf8(bytes)
            .map_err(|e| MovieError::Store(format!("store is not valid UTF-8: {}", e)))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        F::decode(&raw)
    }

    fn write_movies(&self, movies: &[Movie]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = F::encode(movies)?;
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "movies".to_string());

        // Atomic write
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(MovieError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(MovieError::Io)?;

        debug!(
            format = F::NAME,
            path = %self.path.display(),
            records = movies.len(),
            "rewrote store"
        );
        Ok(())
    }

    fn heal(&self, reason: HealReason) -> Result<StoreHealth> {
        warn!(
            format = F::NAME,
            path = %self.path.display(),
            ?reason,
            "store invalid, writing default data"
        );
        self.write_default()?;
        Ok(StoreHealth::Healed(reason))
    }
}

impl<F: RecordFormat> RecordStore for FileStore<F> {
    fn load(&self) -> Result<Loaded> {
        let health = self.validate()?;
        let movies = self.read_movies().map_err(|e| match e {
            MovieError::Io(io) => MovieError::Io(io),
            other => MovieError::CorruptData {
                path: self.path.clone(),
                reason: other.to_string(),
            },
        })?;
        Ok(Loaded { movies, health })
    }

    fn append(&self, movie: &Movie) -> Result<()> {
        let mut movies = self.load()?.movies;
        movies.push(movie.clone());
        self.write_movies(&movies)
    }

    fn remove(&self, title: &str) -> Result<()> {
        let mut movies = self.load()?.movies;
        movies.retain(|m| m.title != title);
        self.write_movies(&movies)
    }

    fn update(&self, title: &str, update: &MovieUpdate) -> Result<()> {
        let mut movies = self.load()?.movies;
        if let Some(movie) = movies.iter_mut().find(|m| m.title == title) {
            update.apply(movie);
        }
        self.write_movies(&movies)
    }

    fn exists(&self) -> Result<bool> {
        if !self.path.is_file() {
            debug!(path = %self.path.display(), "store file missing, creating default data");
            self.write_default()?;
        }
        Ok(true)
    }

    fn validate(&self) -> Result<StoreHealth> {
        if !self.path.is_file() {
            self.exists()?;
            return Ok(StoreHealth::Healed(HealReason::Missing));
        }

        match self.read_movies() {
            Ok(movies) if movies.is_empty() => self.heal(HealReason::Empty),
            Ok(_) => Ok(StoreHealth::Intact),
            Err(MovieError::Io(e)) => Err(MovieError::Io(e)),
            Err(e) => self.heal(HealReason::Corrupt(e.to_string())),
        }
    }

    fn write_default(&self) -> Result<()> {
        self.write_movies(&[Movie::seed()])
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn supports_notes(&self) -> bool {
        F::SUPPORTS_NOTES
    }
}
