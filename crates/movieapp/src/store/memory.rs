use super::{HealReason, Loaded, RecordStore, StoreHealth};
use crate::error::{MovieError, Result};
use crate::model::{Movie, MovieUpdate};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// In-memory store for testing.
///
/// Uses `RefCell` for interior mutability since the app is single-threaded.
/// `None` plays the part of a missing file.
pub struct InMemoryStore {
    movies: RefCell<Option<Vec<Movie>>>,
    supports_notes: bool,
    simulate_write_error: RefCell<bool>,
    path: PathBuf,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            movies: RefCell::new(None),
            supports_notes: true,
            simulate_write_error: RefCell::new(false),
            path: PathBuf::from("memory://movies"),
        }
    }
}

impl InMemoryStore {
    /// An empty store: the first load heals it as missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `movies`, in order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let store = Self::default();
        *store.movies.borrow_mut() = Some(movies);
        store
    }

    /// Behave like a backend that cannot persist notes.
    pub fn without_notes(mut self) -> Self {
        self.supports_notes = false;
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Snapshot of what is "on disk", without validation.
    pub fn snapshot(&self) -> Option<Vec<Movie>> {
        self.movies.borrow().clone()
    }

    fn write_movies(&self, mut movies: Vec<Movie>) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(MovieError::Store("Simulated write error".to_string()));
        }
        if !self.supports_notes {
            for movie in &mut movies {
                movie.note = None;
            }
        }
        *self.movies.borrow_mut() = Some(movies);
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Loaded> {
        let health = self.validate()?;
        let movies = self.movies.borrow().clone().unwrap_or_default();
        Ok(Loaded { movies, health })
    }

    fn append(&self, movie: &Movie) -> Result<()> {
        let mut movies = self.load()?.movies;
        movies.push(movie.clone());
        self.write_movies(movies)
    }

    fn remove(&self, title: &str) -> Result<()> {
        let mut movies = self.load()?.movies;
        movies.retain(|m| m.title != title);
        self.write_movies(movies)
    }

    fn update(&self, title: &str, update: &MovieUpdate) -> Result<()> {
        let mut movies = self.load()?.movies;
        if let Some(movie) = movies.iter_mut().find(|m| m.title == title) {
            update.apply(movie);
        }
        self.write_movies(movies)
    }

    fn exists(&self) -> Result<bool> {
        if self.movies.borrow().is_none() {
            self.write_default()?;
        }
        Ok(true)
    }

    fn validate(&self) -> Result<StoreHealth> {
        let missing = self.movies.borrow().is_none();
        if missing {
            self.exists()?;
            return Ok(StoreHealth::Healed(HealReason::Missing));
        }
        let empty = self.movies.borrow().as_ref().is_some_and(|m| m.is_empty());
        if empty {
            self.write_default()?;
            return Ok(StoreHealth::Healed(HealReason::Empty));
        }
        Ok(StoreHealth::Intact)
    }

    fn write_default(&self) -> Result<()> {
        self.write_movies(vec![Movie::seed()])
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn supports_notes(&self) -> bool {
        self.supports_notes
    }
}
