//! # Storage Layer
//!
//! This module defines the storage abstraction for movies. The [`RecordStore`] trait
//! is the whole contract the command layer relies on, so backends can be swapped
//! (or mocked) without touching any business logic.
//!
//! ## Whole-File Snapshots
//!
//! A collection is small (tens to low thousands of records) and lives in a single
//! flat file. Every mutation therefore:
//!
//! 1. Loads the full collection (validating it first).
//! 2. Modifies it in memory.
//! 3. Rewrites the entire file: encoded into a temporary sibling, then renamed over
//!    the target.
//!
//! There are no incremental updates. Each write is a complete snapshot.
//!
//! ## Self-Healing
//!
//! Reads never fail because of bad data. Before anything is returned, the store
//! validates its file:
//!
//! - **Missing**: the default collection is written.
//! - **Empty**: (no records) the default collection is written.
//! - **Corrupt**: (undecodable) the default collection is written.
//!
//! What happened is reported through [`StoreHealth`] so callers can tell the user
//! that prior data was reset. Only an unwritable target is fatal, and that surfaces
//! as [`crate::error::MovieError::Io`].
//!
//! ## Implementations
//!
//! - [`json::JsonStore`]: JSON array, keeps posters and notes.
//! - [`csv::CsvStore`]: `title,year,rating` table, drops posters and notes.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! Both file stores are the same [`file::FileStore`] parameterised by a
//! [`file::RecordFormat`].

use crate::error::Result;
use crate::model::{Movie, MovieUpdate};
use std::path::Path;

pub mod csv;
pub mod file;
pub mod json;
pub mod memory;

/// Why a store had to be regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealReason {
    Missing,
    Empty,
    Corrupt(String),
}

/// Result of validating the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    Intact,
    Healed(HealReason),
}

impl StoreHealth {
    pub fn is_healed(&self) -> bool {
        matches!(self, StoreHealth::Healed(_))
    }

    /// True when the reset discarded data the user had (as opposed to a first run).
    pub fn lost_data(&self) -> bool {
        matches!(
            self,
            StoreHealth::Healed(HealReason::Empty | HealReason::Corrupt(_))
        )
    }
}

/// A freshly loaded collection together with what validation had to do to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub movies: Vec<Movie>,
    pub health: StoreHealth,
}

/// Abstract interface for movie storage.
///
/// All methods take `&self`: stores hold no state besides their target, and every
/// call goes to the backing medium.
pub trait RecordStore {
    /// Validate (regenerating if needed) and return the full collection.
    fn load(&self) -> Result<Loaded>;

    /// Append a record. Duplicate titles are not checked here.
    fn append(&self, movie: &Movie) -> Result<()>;

    /// Remove every record whose title equals `title` exactly. No-op when absent.
    fn remove(&self, title: &str) -> Result<()>;

    /// Apply `update` to the first record titled `title`. No-op when absent.
    fn update(&self, title: &str, update: &MovieUpdate) -> Result<()>;

    /// Make sure the backing file exists, writing the default when it does not.
    /// Always reports `true` on success.
    fn exists(&self) -> Result<bool>;

    /// Check that the backing file decodes into a non-empty collection,
    /// regenerating it otherwise.
    fn validate(&self) -> Result<StoreHealth>;

    /// Overwrite the backing file with the single seed record.
    fn write_default(&self) -> Result<()>;

    /// Location of the backing file (virtual for in-memory stores).
    fn path(&self) -> &Path;

    /// Whether `MovieUpdate::note` is persisted.
    fn supports_notes(&self) -> bool;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&self) -> Result<Loaded> {
        (**self).load()
    }

    fn append(&self, movie: &Movie) -> Result<()> {
        (**self).append(movie)
    }

    fn remove(&self, title: &str) -> Result<()> {
        (**self).remove(title)
    }

    fn update(&self, title: &str, update: &MovieUpdate) -> Result<()> {
        (**self).update(title, update)
    }

    fn exists(&self) -> Result<bool> {
        (**self).exists()
    }

    fn validate(&self) -> Result<StoreHealth> {
        (**self).validate()
    }

    fn write_default(&self) -> Result<()> {
        (**self).write_default()
    }

    fn path(&self) -> &Path {
        (**self).path()
    }

    fn supports_notes(&self) -> bool {
        (**self).supports_notes()
    }
}
