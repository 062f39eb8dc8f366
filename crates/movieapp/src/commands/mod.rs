//! # Command Layer
//!
//! This module contains the **core business logic** of movies. Each command lives in
//! its own submodule and implements pure Rust functions over a [`RecordStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the collection fresh from the store on every call (no caching)
//! - Enforce the collection rules (unique titles, exact-match deletes)
//! - Return a structured [`CmdResult`] with listed movies, outcome and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, prompts or colors
//! - **Input parsing**: Ratings and years arrive already typed
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Outcomes vs. Errors
//!
//! "Not found", "duplicate" and "no matches" are ordinary results, reported through
//! [`Outcome`]. `Err` is reserved for storage failures the store could not heal.
//!
//! ## Command Modules
//!
//! - [`list`]: Every movie in load order
//! - [`get`]: One movie by exact title
//! - [`add`]: Insert a movie, rejecting duplicate titles
//! - [`delete`]: Remove a movie by exact title
//! - [`update`]: Change a movie's rating (and note)
//! - [`stats`]: Mean, median, best and worst ratings
//! - [`random`]: Pick one movie
//! - [`search`]: Case-insensitive title search
//! - [`sort`]: Order by rating or by year
//! - [`filter`]: Rating and year bounds
//! - [`website`]: Render the collection into an HTML page

use crate::error::Result;
use crate::model::Movie;
use crate::store::{HealReason, RecordStore, StoreHealth};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod filter;
pub mod get;
pub mod list;
pub mod random;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;
pub mod website;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// How a command ended, independent of the messages it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    Done,
    /// The requested title is not in the collection (or the lookup found nothing).
    NotFound,
    /// A movie with the same title already exists.
    Duplicate,
    /// A query ran fine but nothing satisfied it.
    NoMatches,
    /// Input was refused before touching the store (e.g. a blank title).
    Rejected,
    /// The operation needs at least one movie.
    EmptyCollection,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<Movie>,
    pub stats: Option<stats::MovieStats>,
    pub output_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn is_done(&self) -> bool {
        self.outcome == Outcome::Done
    }
}

/// Load the collection and translate any healing into user-facing messages.
pub(crate) fn load_movies<S: RecordStore + ?Sized>(
    store: &S,
    result: &mut CmdResult,
) -> Result<Vec<Movie>> {
    let loaded = store.load()?;
    if let StoreHealth::Healed(reason) = &loaded.health {
        result.add_message(heal_message(reason, store));
    }
    Ok(loaded.movies)
}

fn heal_message<S: RecordStore + ?Sized>(reason: &HealReason, store: &S) -> CmdMessage {
    let path = store.path().display();
    match reason {
        HealReason::Missing => {
            CmdMessage::info(format!("No data found at {}, created default data.", path))
        }
        HealReason::Empty => CmdMessage::warning(format!(
            "Data at {} was empty, loading default data.",
            path
        )),
        HealReason::Corrupt(_) => CmdMessage::warning(format!(
            "Data at {} was missing or corrupted and has been reset to default data.",
            path
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn healing_a_missing_store_adds_info_message() {
        let store = InMemoryStore::new();
        let mut result = CmdResult::default();
        let movies = load_movies(&store, &mut result).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn healing_an_empty_store_warns() {
        let store = InMemoryStore::with_movies(vec![]);
        let mut result = CmdResult::default();
        load_movies(&store, &mut result).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn intact_store_adds_nothing() {
        let store = InMemoryStore::with_movies(vec![Movie::new("Heat", 1995, 8.3)]);
        let mut result = CmdResult::default();
        load_movies(&store, &mut result).unwrap();

        assert!(result.messages.is_empty());
    }
}
