//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all movie operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (trimming titles, turning lookups into records)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over RecordStore
//!
//! `MovieApi<S: RecordStore>` only ever sees the trait:
//! - Production: `MovieApi<Box<dyn RecordStore>>` (JSON or CSV picked at startup)
//! - Testing: `MovieApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::lookup::MetadataLookup;
use crate::model::{Movie, MovieUpdate};
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// Where the website is rendered from and to.
#[derive(Debug, Clone, Default)]
pub struct WebsitePaths {
    pub template: Option<PathBuf>,
    pub output: PathBuf,
}

pub struct MovieApi<S: RecordStore> {
    store: S,
    website: WebsitePaths,
}

impl<S: RecordStore> MovieApi<S> {
    pub fn new(store: S, website: WebsitePaths) -> Self {
        Self { store, website }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_movies(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// One movie by exact title. A miss is `Outcome::NotFound`.
    pub fn find_movie(&self, title: &str) -> Result<CmdResult> {
        commands::get::run(&self.store, title.trim())
    }

    /// Add a movie whose details were supplied directly.
    pub fn add_movie(&self, mut movie: Movie) -> Result<CmdResult> {
        movie.title = movie.title.trim().to_string();
        commands::add::run(&self.store, movie)
    }

    /// Resolve `query` through `lookup`, then add the canonical record.
    ///
    /// The duplicate check runs against the title returned by the lookup.
    pub fn add_movie_by_lookup(
        &self,
        lookup: &dyn MetadataLookup,
        query: &str,
    ) -> Result<CmdResult> {
        let query = query.trim();
        if query.is_empty() {
            let mut result = CmdResult::default().with_outcome(Outcome::Rejected);
            result.add_message(CmdMessage::error("Movie title can't be empty"));
            return Ok(result);
        }

        match lookup.find_by_title(query) {
            Some(movie) => commands::add::run(&self.store, movie),
            None => {
                let mut result = CmdResult::default().with_outcome(Outcome::NotFound);
                result.add_message(CmdMessage::error(format!(
                    "Movie {} not found in OMDb, try again.",
                    query
                )));
                Ok(result)
            }
        }
    }

    pub fn delete_movie(&self, title: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, title)
    }

    pub fn update_movie(&self, title: &str, update: &MovieUpdate) -> Result<CmdResult> {
        commands::update::run(&self.store, title, update)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie(&self) -> Result<CmdResult> {
        commands::random::run(&self.store)
    }

    pub fn search_movies(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn movies_by_rating(&self) -> Result<CmdResult> {
        commands::sort::by_rating(&self.store)
    }

    pub fn movies_by_year(&self, order: SortOrder) -> Result<CmdResult> {
        commands::sort::by_year(&self.store, order)
    }

    pub fn filter_movies(&self, filter: &MovieFilter) -> Result<CmdResult> {
        commands::filter::run(&self.store, filter)
    }

    pub fn generate_website(&self) -> Result<CmdResult> {
        commands::website::run(
            &self.store,
            self.website.template.as_deref(),
            &self.website.output,
        )
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    pub fn supports_notes(&self) -> bool {
        self.store.supports_notes()
    }
}

pub use crate::commands::filter::MovieFilter;
pub use crate::commands::sort::SortOrder;
pub use crate::commands::stats::{MovieStats, RatingExtreme};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Outcome};
