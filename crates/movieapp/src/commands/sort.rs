use crate::commands::{load_movies, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Highest rating first. Equal ratings keep load order.
pub fn by_rating<S: RecordStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut movies = load_movies(store, &mut result)?;
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    Ok(result.with_listed_movies(movies))
}

/// Ordered by release year. Equal years keep load order in both directions.
pub fn by_year<S: RecordStore + ?Sized>(store: &S, order: SortOrder) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut movies = load_movies(store, &mut result)?;
    match order {
        SortOrder::Ascending => movies.sort_by_key(|m| m.year),
        SortOrder::Descending => movies.sort_by(|a, b| b.year.cmp(&a.year)),
    }
    Ok(result.with_listed_movies(movies))
}
