use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::Movie;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

/// Optional bounds; an omitted bound imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub min_rating: Option<f64>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        if self.min_rating.is_some_and(|min| movie.rating < min) {
            return false;
        }
        if self.start_year.is_some_and(|start| movie.year < start) {
            return false;
        }
        if self.end_year.is_some_and(|end| movie.year > end) {
            return false;
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.min_rating.is_none() && self.start_year.is_none() && self.end_year.is_none()
    }
}

pub fn run<S: RecordStore + ?Sized>(store: &S, filter: &MovieFilter) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    let filtered: Vec<_> = movies.into_iter().filter(|m| filter.matches(m)).collect();
    if filtered.is_empty() {
        result.add_message(CmdMessage::warning(
            "There are no movies with your filters applied.",
        ));
        return Ok(result.with_outcome(Outcome::NoMatches));
    }
    Ok(result.with_listed_movies(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::with_movies(vec![
            Movie::new("A", 1990, 7.9),
            Movie::new("B", 2000, 8.0),
            Movie::new("C", 2010, 8.1),
        ])
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn min_rating_is_inclusive() {
        let filter = MovieFilter {
            min_rating: Some(8.0),
            ..Default::default()
        };
        assert_eq!(titles(&run(&store(), &filter).unwrap()), vec!["B", "C"]);
    }

    #[test]
    fn no_bounds_returns_everything() {
        let result = run(&store(), &MovieFilter::default()).unwrap();
        assert_eq!(titles(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn year_range_is_inclusive_on_both_ends() {
        let filter = MovieFilter {
            start_year: Some(1990),
            end_year: Some(2000),
            ..Default::default()
        };
        assert_eq!(titles(&run(&store(), &filter).unwrap()), vec!["A", "B"]);
    }

    #[test]
    fn bounds_combine() {
        let filter = MovieFilter {
            min_rating: Some(8.0),
            start_year: None,
            end_year: Some(2005),
        };
        assert_eq!(titles(&run(&store(), &filter).unwrap()), vec!["B"]);
    }

    #[test]
    fn no_matches_is_signalled() {
        let filter = MovieFilter {
            start_year: Some(2050),
            ..Default::default()
        };
        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.outcome, Outcome::NoMatches);
        assert!(result.listed_movies.is_empty());
    }
}
