use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::RecordStore;

/// Case-insensitive substring match on titles. Results keep load order.
pub fn run<S: RecordStore + ?Sized>(store: &S, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;
    let term_lower = term.to_lowercase();

    let matches: Vec<_> = movies
        .into_iter()
        .filter(|m| m.title.to_lowercase().contains(&term_lower))
        .collect();

    if matches.is_empty() {
        result.add_message(CmdMessage::warning("Movie name not found!"));
        return Ok(result.with_outcome(Outcome::NoMatches));
    }
    Ok(result.with_listed_movies(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::with_movies(vec![
            Movie::new("The Matrix", 1999, 8.7),
            Movie::new("Heat", 1995, 8.3),
            Movie::new("Matrix Reloaded", 2003, 7.2),
        ])
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let result = run(&store(), "MATRIX").unwrap();
        assert_eq!(titles(&result), vec!["The Matrix", "Matrix Reloaded"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let result = run(&store(), "").unwrap();
        assert_eq!(result.listed_movies.len(), 3);
        assert!(result.is_done());
    }

    #[test]
    fn no_match_is_not_an_error() {
        let result = run(&store(), "Casablanca").unwrap();
        assert_eq!(result.outcome, Outcome::NoMatches);
        assert!(result.listed_movies.is_empty());
    }

    #[test]
    fn search_is_not_fuzzy() {
        let result = run(&store(), "Matirx").unwrap();
        assert_eq!(result.outcome, Outcome::NoMatches);
    }
}
