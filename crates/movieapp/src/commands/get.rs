use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::RecordStore;

/// Exact-title lookup. Heal messages from the load are kept on the result.
pub fn run<S: RecordStore + ?Sized>(store: &S, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    match movies.into_iter().find(|m| m.title == title) {
        Some(movie) => Ok(result.with_listed_movies(vec![movie])),
        None => {
            result.add_message(CmdMessage::error(format!("Movie {} doesn't exist!", title)));
            Ok(result.with_outcome(Outcome::NotFound))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_exact_title() {
        let store = InMemoryStore::with_movies(vec![Movie::new("Heat", 1995, 8.3)]);
        let result = run(&store, "Heat").unwrap();
        assert!(result.is_done());
        assert_eq!(result.listed_movies, vec![Movie::new("Heat", 1995, 8.3)]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = InMemoryStore::with_movies(vec![Movie::new("Heat", 1995, 8.3)]);
        assert_eq!(run(&store, "heat").unwrap().outcome, Outcome::NotFound);
    }

    #[test]
    fn heal_is_reported_alongside_not_found() {
        let store = InMemoryStore::with_movies(vec![]);
        let result = run(&store, "Nope").unwrap();

        assert_eq!(result.outcome, Outcome::NotFound);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("was empty"));
        assert_eq!(result.messages[1].content, "Movie Nope doesn't exist!");
    }
}
