use crate::commands::{load_movies, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    result.add_message(CmdMessage::info(format!(
        "{} movies in total",
        movies.len()
    )));
    Ok(result.with_listed_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_load_order_with_count() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("Heat", 1995, 8.3),
            Movie::new("Alien", 1979, 8.5),
        ]);

        let result = run(&store).unwrap();
        let titles: Vec<_> = result.listed_movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Alien"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "2 movies in total"));
    }

    #[test]
    fn missing_store_lists_default_movie() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.listed_movies, vec![Movie::seed()]);
        assert!(result.is_done());
    }
}
