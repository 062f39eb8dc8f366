use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(store: &S, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    let Some(movie) = movies.into_iter().find(|m| m.title == title) else {
        result.add_message(CmdMessage::error(format!("Movie {} doesn't exist!", title)));
        return Ok(result.with_outcome(Outcome::NotFound));
    };

    store.remove(title)?;
    result.add_message(CmdMessage::success(format!(
        "Movie {} successfully deleted!",
        title
    )));
    result.affected_movies.push(movie);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::with_movies(vec![
            Movie::new("Heat", 1995, 8.3),
            Movie::new("Alien", 1979, 8.5),
            Movie::new("Aliens", 1986, 8.4),
        ])
    }

    #[test]
    fn removes_exactly_one_movie() {
        let store = store();
        let result = run(&store, "Alien").unwrap();

        assert!(result.is_done());
        let titles: Vec<_> = store
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Heat", "Aliens"]);
    }

    #[test]
    fn unknown_title_reports_not_found() {
        let store = store();
        let before = store.snapshot();

        let result = run(&store, "Predator").unwrap();

        assert_eq!(result.outcome, Outcome::NotFound);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn match_must_be_exact() {
        let store = store();
        assert_eq!(run(&store, "alien").unwrap().outcome, Outcome::NotFound);
        assert_eq!(run(&store, "Alie").unwrap().outcome, Outcome::NotFound);
        assert_eq!(store.snapshot().unwrap().len(), 3);
    }
}
