use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::format_rating;
use crate::store::RecordStore;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn run<S: RecordStore + ?Sized>(store: &S) -> Result<CmdResult> {
    run_with_rng(store, &mut rand::thread_rng())
}

/// Uniformly pick one movie using `rng`.
pub fn run_with_rng<S: RecordStore + ?Sized, R: Rng + ?Sized>(
    store: &S,
    rng: &mut R,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    let Some(movie) = movies.choose(rng).cloned() else {
        result.add_message(CmdMessage::warning("There are no movies to pick from."));
        return Ok(result.with_outcome(Outcome::EmptyCollection));
    };

    result.add_message(CmdMessage::info(format!(
        "You could watch this movie: {}, it's rated {}",
        movie.title,
        format_rating(movie.rating)
    )));
    Ok(result.with_listed_movies(vec![movie]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn picks_a_movie_from_the_collection() {
        let movies = vec![
            Movie::new("Heat", 1995, 8.3),
            Movie::new("Alien", 1979, 8.5),
        ];
        let store = InMemoryStore::with_movies(movies.clone());

        let result = run(&store).unwrap();
        assert_eq!(result.listed_movies.len(), 1);
        assert!(movies.contains(&result.listed_movies[0]));
    }

    #[test]
    fn eventually_picks_every_movie() {
        let store = InMemoryStore::with_movies(vec![
            Movie::new("A", 2000, 1.0),
            Movie::new("B", 2000, 2.0),
            Movie::new("C", 2000, 3.0),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        let seen: HashSet<String> = (0..200)
            .map(|_| run_with_rng(&store, &mut rng).unwrap().listed_movies[0].title.clone())
            .collect();
        assert_eq!(seen.len(), 3);
    }
}
