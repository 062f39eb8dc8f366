//! Fixtures shared by the unit tests and by downstream crates' tests
//! (enable the `test_utils` feature).

use crate::model::Movie;
use crate::store::memory::InMemoryStore;

/// A small collection with a tied best rating and a tied worst rating.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new("The Shawshank Redemption", 1994, 9.3),
        Movie::new("Pulp Fiction", 1994, 8.9),
        Movie::new("The Room", 2003, 3.6),
        Movie::new("The Godfather", 1972, 9.3),
        Movie::new("Birdemic", 2010, 3.6),
    ]
}

pub fn sample_store() -> InMemoryStore {
    InMemoryStore::with_movies(sample_movies())
}
