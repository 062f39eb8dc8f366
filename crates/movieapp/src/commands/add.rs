use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::Movie;
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(store: &S, movie: Movie) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if movie.title.trim().is_empty() {
        result.add_message(CmdMessage::error("Movie title can't be empty"));
        return Ok(result.with_outcome(Outcome::Rejected));
    }
    if !movie.rating.is_finite() {
        result.add_message(CmdMessage::error("Rating must be a number"));
        return Ok(result.with_outcome(Outcome::Rejected));
    }

    let movies = load_movies(store, &mut result)?;
    if movies.iter().any(|m| m.title == movie.title) {
        result.add_message(CmdMessage::warning(format!(
            "Movie {} already exists in your database.",
            movie.title
        )));
        return Ok(result.with_outcome(Outcome::Duplicate));
    }

    store.append(&movie)?;
    result.add_message(CmdMessage::success(format!(
        "Movie {} successfully added",
        movie.title
    )));
    result.affected_movies.push(movie);
    Ok(result)
}
