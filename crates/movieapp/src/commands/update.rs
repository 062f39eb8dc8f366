use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::{format_rating, MovieUpdate};
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(
    store: &S,
    title: &str,
    update: &MovieUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !update.rating.is_finite() {
        result.add_message(CmdMessage::error("Rating must be a number"));
        return Ok(result.with_outcome(Outcome::Rejected));
    }
    let movies = load_movies(store, &mut result)?;

    let Some(mut movie) = movies.into_iter().find(|m| m.title == title) else {
        result.add_message(CmdMessage::error(format!("Movie {} doesn't exist!", title)));
        return Ok(result.with_outcome(Outcome::NotFound));
    };

    if update.note.is_some() && !store.supports_notes() {
        result.add_message(CmdMessage::warning(
            "This storage format doesn't keep notes, only the rating was changed.",
        ));
    }

    store.update(title, update)?;
    update.apply(&mut movie);
    if !store.supports_notes() {
        movie.note = None;
    }

    result.add_message(CmdMessage::success(format!(
        "Rating of {} successfully changed to {}!",
        title,
        format_rating(update.rating)
    )));
    result.affected_movies.push(movie);
    Ok(result)
}
