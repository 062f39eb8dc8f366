//! Static HTML rendering of a collection.
//!
//! A template is any text containing [`PLACEHOLDER`]; every occurrence is replaced
//! with one `<li>` fragment per movie (poster, title, year). Rendering is a pure
//! string transformation, see [`crate::commands::website`] for the file I/O.

use crate::model::Movie;

pub const PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index_template.html");

pub fn render(movies: &[Movie], template: &str) -> String {
    let grid: String = movies.iter().map(serialize_movie).collect();
    template.replace(PLACEHOLDER, &grid)
}

fn serialize_movie(movie: &Movie) -> String {
    format!(
        concat!(
            "<li>",
            "<div class=\"movie\">",
            "<img class=\"movie-poster\" src=\"{poster}\">",
            "<div class=\"movie-title\">{title}</div>",
            "<div class=\"movie-year\">{year}</div>",
            "</div>",
            "</li>"
        ),
        poster = escape(movie.poster_url.as_deref().unwrap_or_default()),
        title = escape(&movie.title),
        year = movie.year,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
