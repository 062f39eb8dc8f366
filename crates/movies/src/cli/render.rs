//! # Rendering Module
//!
//! Turns library results into terminal lines. Everything here returns `String`s or
//! writes to a caller-supplied `Write`, so output can be asserted in tests without
//! a terminal.
//!
//! Colors come from `colored` and switch themselves off when stdout is not a tty
//! (or when `NO_COLOR` is set).

use colored::Colorize;
use movieapp::api::{CmdMessage, MessageLevel, MovieStats, RatingExtreme};
use movieapp::model::{format_rating, Movie};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Gap between menu columns.
const COLUMN_GAP: usize = 3;

pub fn message_line(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// `Title (year): rating`, plus the note when there is one.
pub fn movie_line(movie: &Movie) -> String {
    let base = format!(
        "{} ({}): {}",
        movie.title.bold(),
        movie.year,
        format_rating(movie.rating)
    );
    match &movie.note {
        Some(note) => format!("{}  {}", base, note.dimmed()),
        None => base,
    }
}

pub fn stats_lines(stats: &MovieStats) -> Vec<String> {
    vec![
        format!("Average rating: {:.1}", stats.average),
        format!("Median rating: {:.1}", stats.median),
        format!("Best movie(s): {}", extreme_text(&stats.best)),
        format!("Worst movie(s): {}", extreme_text(&stats.worst)),
    ]
}

fn extreme_text(extreme: &RatingExtreme) -> String {
    format!(
        "{}, {}",
        extreme.titles.join(", "),
        format_rating(extreme.rating)
    )
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", message_line(message))?;
    }
    Ok(())
}

pub fn write_movies<W: Write>(out: &mut W, movies: &[Movie]) -> io::Result<()> {
    for movie in movies {
        writeln!(out, "{}", movie_line(movie))?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &MovieStats) -> io::Result<()> {
    for line in stats_lines(stats) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Lay `entries` out column-major in `columns` columns, padded by display width.
pub fn grid(entries: &[String], columns: usize) -> String {
    let columns = columns.max(1);
    let rows = entries.len().div_ceil(columns);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            entries
                .iter()
                .skip(c * rows)
                .take(rows)
                .map(|e| e.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in 0..rows {
        let mut line = String::new();
        for (col, width) in widths.iter().enumerate() {
            let Some(entry) = entries.get(col * rows + row) else {
                continue;
            };
            line.push_str(entry);
            line.push_str(&" ".repeat(width - entry.width() + COLUMN_GAP));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use movieapp::test_utils::sample_movies;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_movie_line() {
        plain();
        assert_eq!(movie_line(&Movie::new("Heat", 1995, 8.0)), "Heat (1995): 8.0");
        assert_eq!(
            movie_line(&Movie::new("Heat", 1995, 8.3).with_note("diner")),
            "Heat (1995): 8.3  diner"
        );
    }

    #[test]
    fn test_stats_lines_round_and_list_ties() {
        plain();
        let stats = MovieStats::compute(&sample_movies()).unwrap();
        let lines = stats_lines(&stats);
        assert_eq!(lines[0], "Average rating: 6.9");
        assert_eq!(lines[1], "Median rating: 8.9");
        assert_eq!(
            lines[2],
            "Best movie(s): The Shawshank Redemption, The Godfather, 9.3"
        );
        assert_eq!(lines[3], "Worst movie(s): The Room, Birdemic, 3.6");
    }

    #[test]
    fn test_write_messages_one_per_line() {
        plain();
        let mut out = Vec::new();
        write_messages(
            &mut out,
            &[CmdMessage::info("one"), CmdMessage::error("two")],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_grid_is_column_major_and_aligned() {
        let entries: Vec<String> = ["1. a", "2. bbb", "3. c", "4. dd", "5. e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let text = grid(&entries, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1. a     4. dd");
        assert_eq!(lines[1], "2. bbb   5. e");
        assert_eq!(lines[2], "3. c");
    }

    #[test]
    fn test_grid_uses_display_width() {
        let entries = vec!["日本".to_string(), "x".to_string()];
        assert_eq!(grid(&entries, 2), "日本   x\n");
    }
}
