use super::file::{ensure_finite_ratings, FileStore, RecordFormat};
use crate::error::{MovieError, Result};
use crate::model::Movie;
use serde::Serialize;

/// Top-level JSON array, pretty-printed with a 4-space indent.
pub struct JsonFormat;

impl RecordFormat for JsonFormat {
    const NAME: &'static str = "json";
    const EXTENSION: &'static str = "json";
    const SUPPORTS_NOTES: bool = true;

    fn decode(raw: &str) -> Result<Vec<Movie>> {
        let movies: Vec<Movie> = serde_json::from_str(raw).map_err(MovieError::Serialization)?;
        Ok(movies)
    }

    fn encode(movies: &[Movie]) -> Result<String> {
        ensure_finite_ratings(movies)?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        movies
            .serialize(&mut serializer)
            .map_err(MovieError::Serialization)?;
        String::from_utf8(buf).map_err(|e| MovieError::Store(e.to_string()))
    }
}

pub type JsonStore = FileStore<JsonFormat>;
