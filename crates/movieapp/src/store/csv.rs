use super::file::{ensure_finite_ratings, FileStore, RecordFormat};
use crate::error::{MovieError, Result};
use crate::model::Movie;
use serde::{Deserialize, Serialize};

const HEADER: [&str; 3] = ["title", "year", "rating"];

/// `title,year,rating` table. Posters and notes are not stored.
pub struct CsvFormat;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    year: i32,
    rating: f64,
}

impl From<CsvRow> for Movie {
    fn from(row: CsvRow) -> Self {
        Movie::new(row.title, row.year, row.rating)
    }
}

impl From<&Movie> for CsvRow {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            rating: movie.rating,
        }
    }
}

impl RecordFormat for CsvFormat {
    const NAME: &'static str = "csv";
    const EXTENSION: &'static str = "csv";
    const SUPPORTS_NOTES: bool = false;

    fn decode(raw: &str) -> Result<Vec<Movie>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_reader(raw.as_bytes());

        let headers = reader.headers().map_err(MovieError::Csv)?.clone();
        if headers.iter().collect::<Vec<_>>() != HEADER {
            return Err(MovieError::Store(format!(
                "unexpected CSV header: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut movies = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            movies.push(row.map_err(MovieError::Csv)?.into());
        }
        ensure_finite_ratings(&movies)?;
        Ok(movies)
    }

    fn encode(movies: &[Movie]) -> Result<String> {
        ensure_finite_ratings(movies)?;
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(HEADER).map_err(MovieError::Csv)?;
        for movie in movies {
            writer
                .serialize(CsvRow::from(movie))
                .map_err(MovieError::Csv)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MovieError::Store(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| MovieError::Store(e.to_string()))
    }
}

pub type CsvStore = FileStore<CsvFormat>;
