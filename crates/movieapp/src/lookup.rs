//! # Metadata Lookup
//!
//! Resolves a free-text title into a canonical [`Movie`] through a third-party
//! service. The only implementation talks to the OMDb API.
//!
//! Lookups never fail loudly: network errors, bad HTTP statuses, unparseable bodies
//! and "movie not found" answers all come back as `None` (and are logged), so the
//! add flow can simply tell the user to try again.

use crate::error::{MovieError, Result};
use crate::model::Movie;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use urlencoding::encode;

pub const DEFAULT_OMDB_URL: &str = "http://www.omdbapi.com/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub trait MetadataLookup {
    /// Canonical record for `title`, or `None` when nothing (usable) was found.
    fn find_by_title(&self, title: &str) -> Option<Movie>;
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Map an OMDb JSON body to a movie.
///
/// `Ok(None)` means the service answered but had no match.
pub fn parse_omdb_response(body: &str) -> Result<Option<Movie>> {
    let parsed: OmdbResponse = serde_json::from_str(body).map_err(MovieError::Serialization)?;

    if parsed
        .response
        .as_deref()
        .is_some_and(|r| r.eq_ignore_ascii_case("false"))
    {
        debug!(error = ?parsed.error, "omdb returned no match");
        return Ok(None);
    }

    let Some(title) = parsed.title.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };

    // "1999", "2008–2013", "2019–"
    let year = parsed
        .year
        .as_deref()
        .and_then(|y| y.get(0..4))
        .and_then(|y| y.parse::<i32>().ok())
        .ok_or_else(|| MovieError::Lookup(format!("no usable year for {}", title)))?;

    let rating = parsed
        .imdb_rating
        .as_deref()
        .and_then(|r| r.trim().parse::<f64>().ok())
        .filter(|r| r.is_finite())
        .unwrap_or(0.0);

    let mut movie = Movie::new(title, year, rating);
    movie.poster_url = parsed
        .poster
        .filter(|p| !p.trim().is_empty() && !p.eq_ignore_ascii_case("N/A"));
    Ok(Some(movie))
}

/// Blocking OMDb client. The API key is passed in explicitly.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_OMDB_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("movies/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MovieError::Lookup(format!("client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        })
    }

    fn request_url(&self, title: &str) -> String {
        format!(
            "{}?apikey={}&t={}",
            self.base_url,
            encode(&self.api_key),
            encode(title.trim())
        )
    }

    fn fetch(&self, title: &str) -> Result<Option<Movie>> {
        let response = self
            .client
            .get(self.request_url(title))
            .send()
            .map_err(|e| MovieError::Lookup(format!("network: {}", e)))?;

        if !response.status().is_success() {
            return Err(MovieError::Lookup(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|e| MovieError::Lookup(format!("read: {}", e)))?;
        parse_omdb_response(&body)
    }
}

impl MetadataLookup for OmdbClient {
    fn find_by_title(&self, title: &str) -> Option<Movie> {
        match self.fetch(title) {
            Ok(found) => found,
            Err(e) => {
                warn!(title, error = %e, "movie lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_full_response() {
        let body = r#"{
            "Title": "The Matrix",
            "Year": "1999",
            "imdbRating": "8.7",
            "Poster": "https://img/matrix.jpg",
            "Response": "True"
        }"#;

        let movie = parse_omdb_response(body).unwrap().unwrap();
        assert_eq!(
            movie,
            Movie::new("The Matrix", 1999, 8.7).with_poster("https://img/matrix.jpg")
        );
    }

    #[test]
    fn series_year_range_uses_first_year() {
        let body = r#"{"Title": "Lost", "Year": "2004–2010", "imdbRating": "8.3", "Response": "True"}"#;
        assert_eq!(parse_omdb_response(body).unwrap().unwrap().year, 2004);
    }

    #[test]
    fn missing_rating_defaults_to_zero() {
        let body = r#"{"Title": "Obscure", "Year": "2021", "imdbRating": "N/A", "Poster": "N/A", "Response": "True"}"#;
        let movie = parse_omdb_response(body).unwrap().unwrap();
        assert_eq!(movie.rating, 0.0);
        assert!(movie.poster_url.is_none());
    }

    #[test]
    fn not_found_response_is_none() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        assert!(parse_omdb_response(body).unwrap().is_none());
    }

    #[test]
    fn body_without_title_is_none() {
        assert!(parse_omdb_response("{}").unwrap().is_none());
    }

    #[test]
    fn garbage_body_is_an_error() {
        assert!(parse_omdb_response("<html>").is_err());
    }

    #[test]
    fn request_url_encodes_title() {
        let client = OmdbClient::with_base_url("k3y", "http://omdb.test/").unwrap();
        assert_eq!(
            client.request_url("  Fight Club & Co "),
            "http://omdb.test/?apikey=k3y&t=Fight%20Club%20%26%20Co"
        );
    }

    #[test]
    fn unreachable_service_is_treated_as_not_found() {
        let client = OmdbClient::with_base_url("key", "http://127.0.0.1:9/").unwrap();
        assert!(client.find_by_title("Heat").is_none());
    }
}
