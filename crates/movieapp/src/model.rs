use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Fight Club";
pub const DEFAULT_YEAR: i32 = 1999;
pub const DEFAULT_RATING: f64 = 8.8;
pub const DEFAULT_POSTER_URL: &str = "https://m.media-amazon.com/images/M/MV5BOTgyOGQ1NDItNGU3Ny00MjU3LTg2YWEtNmEyYjBiMjI1Y2M5XkEyXkFqcGc@._V1_SX300.jpg";

/// A single entry of the collection. The title is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster_url: None,
            note: None,
        }
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The seed record written whenever a store has to be regenerated.
    pub fn seed() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_YEAR, DEFAULT_RATING).with_poster(DEFAULT_POSTER_URL)
    }
}

/// Fields that may change after a movie has been created.
///
/// `note` is only persisted by backends that report `supports_notes()`.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieUpdate {
    pub rating: f64,
    pub note: Option<String>,
}

impl MovieUpdate {
    pub fn rating(rating: f64) -> Self {
        Self { rating, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn apply(&self, movie: &mut Movie) {
        movie.rating = self.rating;
        if let Some(note) = &self.note {
            movie.note = Some(note.clone());
        }
    }
}

/// Formats a rating the way it is shown to users: whole numbers keep one
/// decimal (`7.0`), everything else prints as stored (`8.75`).
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        format!("{}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_fight_club_with_poster() {
        let seed = Movie::seed();
        assert_eq!(seed.title, "Fight Club");
        assert_eq!(seed.year, 1999);
        assert_eq!(seed.rating, 8.8);
        assert!(seed.poster_url.is_some());
        assert!(seed.note.is_none());
    }

    #[test]
    fn update_without_note_keeps_existing_note() {
        let mut movie = Movie::new("Heat", 1995, 8.0).with_note("rewatch");
        MovieUpdate::rating(8.5).apply(&mut movie);
        assert_eq!(movie.rating, 8.5);
        assert_eq!(movie.note.as_deref(), Some("rewatch"));
    }

    #[test]
    fn update_with_note_replaces_it() {
        let mut movie = Movie::new("Heat", 1995, 8.0);
        MovieUpdate::rating(9.0).with_note("classic").apply(&mut movie);
        assert_eq!(movie.note.as_deref(), Some("classic"));
    }

    #[test]
    fn json_omits_absent_optional_fields() {
        let json = serde_json::to_string(&Movie::new("Heat", 1995, 8.0)).unwrap();
        assert!(!json.contains("poster_url"));
        assert!(!json.contains("note"));
    }

    #[test]
    fn format_rating_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_rating(7.0), "7.0");
        assert_eq!(format_rating(8.8), "8.8");
        assert_eq!(format_rating(8.75), "8.75");
    }
}
