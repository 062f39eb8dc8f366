use crate::commands::{load_movies, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::Movie;
use crate::store::RecordStore;
use serde::Serialize;

/// A rating extreme and every title sharing it. Ties are not broken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingExtreme {
    pub rating: f64,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub best: RatingExtreme,
    pub worst: RatingExtreme,
}

impl MovieStats {
    /// `None` for an empty collection.
    pub fn compute(movies: &[Movie]) -> Option<Self> {
        if movies.is_empty() {
            return None;
        }

        let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
        let count = ratings.len();
        let average = ratings.iter().sum::<f64>() / count as f64;

        ratings.sort_by(f64::total_cmp);
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (ratings[mid - 1] + ratings[mid]) / 2.0
        } else {
            ratings[mid]
        };

        let best = extreme(movies, ratings[count - 1]);
        let worst = extreme(movies, ratings[0]);

        Some(Self {
            count,
            average,
            median,
            best,
            worst,
        })
    }
}

fn extreme(movies: &[Movie], rating: f64) -> RatingExtreme {
    RatingExtreme {
        rating,
        titles: movies
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect(),
    }
}

pub fn run<S: RecordStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    match MovieStats::compute(&movies) {
        Some(stats) => {
            result.stats = Some(stats);
            Ok(result)
        }
        None => {
            result.add_message(CmdMessage::warning("There are no movies to compute stats for."));
            Ok(result.with_outcome(Outcome::EmptyCollection))
        }
    }
}
