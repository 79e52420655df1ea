use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A normalized movie row. Field order here is the key order of the
/// generated literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub poster_path: String,
    pub backdrop_path: String,
    pub genres: Vec<String>,
    pub runtime: u64,
    pub status: String,
    pub vote_average: f64,
    pub vote_count: u64,
    pub original_language: String,
    pub popularity: f64,
}

/// A TV show synthesized from a movie row. Season and episode counts do
/// not exist in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    pub id: String,
    pub name: String,
    pub overview: String,
    pub first_air_date: String,
    pub poster_path: String,
    pub backdrop_path: String,
    pub genres: Vec<String>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub original_language: String,
    pub popularity: f64,
    pub number_of_seasons: u64,
    pub number_of_episodes: u64,
}

/// Runtime statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub rows_read: usize,
    /// Rows dropped by the inclusion rules (no title, no poster, ...)
    pub rows_skipped: usize,
    /// Rows that could not be read or normalized at all
    pub row_errors: usize,
    pub movies_written: usize,
    pub tv_shows_written: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn rows_accepted(&self) -> usize {
        self.rows_read
            .saturating_sub(self.rows_skipped)
            .saturating_sub(self.row_errors)
    }
}
