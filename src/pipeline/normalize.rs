// src/pipeline/normalize.rs - RawRecord -> Movie

use chrono::NaiveDate;
use std::fmt;

use crate::genres::parse_genre_names;
use crate::input_format::RawRecord;
use crate::pipeline::context::Movie;

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

pub const DEFAULT_OVERVIEW: &str = "No overview available";
pub const DEFAULT_STATUS: &str = "Released";
pub const DEFAULT_RELEASE_DATE: &str = "1970-01-01";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Which rows make it into the dataset. Title and poster are always required.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusionRules {
    pub require_overview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    MissingPoster,
    MissingOverview,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingTitle => "no title",
            SkipReason::MissingPoster => "no poster path",
            SkipReason::MissingOverview => "no overview",
        };
        f.write_str(text)
    }
}

pub fn normalize_movie(raw: &RawRecord, rules: InclusionRules) -> Result<Movie, SkipReason> {
    let title = raw.field("title").ok_or(SkipReason::MissingTitle)?;
    let poster = raw.field("poster_path").ok_or(SkipReason::MissingPoster)?;
    if rules.require_overview && raw.field("overview").is_none() {
        return Err(SkipReason::MissingOverview);
    }

    let id = match raw.field("id") {
        Some(id) => id.to_string(),
        None => format!("movie-{}", raw.row.saturating_sub(1)),
    };

    Ok(Movie {
        id,
        title: title.to_string(),
        overview: text_or(raw, "overview", DEFAULT_OVERVIEW),
        release_date: release_date(raw.field("release_date")),
        poster_path: image_url(POSTER_BASE_URL, Some(poster)),
        backdrop_path: image_url(BACKDROP_BASE_URL, raw.field("backdrop_path")),
        genres: raw.field("genres").map(parse_genre_names).unwrap_or_default(),
        runtime: parse_count(raw.field("runtime")),
        status: text_or(raw, "status", DEFAULT_STATUS),
        vote_average: parse_float(raw.field("vote_average")),
        vote_count: parse_count(raw.field("vote_count")),
        original_language: text_or(raw, "original_language", DEFAULT_LANGUAGE),
        popularity: parse_float(raw.field("popularity")),
    })
}

/// Base joined with the relative path, or "" when there is no path.
pub fn image_url(base: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => format!("{}{}", base, path),
        None => String::new(),
    }
}

/// Digits only; signs, decimals, whitespace and overflow all give 0.
pub fn parse_count(value: Option<&str>) -> u64 {
    value
        .filter(|v| v.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Finite floats only; NaN and infinities give 0.0.
pub fn parse_float(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn release_date(value: Option<&str>) -> String {
    value
        .filter(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok())
        .unwrap_or(DEFAULT_RELEASE_DATE)
        .to_string()
}

fn text_or(raw: &RawRecord, column: &str, default: &str) -> String {
    raw.field(column).unwrap_or(default).to_string()
}
