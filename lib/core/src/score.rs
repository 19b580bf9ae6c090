//! Pairwise similarity heuristics between two items
//!
//! Every function returns a score in range [0.0, 1.0] where 1.0 means the two
//! items agree completely on that attribute.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::vertex::Item;
use crate::{Error, Result};

/// Tags for general audiences
const GENERAL_RATINGS: [&str; 3] = ["PG", "TV-PG", "PG-13"];

/// Tags for youth programming
const YOUTH_RATINGS: [&str; 2] = ["TV-14", "TV-Y"];

/// Steps per rating point kept when comparing two ratings
const RATING_PRECISION: f64 = 1e6;

/// Which heuristic a similarity query uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreKind {
    Age,
    #[serde(alias = "rated")]
    ContentRating,
    Rating,
    Genre,
    #[default]
    #[serde(alias = "average")]
    Composite,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 5] = [
        ScoreKind::Age,
        ScoreKind::ContentRating,
        ScoreKind::Rating,
        ScoreKind::Genre,
        ScoreKind::Composite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreKind::Age => "age",
            ScoreKind::ContentRating => "content-rating",
            ScoreKind::Rating => "rating",
            ScoreKind::Genre => "genre",
            ScoreKind::Composite => "composite",
        }
    }

    /// Score two items with this heuristic
    pub fn score(self, a: &Item, b: &Item) -> f64 {
        match self {
            ScoreKind::Age => age_similarity(a.release_year, b.release_year),
            ScoreKind::ContentRating => {
                content_rating_similarity(&a.content_rating, &b.content_rating)
            }
            ScoreKind::Rating => rating_similarity(a.rating, b.rating),
            ScoreKind::Genre => genre_similarity(&a.genres, &b.genres),
            ScoreKind::Composite => composite_similarity(a, b),
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(ScoreKind::Age),
            "content-rating" | "content_rating" | "rated" => Ok(ScoreKind::ContentRating),
            "rating" => Ok(ScoreKind::Rating),
            "genre" => Ok(ScoreKind::Genre),
            "composite" | "average" => Ok(ScoreKind::Composite),
            other => Err(Error::InvalidAttribute(format!("score kind '{}'", other))),
        }
    }
}

/// Similarity by distance between release years
pub fn age_similarity(year_a: i32, year_b: i32) -> f64 {
    match year_a.abs_diff(year_b) {
        0 => 1.0,
        1..=4 => 0.8,
        5..=9 => 0.6,
        10..=19 => 0.4,
        20..=39 => 0.2,
        _ => 0.0,
    }
}

/// Similarity by distance between review scores.
///
/// Only an exact match scores 1.0. Any other difference is floored to whole
/// points before the bucket lookup, so 1.9 lands with 1 and 2.5 with 2.
/// The difference is snapped to a millionth of a point first, so that
/// `8.7 - 3.7` floors to 5 rather than 4.
pub fn rating_similarity(rating_a: f64, rating_b: f64) -> f64 {
    let diff = (rating_a - rating_b).abs();
    if diff == 0.0 {
        return 1.0;
    }
    if !diff.is_finite() {
        return 0.0;
    }
    let snapped = (diff * RATING_PRECISION).round() / RATING_PRECISION;
    match snapped.floor() as u64 {
        0..=1 => 0.8,
        2 => 0.6,
        3..=4 => 0.4,
        5..=6 => 0.2,
        _ => 0.0,
    }
}

/// Similarity between content classification tags
pub fn content_rating_similarity(tag_a: &str, tag_b: &str) -> f64 {
    if tag_a == tag_b {
        return 1.0;
    }
    let general = |tag: &str| GENERAL_RATINGS.contains(&tag);
    let youth = |tag: &str| YOUTH_RATINGS.contains(&tag);

    if (general(tag_a) && general(tag_b)) || (youth(tag_a) && youth(tag_b)) {
        0.75
    } else if (general(tag_a) || youth(tag_a)) && (general(tag_b) || youth(tag_b)) {
        0.5
    } else {
        0.0
    }
}

/// Shared genres divided by the size of the larger genre set
pub fn genre_similarity(genres_a: &BTreeSet<String>, genres_b: &BTreeSet<String>) -> f64 {
    let denominator = genres_a.len().max(genres_b.len());
    if denominator == 0 {
        return 0.0;
    }
    let shared = genres_a.intersection(genres_b).count();
    shared as f64 / denominator as f64
}

/// Unweighted mean of the four heuristics
pub fn composite_similarity(a: &Item, b: &Item) -> f64 {
    let sum = age_similarity(a.release_year, b.release_year)
        + rating_similarity(a.rating, b.rating)
        + genre_similarity(&a.genres, &b.genres)
        + content_rating_similarity(&a.content_rating, &b.content_rating);
    sum / 4.0
}
