//! Profile-based recommendations
//!
//! A [`ProfileQuery`] describes what a viewer asked for (a kind, a few genres
//! and a rating band) and is scored against the graph without ever being
//! inserted into it.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use showgraph_core::score::genre_similarity;
use showgraph_core::{Error, Graph, ItemKind, Result, VertexKind};

use crate::recommend::{rank, Recommendation};

/// Half-open rating interval `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBand {
    pub low: i32,
    pub high: i32,
}

impl RatingBand {
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if low >= high {
            return Err(Error::InvalidAttribute(format!(
                "rating band {}-{} is empty",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn contains(&self, rating: f64) -> bool {
        rating >= f64::from(self.low) && rating < f64::from(self.high)
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for RatingBand {
    type Err = Error;

    /// Accepts `low-high` such as `8-10`, or `<n> and below` meaning `[1, n)`.
    /// Any other text starting with `5` is the bottom band `[1, 5)`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAttribute(format!("rating band '{}'", s));
        let trimmed = s.trim();

        if let Some(ceiling) = trimmed.strip_suffix("and below") {
            let high = ceiling.trim().parse::<i32>().map_err(|_| invalid())?;
            return RatingBand::new(1, high).map_err(|_| invalid());
        }
        if trimmed.starts_with('5') {
            return RatingBand::new(1, 5);
        }

        let (low, high) = trimmed.split_once('-').ok_or_else(invalid)?;
        let low = low.trim().parse::<i32>().map_err(|_| invalid())?;
        let high = high.trim().parse::<i32>().map_err(|_| invalid())?;
        RatingBand::new(low, high).map_err(|_| invalid())
    }
}

/// A scoped query profile: kind, wanted genres and a rating band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub kind: ItemKind,
    pub genres: BTreeSet<String>,
    pub band: RatingBand,
}

impl ProfileQuery {
    pub fn new<I, S>(kind: ItemKind, genres: I, band: RatingBand) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            genres: genres.into_iter().map(Into::into).collect(),
            band,
        }
    }

    /// Rank items of the requested kind that share a genre with the profile
    /// and fall inside the rating band. Genre similarity is both gate and
    /// ordering; duplicate titles keep only their best-ranked entry.
    pub fn run(&self, graph: &Graph, limit: usize) -> Vec<Recommendation> {
        let kind: VertexKind = self.kind.into();

        let mut ranked: Vec<Recommendation> = graph
            .items()
            .filter(|(vertex, _)| vertex.kind() == kind)
            .filter(|(_, item)| !item.genres.is_disjoint(&self.genres))
            .filter(|(_, item)| self.band.contains(item.rating))
            .map(|(vertex, item)| Recommendation {
                id: vertex.id().clone(),
                title: item.title.clone(),
                score: genre_similarity(&self.genres, &item.genres),
            })
            .filter(|r| r.score != 0.0)
            .collect();
        ranked.sort_by(rank);

        let mut seen = AHashSet::new();
        ranked.retain(|r| seen.insert(r.title.clone()));
        ranked.truncate(limit);

        debug!(
            kind = %self.kind,
            band = %self.band,
            returned = ranked.len(),
            "profile recommendation"
        );
        ranked
    }
}
