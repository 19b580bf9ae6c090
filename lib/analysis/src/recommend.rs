//! Anchor-based recommendations
//!
//! Ranks items by similarity to one anchor item. The composite score acts as
//! the relevance gate while the caller's chosen score orders the results.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use showgraph_core::score::composite_similarity;
use showgraph_core::{Error, Graph, Item, Result, ScoreKind, Vertex, VertexId, VertexKind};

use crate::profile::ProfileQuery;

/// What to recommend against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// A concrete item; candidates share its kind
    Id(VertexId),
    /// The first item with this title; candidates are movies and series alike
    Title(String),
}

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: VertexId,
    pub title: String,
    pub score: f64,
}

/// Highest score first, ties broken by descending id
pub(crate) fn rank(a: &Recommendation, b: &Recommendation) -> Ordering {
    OrderedFloat(b.score)
        .cmp(&OrderedFloat(a.score))
        .then_with(|| b.id.cmp(&a.id))
}

/// Read-only ranking queries over a graph
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'g> {
    graph: &'g Graph,
}

impl<'g> Recommender<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Get a reference to the graph
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn resolve(&self, anchor: &Anchor) -> Result<(&'g Vertex, &'g Item, Option<VertexKind>)> {
        match anchor {
            Anchor::Id(id) => {
                let vertex = self
                    .graph
                    .vertex(id)
                    .map_err(|_| Error::NotFound(format!("item '{}'", id)))?;
                let item = vertex
                    .as_item()
                    .ok_or_else(|| Error::NotFound(format!("item '{}'", id)))?;
                Ok((vertex, item, Some(vertex.kind())))
            }
            Anchor::Title(title) => {
                let vertex = self
                    .graph
                    .first_by_title(title)
                    .ok_or_else(|| Error::NotFound(format!("title '{}'", title)))?;
                Ok((vertex, vertex.require_item()?, None))
            }
        }
    }

    /// Up to `limit` items most similar to `anchor` under `score_kind`.
    ///
    /// Never returns the anchor itself nor any item whose composite score
    /// against the anchor is zero. Titles are not de-duplicated. An anchor
    /// that names no item is `NotFound`.
    pub fn recommend(
        &self,
        anchor: &Anchor,
        limit: usize,
        score_kind: ScoreKind,
    ) -> Result<Vec<Recommendation>> {
        let (anchor_vertex, anchor_item, same_kind) = self.resolve(anchor)?;

        let mut ranked: Vec<Recommendation> = self
            .graph
            .items()
            .filter(|(vertex, _)| vertex.id() != anchor_vertex.id())
            .filter(|(vertex, _)| same_kind.map_or(true, |kind| vertex.kind() == kind))
            .filter(|(_, item)| composite_similarity(anchor_item, item) != 0.0)
            .map(|(vertex, item)| Recommendation {
                id: vertex.id().clone(),
                title: item.title.clone(),
                score: score_kind.score(anchor_item, item),
            })
            .collect();

        ranked.sort_by(rank);
        ranked.truncate(limit);

        debug!(
            anchor = %anchor_vertex.id(),
            score = %score_kind,
            returned = ranked.len(),
            "anchor recommendation"
        );
        Ok(ranked)
    }

    /// Titles only, in ranked order
    pub fn recommend_titles(
        &self,
        anchor: &Anchor,
        limit: usize,
        score_kind: ScoreKind,
    ) -> Result<Vec<String>> {
        Ok(self
            .recommend(anchor, limit, score_kind)?
            .into_iter()
            .map(|r| r.title)
            .collect())
    }

    /// Items matching a synthetic profile; see [`ProfileQuery`]
    pub fn recommend_by_profile(
        &self,
        query: &ProfileQuery,
        limit: usize,
    ) -> Vec<Recommendation> {
        query.run(self.graph, limit)
    }
}
