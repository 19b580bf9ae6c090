// Trending items: the movies and series adjacent to the most viewers
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use showgraph_core::{Graph, VertexId, VertexKind};

/// Default number of extraction rounds
pub const TRENDING_ROUNDS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: VertexId,
    pub title: String,
    /// Number of viewers adjacent to this item
    pub viewers: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct TrendingAnalyzer<'g> {
    graph: &'g Graph,
}

impl<'g> TrendingAnalyzer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// The [`TRENDING_ROUNDS`] most watched items
    pub fn trending(&self) -> Vec<TrendingItem> {
        self.top(TRENDING_ROUNDS)
    }

    /// Up to `rounds` items ordered by viewer count.
    ///
    /// Viewers are visited in insertion order and their neighbours in id
    /// order; among equal counts the item met first ranks first.
    pub fn top(&self, rounds: usize) -> Vec<TrendingItem> {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        let mut encounter: Vec<(&VertexId, &str)> = Vec::new();

        for viewer in self.graph.ids(Some(VertexKind::Viewer)) {
            for neighbour in self.graph.neighbours(viewer).into_iter().flatten() {
                let Some(title) = self.graph.vertex(neighbour).ok().and_then(|v| v.title()) else {
                    continue;
                };
                let count = counts.entry(neighbour.as_str()).or_insert(0);
                if *count == 0 {
                    encounter.push((neighbour, title));
                }
                *count += 1;
            }
        }

        let mut ranked: Vec<TrendingItem> = encounter
            .into_iter()
            .map(|(id, title)| TrendingItem {
                id: id.clone(),
                title: title.to_string(),
                viewers: counts.get(id.as_str()).copied().unwrap_or(0),
            })
            .collect();
        // stable: equal counts keep encounter order
        ranked.sort_by(|a, b| b.viewers.cmp(&a.viewers));
        ranked.truncate(rounds);

        debug!(candidates = counts.len(), returned = ranked.len(), "trending items");
        ranked
    }

    /// Titles of [`Self::trending`], most watched first
    pub fn trending_titles(&self) -> Vec<String> {
        self.trending().into_iter().map(|t| t.title).collect()
    }
}
