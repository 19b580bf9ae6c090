//! Seeded synthetic watch history
//!
//! Stands in for real viewing data: every viewer watches a random number of
//! distinct items. The same seed always yields the same edges.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use showgraph_core::{Error, Graph, Result, VertexId, VertexKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticWatchHistory {
    pub seed: u64,
    pub min_watched: usize,
    pub max_watched: usize,
    /// Viewers beyond this many get no history
    pub max_viewers: usize,
}

impl Default for SyntheticWatchHistory {
    fn default() -> Self {
        Self {
            seed: 0,
            min_watched: 30,
            max_watched: 70,
            max_viewers: 5000,
        }
    }
}

impl SyntheticWatchHistory {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_watched > self.max_watched {
            return Err(Error::InvalidConfig(format!(
                "min_watched {} exceeds max_watched {}",
                self.min_watched, self.max_watched
            )));
        }
        Ok(())
    }

    /// Viewer-item pairs for the first `max_viewers` viewers.
    ///
    /// The watched range is clamped to the number of items, so a small
    /// catalogue simply gets watched in full.
    pub fn generate(
        &self,
        viewers: &[VertexId],
        items: &[VertexId],
    ) -> Result<Vec<(VertexId, VertexId)>> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let high = self.max_watched.min(items.len());
        let low = self.min_watched.min(high);

        let mut edges = Vec::new();
        for viewer in viewers.iter().take(self.max_viewers) {
            let watched = rng.random_range(low..=high);
            for slot in index::sample(&mut rng, items.len(), watched) {
                edges.push((viewer.clone(), items[slot].clone()));
            }
        }

        debug!(
            seed = self.seed,
            viewers = viewers.len().min(self.max_viewers),
            edges = edges.len(),
            "generated watch history"
        );
        Ok(edges)
    }

    /// Same as [`Self::generate`], drawing viewers and items from `graph`
    pub fn generate_for(&self, graph: &Graph) -> Result<Vec<(VertexId, VertexId)>> {
        let viewers: Vec<VertexId> = graph.ids(Some(VertexKind::Viewer)).cloned().collect();
        let items: Vec<VertexId> = graph.items().map(|(v, _)| v.id().clone()).collect();
        self.generate(&viewers, &items)
    }
}
