use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use showgraph_core::{Error, Graph, GraphConfig, Item, ItemRecord, Result, VertexId};

use crate::config::LoaderConfig;

/// Counts reported after a load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub items: usize,
    pub similarity_edges: usize,
    pub viewers: usize,
    pub viewer_edges: usize,
    /// Edges dropped because an endpoint was unknown or both ends matched
    pub skipped_edges: usize,
}

/// Builds a populated [`Graph`]: items, similarity edges among items,
/// viewers, then viewer-item edges
#[derive(Debug, Clone)]
pub struct GraphLoader {
    config: LoaderConfig,
    graph_config: GraphConfig,
}

impl GraphLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            graph_config: GraphConfig::default(),
        })
    }

    pub fn with_graph_config(mut self, graph_config: GraphConfig) -> Result<Self> {
        graph_config.validate()?;
        self.graph_config = graph_config;
        Ok(self)
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn load<R, V>(
        &self,
        records: R,
        viewers: V,
        edges: &[(VertexId, VertexId)],
    ) -> Result<(Graph, LoadStats)>
    where
        R: IntoIterator<Item = ItemRecord>,
        V: IntoIterator<Item = VertexId>,
    {
        self.populate(records, viewers, edges, true)
    }

    /// Load without similarity edges; cluster graphs only need the items
    pub fn load_for_clusters<R, V>(
        &self,
        records: R,
        viewers: V,
        edges: &[(VertexId, VertexId)],
    ) -> Result<(Graph, LoadStats)>
    where
        R: IntoIterator<Item = ItemRecord>,
        V: IntoIterator<Item = VertexId>,
    {
        self.populate(records, viewers, edges, false)
    }

    fn populate<R, V>(
        &self,
        records: R,
        viewers: V,
        edges: &[(VertexId, VertexId)],
        similarity: bool,
    ) -> Result<(Graph, LoadStats)>
    where
        R: IntoIterator<Item = ItemRecord>,
        V: IntoIterator<Item = VertexId>,
    {
        let mut graph = Graph::with_config(self.graph_config.clone())?;
        let mut stats = LoadStats::default();

        for record in records {
            let id = record.id.clone();
            if graph.add_item(record) {
                stats.items += 1;
            } else {
                warn!(id = %id, "duplicate item id, keeping the first record");
            }
        }
        info!(items = stats.items, "loaded items");

        if similarity {
            for (a, b) in self.similarity_pairs(&graph) {
                graph.connect(&a, &b)?;
                stats.similarity_edges += 1;
            }
            info!(
                edges = stats.similarity_edges,
                threshold = self.config.similarity_threshold,
                score = %self.config.score_kind,
                "connected similar items"
            );
        }

        for viewer in viewers {
            if graph.add_viewer(viewer.clone()) {
                stats.viewers += 1;
            } else {
                warn!(id = %viewer, "duplicate viewer id");
            }
        }

        for (a, b) in edges {
            match graph.connect(a, b) {
                Ok(()) => stats.viewer_edges += 1,
                Err(err @ (Error::UnknownVertex(_) | Error::SelfLoop(_))) => {
                    warn!(source = %a, target = %b, error = %err, "skipping edge");
                    stats.skipped_edges += 1;
                }
                Err(err) => return Err(err),
            }
        }
        info!(
            viewers = stats.viewers,
            edges = stats.viewer_edges,
            skipped = stats.skipped_edges,
            "loaded viewers"
        );

        Ok((graph, stats))
    }

    /// Every pair of items scoring at or above the threshold, in insertion
    /// order of the first item then the second
    fn similarity_pairs(&self, graph: &Graph) -> Vec<(VertexId, VertexId)> {
        let items: Vec<(&VertexId, &Item)> =
            graph.items().map(|(v, item)| (v.id(), item)).collect();
        let kind = self.config.score_kind;
        let threshold = self.config.similarity_threshold;

        (0..items.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let (id_a, item_a) = items[i];
                items[i + 1..]
                    .iter()
                    .filter(move |(_, item_b)| kind.score(item_a, item_b) >= threshold)
                    .map(move |(id_b, _)| (id_a.clone(), (*id_b).clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showgraph_core::{ItemKind, ScoreKind};
    use std::collections::BTreeSet;

    fn record(id: &str, kind: ItemKind, year: i32, genres: &[&str]) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            kind,
            title: format!("Title {}", id),
            rating: 7.0,
            release_year: year,
            content_rating: "PG".to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
            duration: "90".to_string(),
        }
    }

    fn records() -> Vec<ItemRecord> {
        vec![
            record("m1", ItemKind::Movie, 2000, &["Comedy"]),
            record("m2", ItemKind::Movie, 2000, &["Comedy"]),
            record("m3", ItemKind::Movie, 1950, &["Horror"]),
            record("s1", ItemKind::Series, 2001, &["Comedy"]),
        ]
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<(VertexId, VertexId)> {
        pairs.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn test_load_connects_similar_items() {
        let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
        let (graph, stats) = loader
            .load(records(), vec!["u1".to_string()], &edges(&[("u1", "m3")]))
            .unwrap();

        // m1/m2 identical; s1 one year off: (0.8 + 1 + 1 + 1) / 4 = 0.95
        assert!(graph.adjacent("m1", "m2"));
        assert!(graph.adjacent("m1", "s1"));
        assert!(graph.adjacent("m2", "s1"));
        assert!(!graph.adjacent("m1", "m3"));
        assert_eq!(stats.similarity_edges, 3);
        assert_eq!(stats.items, 4);
        assert_eq!(stats.viewers, 1);
        assert_eq!(stats.viewer_edges, 1);
        assert!(graph.adjacent("m3", "u1"));
    }

    #[test]
    fn test_threshold_and_score_kind() {
        let config = LoaderConfig {
            similarity_threshold: 1.0,
            score_kind: ScoreKind::Genre,
        };
        let (graph, stats) = GraphLoader::new(config)
            .unwrap()
            .load(records(), Vec::new(), &[])
            .unwrap();
        assert_eq!(stats.similarity_edges, 3);
        assert!(graph.adjacent("m1", "s1"));
        assert_eq!(graph.degree("m3").unwrap(), 0);
    }

    #[test]
    fn test_cluster_load_has_no_similarity_edges() {
        let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
        let (graph, stats) = loader
            .load_for_clusters(records(), vec!["u1".to_string()], &edges(&[("u1", "m1")]))
            .unwrap();
        assert_eq!(stats.similarity_edges, 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_bad_edges_are_skipped() {
        let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
        let (graph, stats) = loader
            .load_for_clusters(
                records(),
                vec!["u1".to_string()],
                &edges(&[("u1", "m1"), ("u1", "ghost"), ("u1", "u1")]),
            )
            .unwrap();
        assert_eq!(stats.viewer_edges, 1);
        assert_eq!(stats.skipped_edges, 2);
        assert_eq!(graph.degree("u1").unwrap(), 1);
    }

    #[test]
    fn test_duplicate_records_keep_first() {
        let mut input = records();
        let mut duplicate = record("m1", ItemKind::Movie, 1900, &[]);
        duplicate.title = "Impostor".to_string();
        input.push(duplicate);

        let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
        let (graph, stats) = loader.load_for_clusters(input, Vec::new(), &[]).unwrap();
        assert_eq!(stats.items, 4);
        assert_eq!(graph.item("m1").unwrap().title, "Title m1");
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let bad = LoaderConfig {
            similarity_threshold: 2.0,
            ..Default::default()
        };
        assert!(GraphLoader::new(bad).is_err());

        let graph_config = GraphConfig {
            chart_capacity: 0,
            ..Default::default()
        };
        assert!(GraphLoader::new(LoaderConfig::default())
            .unwrap()
            .with_graph_config(graph_config)
            .is_err());
    }
}
