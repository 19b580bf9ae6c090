//! Attribute clusters
//!
//! Builds a fresh graph in which two items are connected exactly when they
//! share the same value of one attribute. Every equal-value group becomes a
//! clique, and each clique is a connected component.

use tracing::debug;

use showgraph_core::{Attribute, AttributeValue, Error, Graph, GraphConfig, Result, Vertex};

pub struct ClusterBuilder;

impl ClusterBuilder {
    pub fn by_release_year(pairs: &[(&Vertex, AttributeValue)]) -> Result<Graph> {
        Self::build(Attribute::ReleaseYear, pairs)
    }

    pub fn by_rating(pairs: &[(&Vertex, AttributeValue)]) -> Result<Graph> {
        Self::build(Attribute::Rating, pairs)
    }

    /// Durations compare as exact strings
    pub fn by_duration(pairs: &[(&Vertex, AttributeValue)]) -> Result<Graph> {
        Self::build(Attribute::Duration, pairs)
    }

    /// Genres compare as whole sets
    pub fn by_genre(pairs: &[(&Vertex, AttributeValue)]) -> Result<Graph> {
        Self::build(Attribute::Genre, pairs)
    }

    /// Copy every vertex into a new graph, then connect each pair of
    /// distinct vertices with equal values
    pub fn build(attribute: Attribute, pairs: &[(&Vertex, AttributeValue)]) -> Result<Graph> {
        Self::build_with(&GraphConfig::default(), attribute, pairs)
    }

    /// Same as [`Self::build`], with the cluster graph using `config`
    pub fn build_with(
        config: &GraphConfig,
        attribute: Attribute,
        pairs: &[(&Vertex, AttributeValue)],
    ) -> Result<Graph> {
        if let Some((vertex, value)) = pairs.iter().find(|(_, v)| v.attribute() != attribute) {
            return Err(Error::InvalidAttribute(format!(
                "expected {} for vertex {}, got {}",
                attribute,
                vertex.id(),
                value.attribute()
            )));
        }

        let mut graph = Graph::with_config(config.clone())?;
        for (vertex, _) in pairs {
            graph.insert_vertex((*vertex).clone());
        }

        for (i, (first, first_value)) in pairs.iter().enumerate() {
            for (second, second_value) in &pairs[i + 1..] {
                if first.id() != second.id() && first_value == second_value {
                    graph.connect(first.id(), second.id())?;
                }
            }
        }

        debug!(
            attribute = %attribute,
            vertices = graph.len(),
            edges = graph.edge_count(),
            "built cluster graph"
        );
        Ok(graph)
    }
}

/// Cluster the items of `graph` by one attribute. The cluster graph keeps
/// the source graph's config.
pub fn cluster_graph(graph: &Graph, attribute: Attribute) -> Result<Graph> {
    let pairs = graph.attribute_values(attribute);
    ClusterBuilder::build_with(graph.config(), attribute, &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showgraph_core::Item;

    fn graph() -> Graph {
        let mut graph = Graph::new();
        let rows = [
            ("m1", 2019, 7.0, "128", vec!["Adventure", "Family"]),
            ("m2", 2019, 7.6, "105", vec!["Family", "Adventure"]),
            ("m3", 1977, 7.1, "48", vec!["Adventure", "Family"]),
            ("m4", 2005, 7.0, "100", vec!["Documentary"]),
            ("m5", 2019, 8.1, "100", vec!["Comedy"]),
        ];
        for (id, year, rating, duration, genres) in rows {
            graph.add_vertex(Vertex::movie(
                id,
                Item::new(id, rating, year)
                    .with_genres(genres)
                    .with_duration(duration),
            ));
        }
        graph.add_viewer("u1");
        graph.connect("u1", "m1").unwrap();
        graph
    }

    /// Connected iff values are equal and the vertices differ
    fn assert_equality_edges(cluster: &Graph, source: &Graph, attribute: Attribute) {
        let values = source.attribute_values(attribute);
        for (a, va) in &values {
            for (b, vb) in &values {
                let expected = a.id() != b.id() && va == vb;
                assert_eq!(cluster.adjacent(a.id(), b.id()), expected, "{} {}", a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_release_year_clusters() {
        let source = graph();
        let cluster = cluster_graph(&source, Attribute::ReleaseYear).unwrap();
        assert_eq!(cluster.len(), 5);
        assert!(!cluster.contains("u1"));
        assert_eq!(cluster.edge_count(), 3);
        assert_equality_edges(&cluster, &source, Attribute::ReleaseYear);
    }

    #[test]
    fn test_genre_clusters_use_set_equality() {
        let source = graph();
        let cluster = cluster_graph(&source, Attribute::Genre).unwrap();
        assert_eq!(cluster.neighbours("m1").unwrap().len(), 2);
        assert!(cluster.adjacent("m2", "m3"));
        assert!(cluster.neighbours("m5").unwrap().is_empty());
        assert_equality_edges(&cluster, &source, Attribute::Genre);
    }

    #[test]
    fn test_rating_and_duration_clusters() {
        let source = graph();
        let by_rating = cluster_graph(&source, Attribute::Rating).unwrap();
        assert!(by_rating.adjacent("m1", "m4"));
        assert_eq!(by_rating.edge_count(), 1);

        let by_duration = cluster_graph(&source, Attribute::Duration).unwrap();
        assert!(by_duration.adjacent("m4", "m5"));
        assert_equality_edges(&by_duration, &source, Attribute::Duration);
    }

    #[test]
    fn test_source_edges_are_not_copied() {
        let source = graph();
        let cluster = cluster_graph(&source, Attribute::Rating).unwrap();
        assert!(cluster.neighbours("m1").unwrap().contains("m4"));
        assert!(!cluster.neighbours("m1").unwrap().contains("u1"));
    }

    #[test]
    fn test_builders_match_cluster_graph() {
        let source = graph();
        for attribute in Attribute::ALL {
            let pairs = source.attribute_values(attribute);
            let built = match attribute {
                Attribute::ReleaseYear => ClusterBuilder::by_release_year(&pairs),
                Attribute::Rating => ClusterBuilder::by_rating(&pairs),
                Attribute::Duration => ClusterBuilder::by_duration(&pairs),
                Attribute::Genre => ClusterBuilder::by_genre(&pairs),
            }
            .unwrap();
            let clustered = cluster_graph(&source, attribute).unwrap();
            assert_eq!(built.edge_count(), clustered.edge_count(), "{}", attribute);
            assert_equality_edges(&built, &source, attribute);
        }
    }

    #[test]
    fn test_cluster_keeps_source_config() {
        let config = GraphConfig {
            chart_capacity: 2,
            max_export_vertices: 3,
        };
        let mut source = Graph::with_config(config.clone()).unwrap();
        for (id, year) in [("m1", 2001), ("m2", 2001), ("m3", 2002)] {
            source.add_vertex(Vertex::movie(id, Item::new(id, 7.0, year)));
        }

        let cluster = cluster_graph(&source, Attribute::ReleaseYear).unwrap();
        assert_eq!(cluster.config(), &config);
        assert!(matches!(
            cluster.rating_chart(),
            Err(Error::CapacityExceeded { capacity: 2, requested: 3 })
        ));
        let standalone = ClusterBuilder::build(Attribute::Rating, &[]).unwrap();
        assert_eq!(standalone.config(), &GraphConfig::default());
    }

    #[test]
    fn test_mismatched_values_rejected() {
        let source = graph();
        let pairs = source.attribute_values(Attribute::Rating);
        assert!(matches!(
            ClusterBuilder::by_duration(&pairs),
            Err(Error::InvalidAttribute(_))
        ));
    }
}
