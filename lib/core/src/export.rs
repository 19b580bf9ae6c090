// Plain node/edge lists for a rendering layer
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::vertex::{VertexId, VertexKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: VertexId,
    pub kind: VertexKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: VertexId,
    pub target: VertexId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl Graph {
    /// Export at most `max_vertices` nodes.
    ///
    /// Items are visited in insertion order; each one is exported followed by
    /// as many of its neighbours as still fit. Edges are emitted once, and only
    /// when both endpoints were exported.
    pub fn export(&self, max_vertices: usize) -> GraphExport {
        let mut order: AHashMap<&str, usize> = AHashMap::new();
        let mut nodes = Vec::new();

        for (vertex, _) in self.items() {
            if nodes.len() >= max_vertices {
                break;
            }
            admit(&mut order, &mut nodes, max_vertices, vertex.id(), vertex.kind());
            for neighbour in self.neighbours(vertex.id()).into_iter().flatten() {
                if let Ok(other) = self.vertex(neighbour) {
                    admit(&mut order, &mut nodes, max_vertices, other.id(), other.kind());
                }
            }
        }

        let mut edges = Vec::new();
        for (position, node) in nodes.iter().enumerate() {
            for neighbour in self.neighbours(&node.id).into_iter().flatten() {
                match order.get(neighbour.as_str()) {
                    Some(&other) if other > position => edges.push(ExportEdge {
                        source: node.id.clone(),
                        target: neighbour.clone(),
                    }),
                    _ => {}
                }
            }
        }

        GraphExport { nodes, edges }
    }

    /// Export capped at the configured `max_export_vertices`
    pub fn export_default(&self) -> GraphExport {
        self.export(self.config().max_export_vertices)
    }
}

fn admit<'g>(
    order: &mut AHashMap<&'g str, usize>,
    nodes: &mut Vec<ExportNode>,
    max_vertices: usize,
    id: &'g VertexId,
    kind: VertexKind,
) {
    if nodes.len() < max_vertices && !order.contains_key(id.as_str()) {
        order.insert(id.as_str(), nodes.len());
        nodes.push(ExportNode { id: id.clone(), kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{Item, Vertex};

    fn graph() -> Graph {
        let mut graph = Graph::new();
        for (id, title) in [("m1", "Bolt"), ("m2", "Cars"), ("m3", "Up")] {
            graph.add_vertex(Vertex::movie(id, Item::new(title, 7.0, 2008)));
        }
        graph.add_viewer("u1");
        graph.connect("m1", "m2").unwrap();
        graph.connect("u1", "m1").unwrap();
        graph.connect("u1", "m3").unwrap();
        graph
    }

    #[test]
    fn test_export_everything() {
        let export = graph().export(100);
        let ids: Vec<_> = export.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "u1", "m3"]);
        assert_eq!(export.edges.len(), 3);
        assert_eq!(export.nodes[2].kind, VertexKind::Viewer);
    }

    #[test]
    fn test_export_respects_cap() {
        let export = graph().export(2);
        assert_eq!(export.nodes.len(), 2);
        assert_eq!(
            export.edges,
            vec![ExportEdge {
                source: "m1".to_string(),
                target: "m2".to_string()
            }]
        );
    }

    #[test]
    fn test_export_default_uses_configured_cap() {
        let source = graph();
        assert_eq!(source.export_default(), source.export(5000));

        let config = crate::GraphConfig {
            max_export_vertices: 2,
            ..Default::default()
        };
        let mut capped = Graph::with_config(config).unwrap();
        for vertex in source.vertices(None) {
            capped.add_vertex(vertex.clone());
        }
        capped.connect("m1", "m2").unwrap();
        assert_eq!(capped.export_default(), capped.export(2));
        assert_eq!(capped.export_default().nodes.len(), 2);
    }

    #[test]
    fn test_export_serializes_kinds() {
        let export = graph().export(1);
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "movie");
    }
}
