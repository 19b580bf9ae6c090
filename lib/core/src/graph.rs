use ahash::{AHashMap, AHashSet};
use std::collections::BTreeSet;
use tracing::debug;

use crate::attribute::{Attribute, AttributeValue};
use crate::chart::{ChartBuffer, ChartSeries};
use crate::config::GraphConfig;
use crate::score::ScoreKind;
use crate::vertex::{Item, ItemRecord, Vertex, VertexId, VertexKind};
use crate::{Error, Result};

#[derive(Debug, Clone)]
struct Node {
    vertex: Vertex,
    neighbours: BTreeSet<VertexId>,
}

/// An undirected graph of movies, series and viewers.
///
/// Vertices live in an arena in insertion order, with an id index on the
/// side. Each slot owns the ids of its neighbours. Adjacency is kept
/// symmetric and irreflexive by every mutating operation.
#[derive(Debug, Clone)]
pub struct Graph {
    config: GraphConfig,
    nodes: Vec<Node>,
    index: AHashMap<VertexId, usize>,
    chart: ChartBuffer,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        let config = GraphConfig::default();
        let chart = ChartBuffer::new(config.chart_capacity);
        Self {
            config,
            nodes: Vec::new(),
            index: AHashMap::new(),
            chart,
        }
    }

    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        let chart = ChartBuffer::new(config.chart_capacity);
        Ok(Self {
            config,
            nodes: Vec::new(),
            index: AHashMap::new(),
            chart,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn slot(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(id.to_string()))
    }

    /// Add a vertex unless its id is already taken. Returns whether it was added.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.index.contains_key(vertex.id()) {
            return false;
        }
        self.index.insert(vertex.id().clone(), self.nodes.len());
        self.nodes.push(Node {
            vertex,
            neighbours: BTreeSet::new(),
        });
        true
    }

    pub fn add_item(&mut self, record: ItemRecord) -> bool {
        self.add_vertex(Vertex::from(record))
    }

    pub fn add_viewer(&mut self, id: impl Into<VertexId>) -> bool {
        self.add_vertex(Vertex::viewer(id))
    }

    /// Store a fully formed vertex, replacing any record under the same id.
    /// Edges already attached to that id are kept.
    pub fn insert_vertex(&mut self, vertex: Vertex) {
        match self.index.get(vertex.id()) {
            Some(&slot) => self.nodes[slot].vertex = vertex,
            None => {
                self.add_vertex(vertex);
            }
        }
    }

    /// Connect two distinct vertices. Both sides are updated or neither is.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;
        if slot_a == slot_b {
            return Err(Error::SelfLoop(a.to_string()));
        }
        self.nodes[slot_a].neighbours.insert(b.to_string());
        self.nodes[slot_b].neighbours.insert(a.to_string());
        Ok(())
    }

    /// Whether `a` and `b` share an edge; false when either id is unknown
    pub fn adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.contains_key(b)) {
            (Some(&slot), true) => self.nodes[slot].neighbours.contains(b),
            _ => false,
        }
    }

    pub fn neighbours(&self, id: &str) -> Result<&BTreeSet<VertexId>> {
        let slot = self.slot(id)?;
        Ok(&self.nodes[slot].neighbours)
    }

    pub fn degree(&self, id: &str) -> Result<usize> {
        self.neighbours(id).map(|n| n.len())
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbours.len()).sum::<usize>() / 2
    }

    pub fn vertex(&self, id: &str) -> Result<&Vertex> {
        let slot = self.slot(id)?;
        Ok(&self.nodes[slot].vertex)
    }

    /// Item attributes of `id`, `NotAnItem` for a viewer
    pub fn item(&self, id: &str) -> Result<&Item> {
        self.vertex(id)?.require_item()
    }

    /// Vertices in insertion order, optionally restricted to one kind
    pub fn vertices(&self, kind: Option<VertexKind>) -> impl Iterator<Item = &Vertex> + '_ {
        self.nodes
            .iter()
            .map(|n| &n.vertex)
            .filter(move |v| kind.map_or(true, |k| v.kind() == k))
    }

    pub fn ids(&self, kind: Option<VertexKind>) -> impl Iterator<Item = &VertexId> + '_ {
        self.vertices(kind).map(Vertex::id)
    }

    /// Movies and series with their attributes, in insertion order
    pub fn items(&self) -> impl Iterator<Item = (&Vertex, &Item)> + '_ {
        self.nodes
            .iter()
            .filter_map(|n| n.vertex.as_item().map(|item| (&n.vertex, item)))
    }

    /// Every vertex paired with its value of `attribute`; viewers are skipped
    pub fn attribute_values(&self, attribute: Attribute) -> Vec<(&Vertex, AttributeValue)> {
        self.nodes
            .iter()
            .filter_map(|n| attribute.value_of(&n.vertex).map(|value| (&n.vertex, value)))
            .collect()
    }

    pub fn release_year(&self, id: &str) -> Result<i32> {
        self.item(id).map(|item| item.release_year)
    }

    /// First item in insertion order with this exact title
    pub fn first_by_title(&self, title: &str) -> Option<&Vertex> {
        self.items()
            .find(|(_, item)| item.title == title)
            .map(|(vertex, _)| vertex)
    }

    /// Every item carrying `title`, as (id, release year) so callers can
    /// tell remakes apart
    pub fn find_by_title(&self, title: &str) -> Result<Vec<(&VertexId, i32)>> {
        let matches: Vec<_> = self
            .items()
            .filter(|(_, item)| item.title == title)
            .map(|(vertex, item)| (vertex.id(), item.release_year))
            .collect();
        if matches.is_empty() {
            return Err(Error::NotFound(format!("title '{}'", title)));
        }
        Ok(matches)
    }

    /// Remove every vertex of `kind` together with its edges.
    /// Returns the number of vertices removed.
    pub fn remove_kind(&mut self, kind: VertexKind) -> usize {
        let removed: AHashSet<VertexId> = self
            .ids(Some(kind))
            .cloned()
            .collect();
        if removed.is_empty() {
            return 0;
        }

        self.nodes.retain(|n| n.vertex.kind() != kind);
        for node in &mut self.nodes {
            node.neighbours.retain(|id| !removed.contains(id));
        }
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, n)| (n.vertex.id().clone(), slot))
            .collect();

        debug!(
            kind = %kind,
            removed = removed.len(),
            remaining = self.nodes.len(),
            "removed vertices"
        );
        removed.len()
    }

    /// Drop every edge that touches a viewer. Returns the number of edges dropped.
    pub fn strip_viewer_edges(&mut self) -> usize {
        let before = self.edge_count();
        let viewers: AHashSet<VertexId> = self
            .ids(Some(VertexKind::Viewer))
            .cloned()
            .collect();

        for node in &mut self.nodes {
            if node.vertex.kind() == VertexKind::Viewer {
                node.neighbours.clear();
            } else {
                node.neighbours.retain(|id| !viewers.contains(id));
            }
        }

        let stripped = before - self.edge_count();
        debug!(stripped, "stripped viewer edges");
        stripped
    }

    /// Score two items with the chosen heuristic
    pub fn similarity(&self, a: &str, b: &str, kind: ScoreKind) -> Result<f64> {
        let first = self.vertex(a)?;
        let second = self.vertex(b)?;
        Ok(kind.score(first.require_item()?, second.require_item()?))
    }

    /// Append an item's title and rating to the chart buffer
    pub fn push_chart_item(&mut self, id: &str) -> Result<()> {
        let item = self.item(id)?;
        let (title, rating) = (item.title.clone(), item.rating);
        self.chart.push(title, rating)
    }

    pub fn chart(&self) -> &ChartSeries {
        self.chart.series()
    }

    pub fn reset_chart(&mut self) {
        self.chart.reset();
    }

    /// Titles and ratings of every item, refused when there are more items
    /// than a chart can hold
    pub fn rating_chart(&self) -> Result<ChartSeries> {
        let count = self.items().count();
        if count > self.config.chart_capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.config.chart_capacity,
                requested: count,
            });
        }
        let mut buffer = ChartBuffer::new(self.config.chart_capacity);
        for (_, item) in self.items() {
            buffer.push(item.title.clone(), item.rating)?;
        }
        Ok(buffer.series().clone())
    }
}
