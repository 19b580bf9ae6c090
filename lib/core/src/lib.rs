//! # showgraph Core
//!
//! Core library for showgraph, an in-memory graph of movies, series and
//! viewers.
//!
//! This crate provides the fundamental data structures and scoring:
//!
//! - [`Vertex`] - A movie, series or viewer record
//! - [`Graph`] - Arena of vertices with symmetric, id-keyed adjacency
//! - [`ScoreKind`] - Age, rating, content-rating, genre and composite similarity
//! - [`ChartSeries`] - Capped title/value lists for bar charts
//! - [`GraphExport`] - Plain node/edge lists for rendering
//!
//! ## Example
//!
//! ```rust
//! use showgraph_core::{Graph, Item, ScoreKind, Vertex};
//!
//! let mut graph = Graph::new();
//! let item = Item::new("Finding Nemo", 8.0, 2000)
//!     .with_content_rating("G")
//!     .with_genres(["Comedy"]);
//! graph.add_vertex(Vertex::movie("a", item.clone()));
//! graph.add_vertex(Vertex::movie("b", item));
//!
//! assert_eq!(graph.similarity("a", "b", ScoreKind::Composite).unwrap(), 1.0);
//!
//! graph.connect("a", "b").unwrap();
//! assert!(graph.neighbours("a").unwrap().contains("b"));
//! ```

pub mod attribute;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod score;
pub mod vertex;

pub use attribute::{Attribute, AttributeValue};
pub use chart::{ChartBuffer, ChartSeries};
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use export::{ExportEdge, ExportNode, GraphExport};
pub use graph::Graph;
pub use score::ScoreKind;
pub use vertex::{Attributes, Item, ItemKind, ItemRecord, Vertex, VertexId, VertexKind};
