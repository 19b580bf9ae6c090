//! # showgraph
//!
//! An in-memory graph of movies, series and viewers, with similarity
//! scoring, recommendations, trending items and attribute clusters.
//!
//! ## Quick Start
//!
//! ```rust
//! use showgraph::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(Vertex::movie(
//!     "tt0114709",
//!     Item::new("Toy Story", 8.3, 1995).with_genres(["Animation", "Comedy"]),
//! ));
//! graph.add_vertex(Vertex::movie(
//!     "tt0120363",
//!     Item::new("Toy Story 2", 7.9, 1999).with_genres(["Animation", "Comedy"]),
//! ));
//! graph.add_viewer("u1");
//! graph.connect("u1", "tt0114709").unwrap();
//!
//! let recommendations = Recommender::new(&graph)
//!     .recommend(&Anchor::Title("Toy Story".to_string()), 5, ScoreKind::Genre)
//!     .unwrap();
//! assert_eq!(recommendations[0].title, "Toy Story 2");
//!
//! let trending = TrendingAnalyzer::new(&graph).trending_titles();
//! assert_eq!(trending, vec!["Toy Story"]);
//! ```
//!
//! ## Crate Structure
//!
//! showgraph is composed of several crates:
//!
//! - `showgraph-core` - Vertices, the graph arena, scoring, charts and export
//! - `showgraph-analysis` - Recommendations, trending items and clusters
//! - `showgraph-loader` - Threshold-edge loading and synthetic watch history

// Re-export core types
pub use showgraph_core::{
    Attribute, AttributeValue, ChartSeries, Error, GraphConfig, GraphExport, Graph, Item,
    ItemKind, ItemRecord, Result, ScoreKind, Vertex, VertexId, VertexKind,
};

// Re-export analysis
pub use showgraph_analysis::{
    cluster_graph, Anchor, ClusterBuilder, ProfileQuery, RatingBand, Recommendation,
    Recommender, TrendingAnalyzer, TrendingItem, TRENDING_ROUNDS,
};

// Re-export loading
pub use showgraph_loader::{GraphLoader, LoadStats, LoaderConfig, SyntheticWatchHistory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        cluster_graph, Anchor, Attribute, Error, Graph, GraphLoader, Item, ItemKind, ItemRecord,
        LoaderConfig, ProfileQuery, RatingBand, Recommender, Result, ScoreKind,
        SyntheticWatchHistory, TrendingAnalyzer, Vertex, VertexId, VertexKind,
    };
}

/// Pairwise similarity heuristics
pub mod score {
    pub use showgraph_core::score::{
        age_similarity, composite_similarity, content_rating_similarity, genre_similarity,
        rating_similarity,
    };
}
