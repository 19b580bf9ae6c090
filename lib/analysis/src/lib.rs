//! # showgraph Analysis
//!
//! Read-only queries over a [`showgraph_core::Graph`]:
//!
//! - [`Recommender`] - ranked items similar to an anchor or matching a profile
//! - [`TrendingAnalyzer`] - items adjacent to the most viewers
//! - [`cluster_graph`] - equal-attribute cluster graphs
//!
//! None of these mutate the graph they are given.

pub mod cluster;
pub mod profile;
pub mod recommend;
pub mod trending;

pub use cluster::{cluster_graph, ClusterBuilder};
pub use profile::{ProfileQuery, RatingBand};
pub use recommend::{Anchor, Recommendation, Recommender};
pub use trending::{TrendingAnalyzer, TrendingItem, TRENDING_ROUNDS};
