//! # showgraph Loader
//!
//! Turns item records, viewer ids and watch edges into a populated
//! [`showgraph_core::Graph`]. Similarity edges among items are scored in
//! parallel and applied in a fixed order, so a load is reproducible.
//!
//! When no real viewing data is available, [`SyntheticWatchHistory`] draws
//! seeded viewer-item edges instead.

pub mod config;
pub mod loader;
pub mod synthetic;

pub use config::LoaderConfig;
pub use loader::{GraphLoader, LoadStats};
pub use synthetic::SyntheticWatchHistory;
