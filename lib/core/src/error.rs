use thiserror::Error;

use crate::vertex::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("Vertex cannot be connected to itself: {0}")]
    SelfLoop(VertexId),

    #[error("Vertex is not a movie or series: {0}")]
    NotAnItem(VertexId),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Capacity exceeded: limit is {capacity}, got {requested}")]
    CapacityExceeded { capacity: usize, requested: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
