//! Error types for ugraph-core.
//!
//! The structural surfaces of [`Graph`](crate::Graph) and
//! [`GraphAlgorithms`](crate::GraphAlgorithms) report bad input through
//! sentinel return values (`false`, `None`, empty collections). The variants
//! here cover configuration and the opt-in `try_*` helpers only.

use thiserror::Error;

/// ugraph error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration layers could not be merged or extracted.
    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] Box<figment::Error>),

    /// Edge weight is negative, NaN or infinite.
    #[error("Invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    /// An endpoint of the requested edge is not in the graph.
    #[error("Node {0} not found")]
    NodeNotFound(u64),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

/// Result type alias for ugraph operations.
pub type Result<T> = std::result::Result<T, Error>;
