//! Error types for veche-core.
//!
//! Domain-invalid graph operations (absent vertex, duplicate edge, merge
//! of unconnected vertices) are soft `bool`/`Option` returns on the graph
//! API, never errors. This enum covers the plumbing around the engine:
//! configuration loading and ingestion IO.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
