//! Error types for ficpress operations.

use thiserror::Error;

/// Errors that can occur while transforming or rendering a work.
///
/// Every pipeline-stage failure is unrecoverable at this level: there is no
/// partial-success mode, and the message names the missing node or field so
/// a schema drift in the source export can be diagnosed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing metadata: no {field} found in document")]
    MetadataMissing { field: &'static str },

    #[error("schema mismatch: expected {expected}")]
    SchemaMismatch { expected: &'static str },

    #[error("renderer failed: {0}")]
    Renderer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
