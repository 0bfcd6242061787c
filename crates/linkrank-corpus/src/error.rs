//! Error types for corpus ingestion

use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors raised while reading corpus boundary files.
///
/// Both variants are fatal: ingestion aborts on the first bad record, there
/// are no partial results. `MalformedRecord` identifies corpus-authoring
/// mistakes, as opposed to engine-internal invariant violations which live in
/// the engine crate.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Underlying reader failure while streaming records.
    #[error("failed to read {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A line that does not match the expected record shape.
    #[error("{name}:{line}: malformed record {content:?}: {reason}")]
    MalformedRecord {
        name: String,
        line: usize,
        content: String,
        reason: String,
    },
}
