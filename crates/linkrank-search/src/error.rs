//! Error type for the search layer

use linkrank_corpus::CorpusError;
use linkrank_engine::EngineError;
use thiserror::Error;

/// Failures surfaced by the search layer.
///
/// The variants keep the two input-error classes apart: `Corpus` and
/// `MissingDocumentId` are corpus-authoring mistakes, `Engine` is an
/// internal invariant violation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed registry or edge-list input.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// The authority computation hit an inconsistent graph.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A retrieved document's body does not start with its id, so it cannot
    /// be joined with authority scores.
    #[error("document body does not start with a document id (first line {first_line:?})")]
    MissingDocumentId { first_line: String },

    /// The external retrieval engine failed.
    #[error("relevance provider failed")]
    Provider(#[source] anyhow::Error),
}
