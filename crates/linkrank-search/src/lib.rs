//! Final ranking: merge external relevance with PageRank authority
//!
//! The retrieval engine itself (inverted index, TF-IDF) is an external
//! collaborator behind [`RelevanceProvider`]; this crate joins its ranked
//! output with a frozen [`linkrank_engine::ScoreTable`] and produces the
//! user-facing top-K list.

pub mod document;
pub mod error;
pub mod merger;
pub mod orchestrator;

pub use document::Document;
pub use error::SearchError;
pub use merger::{merge, RankedEntry};
pub use orchestrator::{RelevanceProvider, SearchOrchestrator};

use std::path::Path;

use linkrank_corpus::{load_link_records, LinkRecord, Registry};
use linkrank_engine::{PageRankEngine, ScoreTable};
use linkrank_graph::LinkGraph;
use tracing::info;

/// Build the link graph from parsed corpus records and compute authority
/// scores.
pub fn compute_authority(
    registry: &Registry,
    edges: impl IntoIterator<Item = LinkRecord>,
    engine: &PageRankEngine,
) -> Result<ScoreTable, SearchError> {
    let graph = LinkGraph::build(edges, registry.ids());
    let scores = engine.compute_scores(&graph)?;
    info!(
        documents = scores.len(),
        passes = engine.effective_passes(),
        "computed authority scores"
    );
    Ok(scores)
}

/// Load the conventional corpus files under `dir` and compute authority
/// scores in one step.
pub fn authority_from_dir(dir: &Path, engine: &PageRankEngine) -> Result<ScoreTable, SearchError> {
    let registry = Registry::load(dir)?;
    let edges = load_link_records(dir)?;
    compute_authority(&registry, edges, engine)
}
