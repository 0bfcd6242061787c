//! Wiring the external retrieval engine to the authority re-ranker

use std::collections::HashMap;

use linkrank_config::SearchConfig;
use linkrank_corpus::DocumentId;
use linkrank_engine::ScoreTable;
use tracing::debug;

use crate::document::Document;
use crate::error::SearchError;
use crate::merger;

/// Boundary trait for the external TF-IDF retrieval engine.
///
/// Implementations return documents ranked by term relevance.
/// `limit: None` means "return every match" — the orchestrator uses that to
/// obtain the full candidate pool before re-ranking.
pub trait RelevanceProvider {
    fn search(
        &self,
        terms: &[String],
        limit: Option<usize>,
    ) -> anyhow::Result<Vec<(Document, f64)>>;
}

/// Thin integration point: relevance provider in, final ranked list out.
///
/// Holds a frozen authority table computed ahead of time (see
/// [`crate::compute_authority`]).
pub struct SearchOrchestrator<P> {
    provider: P,
    authority: ScoreTable,
}

impl<P: RelevanceProvider> SearchOrchestrator<P> {
    pub fn new(provider: P, authority: ScoreTable) -> Self {
        Self {
            provider,
            authority,
        }
    }

    pub fn authority(&self) -> &ScoreTable {
        &self.authority
    }

    /// Search the corpus and return the top `top_k` documents by combined
    /// score, descending.
    ///
    /// Fetches the provider's full candidate pool, recovers each document's
    /// id from its body, and re-ranks with
    /// `relevance + pagerank_weight * authority`.
    pub fn search(
        &self,
        terms: &[String],
        top_k: usize,
        pagerank_weight: f64,
    ) -> Result<Vec<(Document, f64)>, SearchError> {
        let hits = self
            .provider
            .search(terms, None)
            .map_err(SearchError::Provider)?;
        debug!(candidates = hits.len(), "retrieved relevance candidates");

        let mut documents: HashMap<DocumentId, Document> = HashMap::with_capacity(hits.len());
        let mut relevance = Vec::with_capacity(hits.len());
        for (document, score) in hits {
            let id = document.doc_id()?;
            relevance.push((id, score));
            documents.insert(id, document);
        }

        let ranked = merger::merge(relevance, &self.authority, top_k, pagerank_weight);
        Ok(ranked
            .into_iter()
            .filter_map(|entry| {
                documents
                    .remove(&entry.doc_id)
                    .map(|document| (document, entry.score))
            })
            .collect())
    }

    /// [`SearchOrchestrator::search`] with limits and weights taken from
    /// configuration.
    pub fn search_with_config(
        &self,
        terms: &[String],
        config: &SearchConfig,
    ) -> Result<Vec<(Document, f64)>, SearchError> {
        self.search(terms, config.top_k, config.pagerank_weight)
    }
}
