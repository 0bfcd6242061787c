//! The power-iteration PageRank solver

use std::collections::BTreeMap;

use linkrank_config::PageRankConfig;
use linkrank_corpus::DocumentId;
use linkrank_graph::LinkGraph;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::scores::ScoreTable;

/// Engine-internal invariant violations.
///
/// Distinct from corpus-authoring mistakes (`CorpusError`): hitting one of
/// these means the graph the engine was handed is inconsistent, not that the
/// input files were bad.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A reverse edge names a source with no forward entry, which would mean
    /// dividing by a zero out-degree.
    #[error(
        "link graph inconsistency: document {0} is an inbound source but has no outbound links"
    )]
    ZeroOutDegree(DocumentId),
}

/// PageRank over the random-surfer model.
///
/// Fixed pass count, no convergence early-exit: corpora here are small and
/// bounded, so simplicity wins over adaptivity. Either all passes complete
/// or the computation fails as a whole; there is no partial state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankEngine {
    pub damping: f64,
    pub iterations: usize,
}

impl PageRankEngine {
    /// Passes run on top of the requested iteration count.
    ///
    /// The scoring this system inherited is defined in terms of
    /// `iterations + 1` passes; the extra pass is a load-bearing convention,
    /// not an accident to fix, since removing it would shift every score.
    pub const EXTRA_PASSES: usize = 1;

    pub fn new(damping: f64, iterations: usize) -> Self {
        Self {
            damping,
            iterations,
        }
    }

    pub fn from_config(config: &PageRankConfig) -> Self {
        Self::new(config.damping, config.iterations)
    }

    /// Number of passes actually run.
    pub fn effective_passes(&self) -> usize {
        self.iterations + Self::EXTRA_PASSES
    }

    /// Run the iteration and return the frozen score table.
    ///
    /// Every id in `graph.all_ids()` starts at the uniform prior 1.0. Each
    /// pass reads only the previous pass's table (synchronous update); the
    /// two tables are swapped at the pass boundary, so per-node work inside
    /// a pass is order-independent and fans out across threads. Results are
    /// bit-identical across runs: node order and per-node summation order
    /// are both fixed.
    pub fn compute_scores(&self, graph: &LinkGraph) -> Result<ScoreTable, EngineError> {
        let mut current: BTreeMap<DocumentId, f64> =
            graph.all_ids().iter().map(|&id| (id, 1.0)).collect();

        for pass in 0..self.effective_passes() {
            let next = current
                .par_iter()
                .map(|(&id, _)| Ok((id, self.next_score(graph, &current, id)?)))
                .collect::<Result<BTreeMap<_, _>, EngineError>>()?;
            current = next;
            debug!(pass, nodes = current.len(), "completed pagerank pass");
        }

        Ok(current.into_iter().collect())
    }

    /// Score of `id` for the next pass, from the previous pass's table.
    ///
    /// A node with no inbound links keeps the base term `1 - damping` alone.
    fn next_score(
        &self,
        graph: &LinkGraph,
        previous: &BTreeMap<DocumentId, f64>,
        id: DocumentId,
    ) -> Result<f64, EngineError> {
        let mut inbound_sum = 0.0;
        for source in graph.inbound_of(id) {
            let out_degree = graph.out_degree(source);
            if out_degree == 0 {
                return Err(EngineError::ZeroOutDegree(source));
            }
            let source_score = previous.get(&source).copied().unwrap_or(0.0);
            inbound_sum += source_score / out_degree as f64;
        }
        Ok((1.0 - self.damping) + self.damping * inbound_sum)
    }
}

impl Default for PageRankEngine {
    fn default() -> Self {
        Self::from_config(&PageRankConfig::default())
    }
}
