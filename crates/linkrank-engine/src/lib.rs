//! PageRank authority scoring
//!
//! Consumes a built [`linkrank_graph::LinkGraph`] and produces a frozen
//! [`ScoreTable`] via a fixed number of synchronous power-iteration passes.

pub mod pagerank;
pub mod scores;

pub use pagerank::{EngineError, PageRankEngine};
pub use scores::ScoreTable;
