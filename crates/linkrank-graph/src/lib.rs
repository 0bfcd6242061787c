//! Directed link graph over a corpus snapshot.

pub mod graph;

pub use graph::LinkGraph;
