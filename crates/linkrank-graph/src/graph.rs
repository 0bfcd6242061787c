use std::collections::{BTreeSet, HashMap};

use linkrank_corpus::{DocumentId, LinkRecord};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::debug;

/// Immutable directed link graph between documents.
///
/// Built once from an edge-record sequence plus the registry's known ids;
/// rebuilding means constructing a fresh instance. Adjacency is index-based
/// (document ids interned to petgraph node indices), so cycles and self-loops
/// carry no ownership problems.
///
/// Duplicate `(from, to)` edges are preserved as parallel edges and count
/// multiply toward `out_degree`, matching the multi-edge PageRank
/// formulation. The reverse view exposed by [`LinkGraph::inbound_of`] is a
/// set: a duplicated inbound source appears once.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    graph: DiGraph<DocumentId, ()>,
    indices: HashMap<DocumentId, NodeIndex>,
    all_ids: BTreeSet<DocumentId>,
}

impl LinkGraph {
    /// Build the graph from parsed edge records.
    ///
    /// `known_ids` seeds the node set (isolated documents get a node even
    /// when no edge mentions them). Edges referencing ids outside
    /// `known_ids` are accepted and simply create nodes with no registry
    /// entry; callers wanting strict validation must check separately.
    pub fn build(
        edges: impl IntoIterator<Item = LinkRecord>,
        known_ids: impl IntoIterator<Item = DocumentId>,
    ) -> Self {
        let mut graph = Self::default();
        for id in known_ids {
            graph.intern(id);
        }
        for LinkRecord { from, to } in edges {
            let from = graph.intern(from);
            let to = graph.intern(to);
            graph.graph.add_edge(from, to, ());
        }
        debug!(
            nodes = graph.graph.node_count(),
            edges = graph.graph.edge_count(),
            "built link graph"
        );
        graph
    }

    fn intern(&mut self, id: DocumentId) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.indices.insert(id, idx);
        self.all_ids.insert(id);
        idx
    }

    /// Number of outbound links of `id`, counting duplicates; 0 for unknown
    /// ids.
    pub fn out_degree(&self, id: DocumentId) -> usize {
        self.indices.get(&id).map_or(0, |&idx| {
            self.graph.edges_directed(idx, Direction::Outgoing).count()
        })
    }

    /// Distinct documents linking to `id`, in ascending id order; empty for
    /// unknown ids.
    pub fn inbound_of(&self, id: DocumentId) -> BTreeSet<DocumentId> {
        let Some(&idx) = self.indices.get(&id) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n])
            .collect()
    }

    /// Outbound link targets of `id` with duplicates preserved; insertion
    /// order is not meaningful.
    pub fn outbound_of(&self, id: DocumentId) -> Vec<DocumentId> {
        let Some(&idx) = self.indices.get(&id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect()
    }

    /// Every id the graph knows about: the registry's known ids plus any id
    /// appearing as an edge endpoint.
    pub fn all_ids(&self) -> &BTreeSet<DocumentId> {
        &self.all_ids
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.indices.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
