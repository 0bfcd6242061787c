//! Corpus boundary ingestion
//!
//! A corpus snapshot is described by two flat, line-oriented files living in
//! the corpus directory:
//!
//! - `url.tsv` — one `<id> <url>` record per line; defines the set of ids
//!   known to the snapshot.
//! - `id-graph.tsv` — one `<from> <to>` edge per line; feeds the link graph.
//!
//! Parsing is kept separate from graph building: both files are exposed as
//! plain sequences of typed records that are consumed exactly once.

pub mod edges;
pub mod error;
mod parse;
pub mod registry;

pub use edges::{link_records, load_link_records, LinkRecord, LinkRecords};
pub use error::{CorpusError, Result};
pub use registry::Registry;

/// Identifier assigned to a document in a corpus snapshot.
///
/// Ids are opaque non-negative integers, stable for the lifetime of the
/// snapshot, and the join key across the registry, the link graph, the score
/// table, and retrieval results.
pub type DocumentId = u32;

/// File name of the id -> url registry inside a corpus directory.
pub const REGISTRY_FILE: &str = "url.tsv";

/// File name of the link edge list inside a corpus directory.
pub const LINK_FILE: &str = "id-graph.tsv";
