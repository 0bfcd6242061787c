//! The id -> url registry (`url.tsv`)

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{CorpusError, Result};
use crate::{parse, DocumentId, REGISTRY_FILE};

/// Mapping of document id to source url for one corpus snapshot.
///
/// The registry defines the set of ids known to the snapshot. The PageRank
/// prior covers exactly this set (plus any extra ids that only appear as edge
/// endpoints, which the graph accepts without a registry entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    urls: BTreeMap<DocumentId, String>,
}

impl Registry {
    /// Parse registry records from a reader. `name` labels errors (usually
    /// the file path).
    ///
    /// Records are whitespace-separated `<id> <url>` pairs, one per line.
    /// Blank lines are skipped; anything else that does not match the shape
    /// aborts with a [`CorpusError::MalformedRecord`].
    pub fn from_reader(reader: impl BufRead, name: &str) -> Result<Self> {
        let mut urls = BTreeMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| CorpusError::Io {
                name: name.to_string(),
                source,
            })?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(id), Some(url), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(parse::malformed(name, line_no, &line, "expected `<id> <url>`"));
            };
            let id = parse::doc_id(id, name, line_no, &line)?;
            urls.insert(id, url.to_string());
        }
        debug!(records = urls.len(), "loaded corpus registry");
        Ok(Self { urls })
    }

    /// Load the conventional `url.tsv` under a corpus directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(REGISTRY_FILE);
        let name = path.display().to_string();
        let file = File::open(&path).map_err(|source| CorpusError::Io {
            name: name.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &name)
    }

    pub fn url(&self, id: DocumentId) -> Option<&str> {
        self.urls.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.urls.contains_key(&id)
    }

    /// All registered ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.urls.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
