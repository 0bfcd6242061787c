//! Frozen authority score snapshots

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use linkrank_corpus::DocumentId;
use serde::{Deserialize, Serialize};

/// PageRank authority scores for one corpus snapshot.
///
/// Scores stay in the raw "expected visits" scale; they are not normalized
/// to sum to 1. The table is frozen once the engine hands it out; consumers
/// only read. Looking up an id the table has never seen yields 0.0 —
/// absence is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    scores: BTreeMap<DocumentId, f64>,
}

impl ScoreTable {
    /// Authority score of `id`, or 0.0 if unknown.
    pub fn get(&self, id: DocumentId) -> f64 {
        self.scores.get(&id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.scores.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// All entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, f64)> + '_ {
        self.scores.iter().map(|(&id, &score)| (id, score))
    }

    /// All entries sorted by score descending; equal scores order by
    /// ascending id.
    pub fn export(&self) -> Vec<(DocumentId, f64)> {
        self.iter()
            .sorted_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect()
    }

    /// Persist the table as a binary snapshot.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create score snapshot at {}", path.display()))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .context("failed to serialize score snapshot")
    }

    /// Load a previously saved snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open score snapshot at {}", path.display()))?;
        bincode::deserialize_from(BufReader::new(file)).context("failed to deserialize score snapshot")
    }
}

impl FromIterator<(DocumentId, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (DocumentId, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}
