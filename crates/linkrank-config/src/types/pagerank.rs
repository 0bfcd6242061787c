//! PageRank solver configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{validate_range, Validate};

/// Settings for the PageRank power iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of following an outbound link rather than jumping to a
    /// random document. 0.85 is the classic choice.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Requested iteration count. The solver runs one extra pass on top of
    /// this; see the engine's `EXTRA_PASSES` constant. May be 0.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            iterations: default_iterations(),
        }
    }
}

impl Validate for PageRankConfig {
    fn validate(&self) -> Result<()> {
        validate_range("pagerank.damping", self.damping, 0.0, 1.0)
    }
}

fn default_damping() -> f64 {
    0.85
}

fn default_iterations() -> usize {
    // Corpora here are small and bounded; a fixed pass count stands in for a
    // convergence check.
    30
}
