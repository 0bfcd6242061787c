//! Search/merge configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{validate_at_least, validate_non_negative, Validate};

/// Settings for the final merge of relevance and authority scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results returned per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Weight applied to the authority score before adding it to the
    /// relevance score. 0 disables the authority signal entirely.
    #[serde(default = "default_pagerank_weight")]
    pub pagerank_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            pagerank_weight: default_pagerank_weight(),
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validate_at_least("search.top_k", self.top_k, 1)?;
        validate_non_negative("search.pagerank_weight", self.pagerank_weight)?;
        Ok(())
    }
}

fn default_top_k() -> usize {
    10
}

fn default_pagerank_weight() -> f64 {
    1.0
}
