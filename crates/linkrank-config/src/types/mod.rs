//! Configuration types, one submodule per section

mod pagerank;
mod search;

pub use pagerank::PageRankConfig;
pub use search::SearchConfig;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::Validate;

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagerank: PageRankConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.pagerank.validate()?;
        self.search.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
