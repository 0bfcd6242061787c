//! Configuration management for linkrank
//!
//! Validated, type-safe configuration for the PageRank solver and the
//! search/merge step, loadable from TOML, YAML, or JSON:
//!
//! ```no_run
//! use linkrank_config::Config;
//!
//! // Load from the default location (.linkrank.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or from a specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let damping = config.pagerank.damping;
//! let top_k = config.search.top_k;
//! # Ok::<(), linkrank_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use types::{Config, PageRankConfig, SearchConfig};
pub use validation::Validate;
