//! Configuration module for DDG-Search
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file behaves exactly like
//! running with an empty one.
//!
//! # Example
//!
//! ```no_run
//! use ddg_search::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("ddg-search.toml")).unwrap();
//! println!("Searching against: {}", config.search.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, SearchSettings, DEFAULT_ENDPOINT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
