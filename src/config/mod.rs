//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use homotypus::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("homotypus.yml"), "serve:\n  port: 9000\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.serve.port, 9000);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILENAME};
pub use schema::{Layout, OutputMode, ProjectConfig, ServeConfig, ToolsConfig, DEFAULT_PORT};
