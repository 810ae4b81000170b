//! Homotypus - Build helper for a Pelican + Sass website.
//!
//! Homotypus wraps the Pelican static-site generator and the Sass compiler.
//! Each subcommand selects a [`BuildMode`](mode::BuildMode); the mode decides
//! which paths must exist and which tools must answer before anything runs,
//! so a misconfigured project fails with a clear message instead of a
//! half-finished build.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `homotypus.yml` project configuration
//! - [`error`] - Error types and result aliases
//! - [`mode`] - Build modes
//! - [`plan`] - Per-run plan: requirements, resolved paths, validation
//! - [`requirements`] - Requirement table, path and tool checks
//! - [`shell`] - External command execution
//! - [`steps`] - Build, clean and serve steps
//! - [`tools`] - External tool descriptions
//! - [`ui`] - Terminal and log-style output
//!
//! # Example
//!
//! ```
//! use homotypus::mode::BuildMode;
//!
//! let req = BuildMode::Clean.requirements();
//! assert!(!req.invokes_any_tool());
//!
//! let req = BuildMode::Html.requirements();
//! assert!(req.markup_invoke && req.style_output);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mode;
pub mod plan;
pub mod requirements;
pub mod shell;
pub mod steps;
pub mod tools;
pub mod ui;

pub use error::{HomotypusError, Result};
