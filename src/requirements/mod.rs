//! Requirement resolution and validation.
//!
//! Given a [`BuildMode`](crate::mode::BuildMode), this module decides which
//! paths and external tools a run needs, checks them, and reports every
//! problem before any build step starts.
//!
//! # Modules
//!
//! - [`table`] - The declarative mode-to-requirement table
//! - [`paths`] - Named path sets resolved against the project root
//! - [`status`] - Check results and the aggregated validation outcome
//! - [`probe`] - `--version` probes for external tools
//! - [`checker`] - Runs the checks a mode asks for

pub mod checker;
pub mod paths;
pub mod probe;
pub mod status;
pub mod table;

pub use checker::RequirementChecker;
pub use paths::{MarkupPaths, PathSet, StylePaths};
pub use probe::{describe_version, extract_version, probe_version};
pub use status::{Check, CheckSubject, PathKind, ValidationOutcome};
pub use table::{requirements_for, Requirements, MODE_REQUIREMENTS};
