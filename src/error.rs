//! Error types for homotypus operations.
//!
//! This module defines [`HomotypusError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation problems are collected into a
//!   [`ValidationOutcome`](crate::requirements::ValidationOutcome) first and
//!   only become a [`HomotypusError::ValidationFailed`] once all of them have
//!   been reported
//! - Execution problems (a tool exiting non-zero, a failed removal) abort the
//!   run immediately
//! - Unexpected I/O failures carry `anyhow` context and surface as
//!   [`HomotypusError::Other`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for homotypus operations.
#[derive(Debug, Error)]
pub enum HomotypusError {
    /// The directory the build was asked to run in does not exist.
    #[error("No such directory [{path}] exists")]
    ProjectRootMissing { path: PathBuf },

    /// Explicitly requested configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A required input or output path is absent.
    #[error("The expected {role} [{path}] does not exist")]
    PathMissing { role: String, path: PathBuf },

    /// An external tool could not be called.
    #[error("Could not call {tool}")]
    ToolUnavailable { tool: String },

    /// One or more requirement checks failed.
    #[error("Validation failed with {failures} problem(s)")]
    ValidationFailed { failures: usize },

    /// An external command failed to start or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A generated artifact could not be removed.
    #[error("Could not remove {what} [{path}]: {source}")]
    RemoveFailed {
        what: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for homotypus operations.
pub type Result<T> = std::result::Result<T, HomotypusError>;
