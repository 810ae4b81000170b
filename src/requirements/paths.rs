//! Path sets.
//!
//! Every path a run can touch, resolved once against the project root. Which
//! of them are checked or displayed is decided by
//! [`Requirements`](super::Requirements), not here.

use std::path::{Path, PathBuf};

use crate::config::Layout;
use crate::error::{HomotypusError, Result};

pub const CONTENT_DIR_LABEL: &str = "Content directory";
pub const SETTINGS_FILE_LABEL: &str = "Settings file";
pub const OUTPUT_DIR_LABEL: &str = "Output directory";
pub const STYLE_INPUT_LABEL: &str = "Input source file";
pub const STYLE_OUTPUT_LABEL: &str = "Output file";

/// Markup generator paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupPaths {
    pub content_dir: PathBuf,
    pub settings_file: PathBuf,
    pub output_dir: PathBuf,
}

impl MarkupPaths {
    /// Labelled rows for display, inputs first.
    pub fn rows(&self, want_input: bool, want_output: bool) -> Vec<(&'static str, &Path)> {
        let mut rows = Vec::new();
        if want_input {
            rows.push((CONTENT_DIR_LABEL, self.content_dir.as_path()));
            rows.push((SETTINGS_FILE_LABEL, self.settings_file.as_path()));
        }
        if want_output {
            rows.push((OUTPUT_DIR_LABEL, self.output_dir.as_path()));
        }
        rows
    }
}

/// Style compiler paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePaths {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl StylePaths {
    /// Labelled rows for display, input first.
    pub fn rows(&self, want_input: bool, want_output: bool) -> Vec<(&'static str, &Path)> {
        let mut rows = Vec::new();
        if want_input {
            rows.push((STYLE_INPUT_LABEL, self.input_file.as_path()));
        }
        if want_output {
            rows.push((STYLE_OUTPUT_LABEL, self.output_file.as_path()));
        }
        rows
    }
}

/// All paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    pub root: PathBuf,
    pub markup: MarkupPaths,
    pub style: StylePaths,
}

impl PathSet {
    /// Resolve `layout` against `root`.
    ///
    /// `root` must be an existing directory; it is made absolute without
    /// resolving symlinks.
    pub fn resolve(root: &Path, layout: &Layout) -> Result<Self> {
        if !root.is_dir() {
            return Err(HomotypusError::ProjectRootMissing {
                path: root.to_path_buf(),
            });
        }

        let root = std::path::absolute(root)?;
        let at = |rel: &Path| root.join(rel);

        Ok(Self {
            markup: MarkupPaths {
                content_dir: at(&layout.content_dir),
                settings_file: at(&layout.settings_file),
                output_dir: at(&layout.output_dir),
            },
            style: StylePaths {
                input_file: at(&layout.style_input),
                output_file: at(&layout.style_output),
            },
            root,
        })
    }
}
