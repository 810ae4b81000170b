//! Check results.
//!
//! Each path or tool check produces a [`Check`]. Checks are accumulated in a
//! [`ValidationOutcome`] so every problem is reported together instead of
//! stopping at the first one.

use std::path::{Path, PathBuf};

use crate::error::{HomotypusError, Result};
use crate::ui::UserInterface;

/// Which filesystem predicate a path check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

impl PathKind {
    /// Whether `path` exists as this kind.
    pub fn exists(&self, path: &Path) -> bool {
        match self {
            PathKind::Directory => path.is_dir(),
            PathKind::File => path.is_file(),
        }
    }
}

/// What a check was about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckSubject {
    /// A filesystem path that must exist.
    Path { kind: PathKind, path: PathBuf },
    /// An external tool that must answer `--version`.
    Tool { label: String },
}

/// The result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub subject: CheckSubject,
    pub passed: bool,
    /// Diagnostic lines, reported only when the check failed.
    pub messages: Vec<String>,
}

impl Check {
    /// A passing check.
    pub fn pass(subject: CheckSubject) -> Self {
        Self {
            subject,
            passed: true,
            messages: Vec::new(),
        }
    }

    /// A failing check with its diagnostic lines.
    pub fn fail(subject: CheckSubject, messages: Vec<String>) -> Self {
        Self {
            subject,
            passed: false,
            messages,
        }
    }

    /// Check that `path` exists as `kind`. `messages` are kept for failure.
    pub fn path(kind: PathKind, path: &Path, messages: Vec<String>) -> Self {
        let subject = CheckSubject::Path {
            kind,
            path: path.to_path_buf(),
        };
        if kind.exists(path) {
            Self::pass(subject)
        } else {
            Self::fail(subject, messages)
        }
    }
}

/// All checks for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    checks: Vec<Check>,
}

impl ValidationOutcome {
    /// Create an empty outcome. An empty outcome passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check.
    pub fn push(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Add several checks.
    pub fn extend(&mut self, checks: impl IntoIterator<Item = Check>) {
        self.checks.extend(checks);
    }

    /// Every check, in the order performed.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True only if every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Failed checks, in order.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Report every failing check's messages as errors.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        for check in self.failures() {
            for msg in &check.messages {
                ui.error(msg);
            }
        }
    }

    /// Convert to a `Result`, failing if any check failed.
    pub fn into_result(self) -> Result<()> {
        match self.failure_count() {
            0 => Ok(()),
            failures => Err(HomotypusError::ValidationFailed { failures }),
        }
    }
}
