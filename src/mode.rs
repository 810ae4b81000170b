//! Build modes.
//!
//! A [`BuildMode`] is selected once per invocation from the CLI subcommand
//! and drives every downstream decision: which paths are validated, which
//! tools are probed, and which steps run.

use std::fmt;
use std::str::FromStr;

use crate::requirements::{requirements_for, Requirements};

/// The operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Regenerate both the HTML and the CSS.
    Site,
    /// Regenerate the HTML with the markup generator.
    Html,
    /// Regenerate the CSS with the style compiler.
    Css,
    /// Remove previously generated HTML and CSS.
    Clean,
    /// Serve the site through the markup generator's own server.
    ServePelican,
    /// Serve the generated output directory with a local file server.
    Serve,
}

impl BuildMode {
    /// Every mode, in the order they are listed in `--help`.
    pub const ALL: [BuildMode; 6] = [
        BuildMode::Site,
        BuildMode::Html,
        BuildMode::Css,
        BuildMode::Clean,
        BuildMode::Serve,
        BuildMode::ServePelican,
    ];

    /// The subcommand name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            BuildMode::Site => "site",
            BuildMode::Html => "html",
            BuildMode::Css => "css",
            BuildMode::Clean => "clean",
            BuildMode::ServePelican => "serve-pelican",
            BuildMode::Serve => "serve",
        }
    }

    /// Requirement flags for this mode, looked up in the mode table.
    pub fn requirements(&self) -> Requirements {
        requirements_for(*self)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| format!("unknown build mode: {}", s))
    }
}
