//! Per-run build plan.
//!
//! A run moves through three stages, each its own type:
//!
//! - [`BuildPlan`]: the mode and the requirements derived from it
//! - [`ResolvedPlan`]: plus concrete paths and tools for this project
//! - [`ValidationOutcome`]: the result of checking them
//!
//! Only a `ResolvedPlan` whose validation passed should be executed.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::mode::BuildMode;
use crate::requirements::{PathSet, RequirementChecker, Requirements, ValidationOutcome};
use crate::steps::{
    clean_outputs, compile_styles, generate_markup, serve_with_generator, serve_with_server,
    ServeOptions,
};
use crate::tools::ToolSet;
use crate::ui::UserInterface;

/// A mode with its requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildPlan {
    mode: BuildMode,
    requirements: Requirements,
}

impl BuildPlan {
    /// Derive the plan for `mode`.
    pub fn new(mode: BuildMode) -> Self {
        let requirements = mode.requirements();
        tracing::debug!("Requirements for {} mode: {:?}", mode, requirements);
        Self { mode, requirements }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Resolve paths and tools against a project.
    pub fn resolve(self, root: &Path, config: &ProjectConfig) -> Result<ResolvedPlan> {
        let paths = PathSet::resolve(root, &config.layout)?;
        let tools = ToolSet::from_config(&config.tools);
        tracing::debug!("Resolved project root {}", paths.root.display());

        Ok(ResolvedPlan {
            mode: self.mode,
            requirements: self.requirements,
            paths,
            tools,
        })
    }
}

/// A plan bound to one project's paths and tools.
#[derive(Debug, Clone)]
pub struct ResolvedPlan {
    mode: BuildMode,
    requirements: Requirements,
    paths: PathSet,
    tools: ToolSet,
}

impl ResolvedPlan {
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    /// Markup paths to display, empty when the mode shows none.
    pub fn markup_rows(&self) -> Vec<(&'static str, &Path)> {
        let req = &self.requirements;
        if !req.shows_markup_paths() {
            return Vec::new();
        }
        self.paths
            .markup
            .rows(req.markup_input, req.markup_output_shown)
    }

    /// Style paths to display, empty when the mode shows none.
    pub fn style_rows(&self) -> Vec<(&'static str, &Path)> {
        let req = &self.requirements;
        if !req.shows_style_paths() {
            return Vec::new();
        }
        self.paths
            .style
            .rows(req.style_input, req.style_output_shown)
    }

    /// Check every path and tool the mode needs.
    pub fn validate(&self, ui: &mut dyn UserInterface) -> ValidationOutcome {
        let outcome =
            RequirementChecker::new(&self.paths, &self.tools).validate(&self.requirements, ui);
        tracing::debug!(
            "Validation for {} mode: {} check(s), {} failure(s)",
            self.mode,
            outcome.checks().len(),
            outcome.failure_count()
        );
        outcome
    }

    /// Run the mode's steps in order, stopping at the first failure.
    ///
    /// Earlier steps are not rolled back.
    pub fn execute(&self, options: &ServeOptions, ui: &mut dyn UserInterface) -> Result<()> {
        let markup = &self.paths.markup;
        let style = &self.paths.style;

        match self.mode {
            BuildMode::Site => {
                compile_styles(style, &self.tools.style, ui)?;
                ui.message("");
                generate_markup(markup, &self.tools.markup, ui)
            }
            BuildMode::Html => generate_markup(markup, &self.tools.markup, ui),
            BuildMode::Css => compile_styles(style, &self.tools.style, ui),
            BuildMode::Clean => clean_outputs(&self.paths, ui),
            BuildMode::ServePelican => {
                serve_with_generator(markup, &self.tools.markup, options, ui)
            }
            BuildMode::Serve => serve_with_server(markup, &self.tools.server, options, ui),
        }
    }
}
