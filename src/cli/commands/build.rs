//! Build command implementation.
//!
//! Every subcommand runs through here: load configuration, derive and
//! resolve the plan, validate, show the paths, then execute.

use std::path::{Path, PathBuf};

use crate::cli::args::ServeArgs;
use crate::config::{load_config, ProjectConfig};
use crate::error::{HomotypusError, Result};
use crate::mode::BuildMode;
use crate::plan::BuildPlan;
use crate::steps::ServeOptions;
use crate::ui::UserInterface;

use super::dispatcher::{
    Command, CommandResult, EXIT_EXECUTION_FAILED, EXIT_VALIDATION_FAILED,
};
use super::display::show_path_table;

/// Runs one build mode against a project.
pub struct BuildCommand {
    project_root: PathBuf,
    mode: BuildMode,
    config_path: Option<PathBuf>,
    serve_args: Option<ServeArgs>,
    debug: bool,
}

impl BuildCommand {
    /// Create a build command for `mode`.
    pub fn new(project_root: &Path, mode: BuildMode) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            mode,
            config_path: None,
            serve_args: None,
            debug: false,
        }
    }

    /// Use an explicit config file instead of the project's `homotypus.yml`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Overrides for the serve modes.
    pub fn with_serve_args(mut self, args: Option<ServeArgs>) -> Self {
        self.serve_args = args;
        self
    }

    /// Pass debug output through to the generator's server.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Serve options: CLI flags over config over defaults.
    fn serve_options(&self, config: &ProjectConfig) -> ServeOptions {
        let mut options = ServeOptions::from_config(&config.serve);
        options.debug = self.debug;
        if let Some(args) = &self.serve_args {
            if let Some(port) = args.port {
                options.port = port;
            }
            if args.no_browser {
                options.open_browser = false;
            }
        }
        options
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        if ui.is_interactive() {
            ui.show_header(&config.project_name);
        }
        ui.message(&format!("Running in \"{}\" mode", self.mode));
        ui.message("");

        let plan = match BuildPlan::new(self.mode).resolve(&self.project_root, &config) {
            Ok(plan) => plan,
            Err(e @ HomotypusError::ProjectRootMissing { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_VALIDATION_FAILED));
            }
            Err(e) => return Err(e),
        };

        let outcome = plan.validate(ui);
        if let Err(e) = outcome.into_result() {
            tracing::debug!("Stopping before execution: {}", e);
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(EXIT_VALIDATION_FAILED));
        }
        if plan.requirements().invokes_any_tool() {
            ui.message("");
        }

        show_path_table(ui, "Pelican arguments", &plan.markup_rows());
        show_path_table(ui, "Sass arguments", &plan.style_rows());

        if let Err(e) = plan.execute(&self.serve_options(&config), ui) {
            tracing::debug!("Execution failed: {}", e);
            ui.error("Could not finish successfully");
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(EXIT_EXECUTION_FAILED));
        }

        ui.message("");
        ui.message("Finished");
        Ok(CommandResult::success())
    }
}
