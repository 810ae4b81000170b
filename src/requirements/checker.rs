//! Requirement checker.
//!
//! The `RequirementChecker` turns a mode's [`Requirements`] into concrete
//! checks against a resolved [`PathSet`] and [`ToolSet`]. Path checks run
//! first and are all collected; tool probes only run when every path check
//! passed, so a broken layout never starts an external process.

use std::path::Path;

use crate::error::HomotypusError;
use crate::requirements::paths::PathSet;
use crate::requirements::probe::{describe_version, probe_version};
use crate::requirements::status::{Check, CheckSubject, PathKind, ValidationOutcome};
use crate::requirements::table::Requirements;
use crate::tools::{ExternalTool, ToolSet};
use crate::ui::UserInterface;

/// Checks paths and tools for one run.
pub struct RequirementChecker<'a> {
    paths: &'a PathSet,
    tools: &'a ToolSet,
}

impl<'a> RequirementChecker<'a> {
    /// Create a checker over resolved paths and tools.
    pub fn new(paths: &'a PathSet, tools: &'a ToolSet) -> Self {
        Self { paths, tools }
    }

    /// Validate everything `requirements` asks for.
    ///
    /// Failing checks are reported through `ui` before returning.
    pub fn validate(
        &self,
        requirements: &Requirements,
        ui: &mut dyn UserInterface,
    ) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.extend(self.check_markup_paths(requirements));
        outcome.extend(self.check_style_paths(requirements));

        if outcome.passed() {
            outcome.extend(self.check_tools(requirements, ui));
        } else {
            tracing::debug!(
                "Skipping tool probes after {} path check failure(s)",
                outcome.failure_count()
            );
        }

        outcome.report(ui);
        outcome
    }

    /// Check markup generator paths.
    pub fn check_markup_paths(&self, requirements: &Requirements) -> Vec<Check> {
        let markup = &self.paths.markup;
        let mut checks = Vec::new();

        if !requirements.markup_input && !requirements.markup_output {
            tracing::debug!("No Pelican paths being checked");
            return checks;
        }

        if requirements.markup_input {
            checks.push(Check::path(
                PathKind::File,
                &markup.settings_file,
                vec![missing("Pelican settings file", &markup.settings_file)],
            ));
            checks.push(Check::path(
                PathKind::Directory,
                &markup.content_dir,
                vec![missing("Pelican content directory", &markup.content_dir)],
            ));
        }

        if requirements.markup_output {
            checks.push(Check::path(
                PathKind::Directory,
                &markup.output_dir,
                vec![
                    format!(
                        "The Pelican output directory [{}] does not exist",
                        markup.output_dir.display()
                    ),
                    "Make sure Pelican has been used to generate the site".to_string(),
                ],
            ));
        }

        checks
    }

    /// Check style compiler paths.
    pub fn check_style_paths(&self, requirements: &Requirements) -> Vec<Check> {
        let style = &self.paths.style;
        let mut checks = Vec::new();

        if !requirements.style_input && !requirements.style_output {
            tracing::debug!("No Sass paths being checked");
            return checks;
        }

        if requirements.style_input {
            checks.push(Check::path(
                PathKind::File,
                &style.input_file,
                vec![missing("Sass source file", &style.input_file)],
            ));
        }

        if requirements.style_output {
            checks.push(Check::path(
                PathKind::File,
                &style.output_file,
                vec![
                    format!(
                        "The Sass output file [{}] does not exist",
                        style.output_file.display()
                    ),
                    "Make sure Sass has been used to generate the CSS file".to_string(),
                ],
            ));
        }

        checks
    }

    /// Probe every tool the mode invokes.
    pub fn check_tools(
        &self,
        requirements: &Requirements,
        ui: &mut dyn UserInterface,
    ) -> Vec<Check> {
        let mut checks = Vec::new();
        if requirements.markup_invoke {
            checks.push(Self::check_tool(&self.tools.markup, ui));
        }
        if requirements.style_invoke {
            checks.push(Self::check_tool(&self.tools.style, ui));
        }
        checks
    }

    fn check_tool(tool: &ExternalTool, ui: &mut dyn UserInterface) -> Check {
        let subject = CheckSubject::Tool {
            label: tool.label().to_string(),
        };

        let mut spinner = ui.start_spinner(&format!("Checking {}", tool.label()));
        let probed = probe_version(tool);
        spinner.finish_and_clear();

        match probed {
            Ok(output) => {
                ui.success(&format!(
                    "Detected {} {}",
                    tool.label(),
                    describe_version(&output)
                ));
                Check::pass(subject)
            }
            Err(e) => Check::fail(subject, vec![e.to_string()]),
        }
    }
}

fn missing(role: &str, path: &Path) -> String {
    HomotypusError::PathMissing {
        role: role.to_string(),
        path: path.to_path_buf(),
    }
    .to_string()
}
