//! Build steps.
//!
//! Each step drives one external tool for one job. Steps assume validation
//! already passed; they report progress through the [`UserInterface`] they
//! are handed and return an error as soon as a tool fails.
//!
//! # Modules
//!
//! - [`markup`] - Generate the HTML with the markup generator
//! - [`style`] - Compile the stylesheet with the style compiler
//! - [`clean`] - Remove generated output
//! - [`serve`] - Serve the site locally

pub mod clean;
pub mod markup;
pub mod serve;
pub mod style;

pub use clean::clean_outputs;
pub use markup::generate_markup;
pub use serve::{serve_with_generator, serve_with_server, ServeOptions};
pub use style::compile_styles;

use std::path::Path;

use crate::error::{HomotypusError, Result};
use crate::shell::{display_command, execute_streaming, OutputLine};
use crate::tools::ExternalTool;
use crate::ui::UserInterface;

/// Path as an argv element.
pub(crate) fn arg(path: &Path) -> String {
    path.display().to_string()
}

/// Run `tool` with `args`, forwarding every output line to `ui`.
///
/// Reports "<tool> finished successfully" on a zero exit; otherwise reports
/// the failure and returns [`HomotypusError::CommandFailed`].
pub(crate) fn run_streamed(
    tool: &ExternalTool,
    args: Vec<String>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let argv = tool.argv(args);
    let streamed = execute_streaming(&argv, &mut |line: OutputLine| {
        ui.command_output(line.text())
    });

    match streamed {
        Ok(result) if result.success => {
            ui.success(&format!("{} finished successfully", tool.label()));
            Ok(())
        }
        Ok(result) => {
            ui.error(&format!("{} did not finish successfully", tool.label()));
            Err(HomotypusError::CommandFailed {
                command: display_command(&argv),
                code: result.exit_code,
            })
        }
        Err(e) => {
            ui.error(&format!("{} did not finish successfully", tool.label()));
            Err(e)
        }
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::test_support::fake_tool;
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn streams_lines_and_reports_success() {
        let temp = TempDir::new().unwrap();
        let script = fake_tool(temp.path(), "tool", "echo one; echo two >&2");
        let tool = ExternalTool::new("Tool", vec![script.display().to_string()]);

        let mut ui = MockUI::new();
        run_streamed(&tool, vec![], &mut ui).unwrap();

        assert!(ui.command_output_lines().contains(&"one".to_string()));
        assert!(ui.command_output_lines().contains(&"two".to_string()));
        assert!(ui.has_success("Tool finished successfully"));
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let temp = TempDir::new().unwrap();
        let script = fake_tool(temp.path(), "tool", "exit 7");
        let tool = ExternalTool::new("Tool", vec![script.display().to_string()]);

        let mut ui = MockUI::new();
        let err = run_streamed(&tool, vec!["x".into()], &mut ui).unwrap_err();

        assert!(matches!(
            err,
            HomotypusError::CommandFailed { code: Some(7), .. }
        ));
        assert!(ui.has_error("Tool did not finish successfully"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn arguments_are_passed_verbatim() {
        let temp = TempDir::new().unwrap();
        let script = fake_tool(temp.path(), "tool", "for a in \"$@\"; do echo \"[$a]\"; done");
        let tool = ExternalTool::new("Tool", vec![script.display().to_string()]);

        let mut ui = MockUI::new();
        run_streamed(&tool, vec!["a b".into(), "--flag".into()], &mut ui).unwrap();

        assert_eq!(ui.command_output_lines(), &["[a b]", "[--flag]"]);
    }

    #[test]
    fn undecodable_line_does_not_stop_the_stream() {
        let temp = TempDir::new().unwrap();
        let script = fake_tool(
            temp.path(),
            "tool",
            "printf 'caf\\351\\n'; i=0; while [ $i -lt 20000 ]; do echo line $i; i=$((i+1)); done; exit 0",
        );
        let tool = ExternalTool::new("Tool", vec![script.display().to_string()]);

        let mut ui = MockUI::new();
        run_streamed(&tool, vec![], &mut ui).unwrap();

        let lines = ui.command_output_lines();
        assert_eq!(lines.len(), 20001);
        assert_eq!(lines[0], "caf\u{FFFD}");
        assert_eq!(lines[20000], "line 19999");
        assert!(ui.has_success("Tool finished successfully"));
        assert!(ui.errors().is_empty());
    }
}
