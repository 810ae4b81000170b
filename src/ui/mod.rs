//! User-facing output.
//!
//! Nothing in this crate prints through a global logger. `main` builds one
//! [`UserInterface`] per run and passes it down as `&mut dyn UserInterface`;
//! [`UserInterface::finish`] flushes it before the process exits.
//!
//! - [`TerminalUI`] for interactive terminals (colours, spinners)
//! - [`NonInteractiveUI`] for logs and CI (timestamped lines)
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use homotypus::ui::{create_ui, OutputMode, UserInterface};
//!
//! let mut ui = create_ui(false, OutputMode::Silent);
//! ui.message("Running in \"site\" mode");
//! ui.finish();
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::{format_log_line, Level, NonInteractiveUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display one line of an external tool's output.
    fn command_output(&mut self, line: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Flush buffered output. Called once at the end of a run.
    fn finish(&mut self);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop the spinner and erase it.
    fn finish_and_clear(&mut self);
}
