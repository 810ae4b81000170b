//! Log-style UI for CI, pipes and `--log`.
//!
//! Every line is stamped like
//! `Thu 28 Mar 2019 13:23:28 [    INFO] Running in "site" mode`, which keeps
//! captured build logs readable after the fact.

use chrono::{Local, NaiveDateTime};
use std::io::{self, Write};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Timestamp layout, e.g. `Thu 28 Mar 2019 13:23:28`.
const TIMESTAMP_FORMAT: &str = "%a %d %b %Y %H:%M:%S";

/// Severity shown in a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// Format one log line. Blank messages stay blank.
pub fn format_log_line(level: Level, msg: &str, at: &NaiveDateTime) -> String {
    if msg.is_empty() {
        return String::new();
    }
    format!(
        "{} [{:>8}] {}",
        at.format(TIMESTAMP_FORMAT),
        level.as_str(),
        msg
    )
}

/// UI implementation for non-interactive output.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn log(&self, level: Level, msg: &str) {
        let line = format_log_line(level, msg, &Local::now().naive_local());
        match level {
            Level::Info => {
                writeln!(io::stdout().lock(), "{}", line).ok();
            }
            Level::Warning | Level::Error => {
                writeln!(io::stderr().lock(), "{}", line).ok();
            }
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.log(Level::Info, msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.log(Level::Info, msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.log(Level::Warning, msg);
        }
    }

    fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg);
    }

    fn command_output(&mut self, line: &str) {
        if self.mode.shows_command_output() {
            self.log(Level::Info, line);
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.log(Level::Info, title);
            self.log(Level::Info, "");
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn finish(&mut self) {
        io::stdout().flush().ok();
        io::stderr().flush().ok();
    }
}

/// Log output has no animation; results are reported as regular lines.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_and_clear(&mut self) {}
}
