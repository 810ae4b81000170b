//! Tool availability probes.
//!
//! A tool is available when `<command> --version` starts, exits zero and
//! prints valid UTF-8. Anything else (not on PATH, not executable, non-zero
//! exit) means unavailable.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HomotypusError, Result};
use crate::shell::execute;
use crate::tools::ExternalTool;

/// Dotted version number, e.g. `4.8.0` or `1.69.5`.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("VERSION_REGEX must compile"));

/// Run the version probe and return the tool's trimmed output.
pub fn probe_version(tool: &ExternalTool) -> Result<String> {
    let argv = tool.version_argv();
    let unavailable = || HomotypusError::ToolUnavailable {
        tool: tool.label().to_string(),
    };

    let result = execute(&argv).map_err(|_| unavailable())?;
    if !result.success {
        tracing::debug!(
            "{} --version exited with {:?}",
            tool.label(),
            result.exit_code
        );
        return Err(unavailable());
    }

    // Lossy decoding marks invalid bytes with U+FFFD.
    if result.stdout.contains(char::REPLACEMENT_CHARACTER) {
        tracing::debug!("{} --version printed undecodable output", tool.label());
        return Err(unavailable());
    }

    // Some tools report their version on stderr.
    let output = if result.stdout.trim().is_empty() {
        result.stderr.trim()
    } else {
        result.stdout.trim()
    };
    Ok(output.to_string())
}

/// Extract a dotted version number from version output.
pub fn extract_version(output: &str) -> Option<&str> {
    VERSION_REGEX.find(output).map(|m| m.as_str())
}

/// Short description of version output for display.
///
/// Prefers the version number; falls back to the first line.
pub fn describe_version(output: &str) -> String {
    extract_version(output)
        .or_else(|| output.lines().next())
        .unwrap_or_default()
        .to_string()
}
