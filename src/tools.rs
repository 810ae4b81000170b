//! External tools.
//!
//! The markup generator, style compiler and local server are opaque
//! processes. An [`ExternalTool`] is a display label plus an argv prefix;
//! callers append positional arguments and flags to build the full command.

use crate::config::ToolsConfig;

/// An external program reachable through an argv prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    label: String,
    command: Vec<String>,
}

impl ExternalTool {
    /// Create a tool from a label and command prefix.
    pub fn new(label: impl Into<String>, command: Vec<String>) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }

    /// Human-readable name used in messages ("Pelican", "Sass").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The command prefix.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Full argv: the command prefix followed by `args`.
    pub fn argv<I, S>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = self.command.clone();
        argv.extend(args.into_iter().map(Into::into));
        argv
    }

    /// Argv for the version probe.
    pub fn version_argv(&self) -> Vec<String> {
        self.argv(["--version"])
    }
}

/// The three tools a run may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    /// Static-site generator.
    pub markup: ExternalTool,
    /// CSS preprocessor.
    pub style: ExternalTool,
    /// Static file server for `serve`.
    pub server: ExternalTool,
}

impl ToolSet {
    /// Build the tool set from configuration.
    pub fn from_config(config: &ToolsConfig) -> Self {
        Self {
            markup: ExternalTool::new("Pelican", config.markup.clone()),
            style: ExternalTool::new("Sass", config.style.clone()),
            server: ExternalTool::new("Python", config.server.clone()),
        }
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::from_config(&ToolsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_appends_to_prefix() {
        let tool = ExternalTool::new(
            "Sass",
            vec!["cmd".to_string(), "/C".to_string(), "sass".to_string()],
        );
        assert_eq!(
            tool.argv(["in.scss", "out.css"]),
            vec!["cmd", "/C", "sass", "in.scss", "out.css"]
        );
    }

    #[test]
    fn version_argv_adds_flag() {
        let tool = ExternalTool::new("Pelican", vec!["pelican".to_string()]);
        assert_eq!(tool.version_argv(), vec!["pelican", "--version"]);
    }

    #[test]
    fn tool_set_uses_config_commands() {
        let config = ToolsConfig {
            markup: vec!["/opt/bin/pelican".to_string()],
            ..Default::default()
        };
        let tools = ToolSet::from_config(&config);
        assert_eq!(tools.markup.command(), ["/opt/bin/pelican"]);
        assert_eq!(tools.markup.label(), "Pelican");
        assert_eq!(tools.style.label(), "Sass");
        assert_eq!(tools.server.command()[0], "python");
    }
}
