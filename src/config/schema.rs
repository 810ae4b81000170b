//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the optional
//! `homotypus.yml` project file. Every field has a default, so an empty
//! (or absent) file describes the stock Homotypus layout.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Root configuration structure for `homotypus.yml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Site name shown in the banner.
    pub project_name: String,

    /// Where inputs and outputs live, relative to the project root.
    pub layout: Layout,

    /// Command prefixes for the external tools.
    pub tools: ToolsConfig,

    /// Defaults for the serve subcommands.
    pub serve: ServeConfig,

    /// Default output mode: normal, quiet, silent.
    pub output: OutputMode,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: "Homotypus".to_string(),
            layout: Layout::default(),
            tools: ToolsConfig::default(),
            serve: ServeConfig::default(),
            output: OutputMode::Normal,
        }
    }
}

/// Project layout.
///
/// Relative paths are resolved against the project root; absolute paths are
/// used as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Markup generator content directory.
    pub content_dir: PathBuf,

    /// Markup generator settings file.
    pub settings_file: PathBuf,

    /// Markup generator output directory.
    pub output_dir: PathBuf,

    /// Style compiler source file.
    pub style_input: PathBuf,

    /// Compiled stylesheet.
    pub style_output: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            settings_file: PathBuf::from("settings.py"),
            output_dir: PathBuf::from("output"),
            style_input: Path::new("extra").join("homotypus.scss"),
            style_output: Path::new("theme")
                .join("static")
                .join("css")
                .join("homotypus.css"),
        }
    }
}

/// Command prefixes for the external tools.
///
/// Each is an argv prefix rather than a single program name so that a tool
/// can be reached through a launcher (`cmd /C sass`, `python -m http.server`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Markup generator.
    pub markup: Vec<String>,

    /// Style compiler.
    pub style: Vec<String>,

    /// Local static file server.
    pub server: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            markup: vec!["pelican".to_string()],
            style: default_style_command(),
            server: vec![
                "python".to_string(),
                "-m".to_string(),
                "http.server".to_string(),
            ],
        }
    }
}

/// Sass ships as a batch script on Windows, which must go through `cmd`.
fn default_style_command() -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec!["cmd".to_string(), "/C".to_string(), "sass".to_string()]
    } else {
        vec!["sass".to_string()]
    }
}

/// Defaults for the serve subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// Port used when `--port` is not given.
    pub port: u16,

    /// Open a browser tab once the server is started.
    pub open_browser: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

/// Port the serve subcommands listen on by default.
pub const DEFAULT_PORT: u16 = 8000;

/// Output verbosity as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Show everything, including tool output.
    #[default]
    Normal,
    /// Show status lines only.
    Quiet,
    /// Show errors only.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}
