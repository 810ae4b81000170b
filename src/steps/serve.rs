//! Local preview servers.
//!
//! Both servers run attached to the terminal until the user stops them. The
//! browser is opened right after the server process starts.

use crate::config::{ServeConfig, DEFAULT_PORT};
use crate::error::{HomotypusError, Result};
use crate::requirements::MarkupPaths;
use crate::shell::{display_command, execute_attached, local_url, open_browser};
use crate::tools::ExternalTool;
use crate::ui::UserInterface;

use super::arg;
use super::markup::markup_args;

/// How to run a preview server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeOptions {
    /// TCP port to listen on.
    pub port: u16,
    /// Open the site in a browser once the server is up.
    pub open_browser: bool,
    /// Ask the generator for verbose output.
    pub debug: bool,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
            debug: false,
        }
    }
}

impl ServeOptions {
    /// Options from configuration, without debug output.
    pub fn from_config(config: &ServeConfig) -> Self {
        Self {
            port: config.port,
            open_browser: config.open_browser,
            debug: false,
        }
    }
}

/// Arguments for the generator's own listening server.
pub fn generator_serve_args(paths: &MarkupPaths, options: &ServeOptions) -> Vec<String> {
    let mut args = markup_args(paths);
    args.push("--port".to_string());
    args.push(options.port.to_string());
    args.push("--listen".to_string());
    if options.debug {
        args.push("--debug".to_string());
    }
    args
}

/// Arguments for a static file server rooted at the output directory.
pub fn server_args(paths: &MarkupPaths, options: &ServeOptions) -> Vec<String> {
    vec![
        options.port.to_string(),
        "--bind".to_string(),
        "localhost".to_string(),
        "--directory".to_string(),
        arg(&paths.output_dir),
    ]
}

/// Regenerate and serve the site with the markup generator.
pub fn serve_with_generator(
    paths: &MarkupPaths,
    tool: &ExternalTool,
    options: &ServeOptions,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Serving Pelican site using {}...", tool.label()));
    run_server(tool, generator_serve_args(paths, options), options, ui)
}

/// Serve the already generated output directory.
pub fn serve_with_server(
    paths: &MarkupPaths,
    tool: &ExternalTool,
    options: &ServeOptions,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Serving Pelican site using {}...", tool.label()));
    run_server(tool, server_args(paths, options), options, ui)
}

fn run_server(
    tool: &ExternalTool,
    args: Vec<String>,
    options: &ServeOptions,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let argv = tool.argv(args);
    let url = local_url(options.port);
    let mut browser_error = None;

    let result = execute_attached(&argv, || {
        if options.open_browser {
            browser_error = open_browser(&url).err();
        }
    })?;

    if let Some(e) = browser_error {
        tracing::debug!("Opening {} failed: {}", url, e);
        ui.warning(&format!("Could not open a browser; the site is at {}", url));
    }

    ui.message("Server stopped");

    if result.success {
        Ok(())
    } else {
        Err(HomotypusError::CommandFailed {
            command: display_command(&argv),
            code: result.exit_code,
        })
    }
}
