//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{HomotypusError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILENAME: &str = "homotypus.yml";

/// Path of the project config file, if one exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILENAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HomotypusError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        read => read.with_context(|| format!("Failed to read config {}", path.display()))?,
    };

    parse_config(&content, path)
}

/// Parse config content.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| HomotypusError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration for a project.
///
/// An explicit `config_override` must exist. Without one, `homotypus.yml` in
/// the project root is used when present and the defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from override {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(ProjectConfig::default())
        }
    }
}
