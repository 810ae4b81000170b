//! HTML generation.

use crate::error::Result;
use crate::requirements::MarkupPaths;
use crate::tools::ExternalTool;
use crate::ui::UserInterface;

use super::{arg, run_streamed};

/// Arguments for a one-shot generator run.
pub fn markup_args(paths: &MarkupPaths) -> Vec<String> {
    vec![
        arg(&paths.content_dir),
        "--output".to_string(),
        arg(&paths.output_dir),
        "--settings".to_string(),
        arg(&paths.settings_file),
    ]
}

/// Generate the site into the output directory.
pub fn generate_markup(
    paths: &MarkupPaths,
    tool: &ExternalTool,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!(
        "Generating HTML using {} into output directory",
        tool.label()
    ));
    run_streamed(tool, markup_args(paths), ui)
}
