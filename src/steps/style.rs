//! CSS compilation.

use crate::error::Result;
use crate::requirements::StylePaths;
use crate::tools::ExternalTool;
use crate::ui::UserInterface;

use super::{arg, run_streamed};

/// Arguments for one compiler run. The source map is embedded in the output.
pub fn style_args(paths: &StylePaths) -> Vec<String> {
    vec![
        "--no-quiet".to_string(),
        "--embed-source-map".to_string(),
        arg(&paths.input_file),
        arg(&paths.output_file),
    ]
}

/// Compile the stylesheet, replacing any previous output.
pub fn compile_styles(
    paths: &StylePaths,
    tool: &ExternalTool,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Generating CSS files using {}", tool.label()));

    if paths.output_file.is_file() {
        ui.message(&format!(
            "Existing file [{}] will be overwritten by {}",
            paths.output_file.display(),
            tool.label()
        ));
    }

    run_streamed(tool, style_args(paths), ui)
}
