//! Removal of generated output.

use std::fs;

use crate::error::{HomotypusError, Result};
use crate::requirements::PathSet;
use crate::ui::UserInterface;

const OUTPUT_DIR_WHAT: &str = "Pelican output directory";
const OUTPUT_CSS_WHAT: &str = "Sass output CSS file";

/// Remove the generated site and the compiled stylesheet.
///
/// Only removes what exists: the output directory if it is a directory, the
/// stylesheet if it is a file. A removal failure is reported and returned.
pub fn clean_outputs(paths: &PathSet, ui: &mut dyn UserInterface) -> Result<()> {
    let output_dir = &paths.markup.output_dir;
    let output_css = &paths.style.output_file;

    let remove_dir = output_dir.is_dir();
    let remove_css = output_css.is_file();

    if !remove_dir && !remove_css {
        ui.message("Nothing to remove");
        return Ok(());
    }

    ui.message("The following will be removed:");
    if remove_dir {
        ui.message(&format!(
            "    {} [{}]",
            OUTPUT_DIR_WHAT,
            output_dir.display()
        ));
    }
    if remove_css {
        ui.message(&format!(
            "    {} [{}]",
            OUTPUT_CSS_WHAT,
            output_css.display()
        ));
    }
    ui.message("");

    if remove_dir {
        match fs::remove_dir_all(output_dir) {
            Ok(()) => ui.success("Removed Pelican output directory"),
            Err(source) => {
                ui.error("Could not remove Pelican output directory");
                return Err(HomotypusError::RemoveFailed {
                    what: OUTPUT_DIR_WHAT.to_string(),
                    path: output_dir.clone(),
                    source,
                });
            }
        }
    }

    if remove_css {
        match fs::remove_file(output_css) {
            Ok(()) => ui.success("Removed Sass output file"),
            Err(source) => {
                ui.error("Could not remove Sass output file");
                return Err(HomotypusError::RemoveFailed {
                    what: OUTPUT_CSS_WHAT.to_string(),
                    path: output_css.clone(),
                    source,
                });
            }
        }
    }

    Ok(())
}
