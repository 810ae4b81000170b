//! Path table rendering.
//!
//! Before running, the build command prints the paths each tool will see:
//!
//! ```text
//! Pelican arguments >>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>
//! Content directory:    /site/content
//! Settings file:        /site/settings.py
//! Output directory:     /site/output
//! <<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<
//! ```

use std::path::Path;

use crate::ui::UserInterface;

/// Width of the header and footer rules.
pub const TABLE_WIDTH: usize = 80;

/// Render a framed table of labelled paths, ending with a blank line.
pub fn format_path_table(head: &str, rows: &[(&str, &Path)]) -> Vec<String> {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut lines = Vec::with_capacity(rows.len() + 3);
    let rule = format!("{:><w$}", format!("{} ", head), w = TABLE_WIDTH);
    lines.push(rule.trim_end().to_string());
    for (label, path) in rows {
        lines.push(format!(
            "{:<w$}    {}",
            format!("{}:", label),
            path.display(),
            w = width
        ));
    }
    lines.push("<".repeat(TABLE_WIDTH));
    lines.push(String::new());
    lines
}

/// Print a path table. Nothing is printed for an empty table or when the
/// output mode hides details.
pub fn show_path_table(ui: &mut dyn UserInterface, head: &str, rows: &[(&str, &Path)]) {
    if rows.is_empty() || !ui.output_mode().shows_details() {
        return;
    }
    for line in format_path_table(head, rows) {
        ui.message(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};

    #[test]
    fn header_is_padded_to_width() {
        let lines = format_path_table("Sass arguments", &[]);
        assert_eq!(lines[0].len(), TABLE_WIDTH);
        assert!(lines[0].starts_with("Sass arguments >>>"));
        assert_eq!(lines[1], "<".repeat(TABLE_WIDTH));
        assert_eq!(lines[2], "");
    }

    #[test]
    fn labels_are_aligned() {
        let rows = [
            ("Input source file", Path::new("/site/extra/homotypus.scss")),
            ("Output file", Path::new("/site/theme/static/css/homotypus.css")),
        ];
        let lines = format_path_table("Sass arguments", &rows);

        assert_eq!(
            lines[1],
            "Input source file:    /site/extra/homotypus.scss"
        );
        assert_eq!(
            lines[2],
            "Output file:          /site/theme/static/css/homotypus.css"
        );
    }

    #[test]
    fn long_head_is_not_truncated() {
        let head = "x".repeat(100);
        let lines = format_path_table(&head, &[]);
        assert_eq!(lines[0], head);
    }

    #[test]
    fn empty_table_prints_nothing() {
        let mut ui = MockUI::new();
        show_path_table(&mut ui, "Pelican arguments", &[]);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn quiet_mode_hides_table() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_path_table(
            &mut ui,
            "Pelican arguments",
            &[("Output directory", Path::new("/site/output"))],
        );
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn table_goes_to_messages() {
        let mut ui = MockUI::new();
        show_path_table(
            &mut ui,
            "Pelican arguments",
            &[("Output directory", Path::new("/site/output"))],
        );
        assert_eq!(ui.messages().len(), 4);
        assert!(ui.messages()[1].starts_with("Output directory:"));
    }
}
