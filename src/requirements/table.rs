//! Mode-to-requirement table.
//!
//! Every decision about what a mode needs is made here, once, from a single
//! declarative table. Nothing else in the crate inspects the mode to decide
//! what to validate.

use crate::mode::BuildMode;

/// What a build mode needs before it can run.
///
/// The `*_shown` flags only control whether output locations are printed
/// for the user; they never cause a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements {
    /// Content directory and settings file must exist.
    pub markup_input: bool,
    /// The markup generator is run (and therefore probed).
    pub markup_invoke: bool,
    /// The generated output directory must already exist.
    pub markup_output: bool,
    /// The output directory is displayed.
    pub markup_output_shown: bool,
    /// The style source file must exist.
    pub style_input: bool,
    /// The style compiler is run (and therefore probed).
    pub style_invoke: bool,
    /// The compiled stylesheet must already exist.
    pub style_output: bool,
    /// The compiled stylesheet location is displayed.
    pub style_output_shown: bool,
}

impl Requirements {
    /// Nothing required.
    pub const NONE: Requirements = Requirements {
        markup_input: false,
        markup_invoke: false,
        markup_output: false,
        markup_output_shown: false,
        style_input: false,
        style_invoke: false,
        style_output: false,
        style_output_shown: false,
    };

    /// Whether any markup paths are displayed.
    pub fn shows_markup_paths(&self) -> bool {
        self.markup_input || self.markup_output_shown
    }

    /// Whether any style paths are displayed.
    pub fn shows_style_paths(&self) -> bool {
        self.style_input || self.style_output_shown
    }

    /// Whether at least one external tool is probed.
    pub fn invokes_any_tool(&self) -> bool {
        self.markup_invoke || self.style_invoke
    }
}

/// The mode table.
///
/// `html` checks that compiled CSS exists because the generated pages link
/// to it; Sass creates missing parent directories itself, so no mode checks
/// the stylesheet's parent.
pub const MODE_REQUIREMENTS: &[(BuildMode, Requirements)] = &[
    (
        BuildMode::Html,
        Requirements {
            markup_input: true,
            markup_invoke: true,
            markup_output_shown: true,
            style_output: true,
            ..Requirements::NONE
        },
    ),
    (
        BuildMode::Css,
        Requirements {
            style_input: true,
            style_invoke: true,
            style_output_shown: true,
            ..Requirements::NONE
        },
    ),
    (
        BuildMode::Site,
        Requirements {
            markup_input: true,
            markup_invoke: true,
            markup_output_shown: true,
            style_input: true,
            style_invoke: true,
            style_output_shown: true,
            ..Requirements::NONE
        },
    ),
    (BuildMode::Clean, Requirements::NONE),
    (
        BuildMode::ServePelican,
        Requirements {
            markup_input: true,
            markup_invoke: true,
            markup_output: true,
            markup_output_shown: true,
            ..Requirements::NONE
        },
    ),
    (
        BuildMode::Serve,
        Requirements {
            markup_output: true,
            markup_output_shown: true,
            ..Requirements::NONE
        },
    ),
];

/// Look up the requirements for a mode.
pub fn requirements_for(mode: BuildMode) -> Requirements {
    MODE_REQUIREMENTS
        .iter()
        .find(|(m, _)| *m == mode)
        .map(|(_, r)| *r)
        .unwrap_or(Requirements::NONE)
}
