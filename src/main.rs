//! Homotypus CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::Term;
use homotypus::cli::{Cli, CommandDispatcher};
use homotypus::config::load_config;
use homotypus::shell::is_ci;
use homotypus::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("homotypus=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homotypus=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Homotypus starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // Determine output mode; config problems are reported by the command itself
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        load_config(&project_root, cli.config.as_deref())
            .map(|config| OutputMode::from(config.output))
            .unwrap_or_default()
    };

    // Log-style output for --log, CI and pipes
    let is_interactive = !cli.log && !is_ci() && Term::stdout().is_term();

    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(project_root);

    let code = match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => result.exit_code,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            1
        }
    };

    ui.finish();
    ExitCode::from(code as u8)
}
