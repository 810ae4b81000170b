//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::mode::BuildMode;

/// Homotypus - Build, clean and serve a Pelican + Sass website.
#[derive(Debug, Parser)]
#[command(name = "homotypus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default homotypus.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Timestamped log-style output, even on a terminal
    #[arg(long, global = true)]
    pub log: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Regenerate the HTML and the CSS
    Site,

    /// Regenerate the HTML using Pelican
    Html,

    /// Regenerate the CSS using Sass
    Css,

    /// Remove the generated HTML and CSS
    Clean,

    /// Serve the generated site with a local Python server
    Serve(ServeArgs),

    /// Regenerate and serve the site with Pelican's own server
    #[command(name = "serve-pelican")]
    ServePelican(ServeArgs),
}

impl Commands {
    /// The build mode this subcommand selects.
    pub fn mode(&self) -> BuildMode {
        match self {
            Commands::Site => BuildMode::Site,
            Commands::Html => BuildMode::Html,
            Commands::Css => BuildMode::Css,
            Commands::Clean => BuildMode::Clean,
            Commands::Serve(_) => BuildMode::Serve,
            Commands::ServePelican(_) => BuildMode::ServePelican,
        }
    }

    /// Serve arguments, if this is a serve subcommand.
    pub fn serve_args(&self) -> Option<&ServeArgs> {
        match self {
            Commands::Serve(args) | Commands::ServePelican(args) => Some(args),
            _ => None,
        }
    }
}

/// Arguments for the serve subcommands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {
    /// Port to listen on (default from config, else 8000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Do not open a browser
    #[arg(long)]
    pub no_browser: bool,
}
