//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`]. Every subcommand is a
//! build mode, so they all share [`BuildCommand`](build::BuildCommand) and
//! differ only in the mode and serve options handed to it.

pub mod build;
pub mod dispatcher;
pub mod display;

pub use build::BuildCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
