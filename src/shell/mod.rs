//! External process execution and platform helpers.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_attached, execute_streaming, spawn_detached,
    CommandResult, OutputCallback, OutputLine,
};
pub use platform::{browser_command, is_ci, local_url, open_browser};
