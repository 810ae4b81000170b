//! External command execution.
//!
//! Commands are always argv vectors handed straight to the OS; nothing here
//! goes through a shell, so paths containing spaces or quotes need no
//! escaping.

use crate::error::{HomotypusError, Result};
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Output line from command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    /// The line's text, whichever stream it came from.
    pub fn text(&self) -> &str {
        match self {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s,
        }
    }
}

/// Callback for streaming output.
///
/// Always invoked on the thread that called [`execute_streaming`].
pub type OutputCallback<'a> = &'a mut dyn FnMut(OutputLine);

/// Render an argv for messages.
pub fn display_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("{:?}", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_command(argv: &[String]) -> Result<Command> {
    let (program, args) = argv.split_first().ok_or_else(|| HomotypusError::CommandFailed {
        command: String::new(),
        code: None,
    })?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

fn spawn(mut cmd: Command, argv: &[String]) -> Result<Child> {
    let child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to start {:?}: {}", argv, e);
        HomotypusError::CommandFailed {
            command: display_command(argv),
            code: None,
        }
    })?;

    tracing::debug!("Executed the following command as PID {}", child.id());
    tracing::debug!("    {:?}", argv);

    Ok(child)
}

/// Forward every line of `source` over `tx` until EOF.
///
/// Bytes that are not UTF-8 are replaced rather than ending the read, so
/// the child never writes into a closed pipe.
fn forward_lines<R: Read>(
    source: R,
    tx: Sender<OutputLine>,
    wrap: fn(String) -> OutputLine,
) -> String {
    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();
    let mut output = String::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Stopped reading command output: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        output.push_str(&line);
        output.push('\n');
        let _ = tx.send(wrap(line));
    }

    output
}

/// Execute a command, capturing stdout and stderr.
pub fn execute(argv: &[String]) -> Result<CommandResult> {
    let mut cmd = build_command(argv)?;
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let child = spawn(cmd, argv)?;
    let output = child
        .wait_with_output()
        .map_err(|_| HomotypusError::CommandFailed {
            command: display_command(argv),
            code: None,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Execute a command with streaming output.
///
/// Two reader threads forward stdout and stderr lines over a channel; the
/// callback runs here, on the calling thread, in arrival order.
pub fn execute_streaming(argv: &[String], callback: OutputCallback<'_>) -> Result<CommandResult> {
    let mut cmd = build_command(argv)?;
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = spawn(cmd, argv)?;

    let (tx, rx) = mpsc::channel();

    let stdout_reader = child.stdout.take().map(|stdout| {
        let tx = tx.clone();
        thread::spawn(move || forward_lines(stdout, tx, OutputLine::Stdout))
    });
    let stderr_reader = child.stderr.take().map(|stderr| {
        let tx = tx.clone();
        thread::spawn(move || forward_lines(stderr, tx, OutputLine::Stderr))
    });

    // Readers hold the remaining senders; the loop ends when both are done.
    drop(tx);
    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    let stderr_output = stderr_reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    let status = child.wait().map_err(|_| HomotypusError::CommandFailed {
        command: display_command(argv),
        code: None,
    })?;

    if status.success() {
        Ok(CommandResult::success(stdout_output, stderr_output))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout_output,
            stderr_output,
        ))
    }
}

/// Execute a command attached to this process's terminal and wait for it.
///
/// Used for long-running servers, which talk to the user directly.
/// `on_started` runs once the child is up, before waiting on it.
pub fn execute_attached(argv: &[String], on_started: impl FnOnce()) -> Result<CommandResult> {
    let mut cmd = build_command(argv)?;
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let mut child = spawn(cmd, argv)?;
    on_started();
    let status = child.wait().map_err(|_| HomotypusError::CommandFailed {
        command: display_command(argv),
        code: None,
    })?;

    if status.success() {
        Ok(CommandResult::success(String::new(), String::new()))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            String::new(),
            String::new(),
        ))
    }
}

/// Start a command without waiting for it.
///
/// The child is reaped on a background thread once it exits. The returned
/// handle finishes with the child's exit code.
pub fn spawn_detached(argv: &[String]) -> Result<thread::JoinHandle<Option<i32>>> {
    let mut cmd = build_command(argv)?;
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    let mut child = spawn(cmd, argv)?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => status.code(),
        Err(e) => {
            tracing::debug!("Could not wait on detached PID {}: {}", child.id(), e);
            None
        }
    }))
}
