use std::io::Write;
use std::process::{Command, Stdio};

use crate::app::ports::{ClipboardError, ClipboardWriter};

/// A clipboard tool fed through stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const PBCOPY: ClipboardCommand = ClipboardCommand {
    program: "pbcopy",
    args: &[],
};
const WL_COPY: ClipboardCommand = ClipboardCommand {
    program: "wl-copy",
    args: &[],
};
const XCLIP: ClipboardCommand = ClipboardCommand {
    program: "xclip",
    args: &["-selection", "clipboard"],
};
const XSEL: ClipboardCommand = ClipboardCommand {
    program: "xsel",
    args: &["--clipboard", "--input"],
};

/// Candidates in the order they are tried on this platform.
pub fn platform_commands() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![PBCOPY]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec![WL_COPY, XCLIP, XSEL]
    } else {
        vec![XCLIP, XSEL, WL_COPY]
    }
}

/// Clipboard adapter that pipes into the first external tool that works.
pub struct CommandClipboard {
    commands: Vec<ClipboardCommand>,
}

impl CommandClipboard {
    pub fn new() -> Self {
        Self::with_commands(platform_commands())
    }

    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    fn run(command: &ClipboardCommand, content: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(command.program)
            .args(command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CommandNotFound(format!("{}: {}", command.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(content.as_bytes())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with status: {}",
                command.program, status
            )));
        }

        Ok(())
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write(&self, content: &str) -> Result<(), ClipboardError> {
        let mut last_error =
            ClipboardError::CommandNotFound("no clipboard command available".to_string());

        for command in &self.commands {
            match Self::run(command, content) {
                Ok(()) => {
                    tracing::debug!(program = command.program, "copied via clipboard command");
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(program = command.program, error = %e, "clipboard command failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
