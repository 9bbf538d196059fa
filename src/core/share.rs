//! # Sharing
//!
//! A passage is shared as `"{reference}: {text}"` with markup stripped.
//! Where the text goes is decided by a `ShareSink` injected by the adapter;
//! the default sink copies to the system clipboard.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

#[derive(Debug)]
pub struct ShareError(pub String);

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "share failed: {}", self.0)
    }
}

impl std::error::Error for ShareError {}

/// Destination for shared passages. Blocking; call off the UI thread.
pub trait ShareSink: Send + Sync {
    fn share(&self, text: &str) -> Result<(), ShareError>;
}

/// Copies to the system clipboard via the platform's command-line tool.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub struct ClipboardSink;

impl ShareSink for ClipboardSink {
    fn share(&self, text: &str) -> Result<(), ShareError> {
        #[cfg(target_os = "macos")]
        {
            pipe_to(&mut Command::new("pbcopy"), text)
        }

        #[cfg(target_os = "linux")]
        {
            pipe_to(Command::new("xclip").args(["-selection", "clipboard"]), text).or_else(
                |first| {
                    debug!("xclip unavailable ({}), trying xsel", first);
                    pipe_to(Command::new("xsel").args(["--clipboard", "--input"]), text)
                },
            )
        }

        #[cfg(target_os = "windows")]
        {
            pipe_to(&mut Command::new("clip"), text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = text;
            Err(ShareError(
                "Clipboard not supported on this platform".to_string(),
            ))
        }
    }
}

/// Spawns `command`, writes `text` to its stdin and waits for success.
#[allow(dead_code)] // unused on platforms without a clipboard tool
fn pipe_to(command: &mut Command, text: &str) -> Result<(), ShareError> {
    let program = command.get_program().to_string_lossy().into_owned();

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ShareError(format!("Failed to spawn {program}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShareError(format!("Failed to write to {program}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| ShareError(format!("Failed to wait for {program}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(ShareError(format!("{program} exited with {status}")))
    }
}

/// Removes anything between `<` and `>`.
pub fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

pub fn format_for_share(reference: &str, content: &str) -> String {
    format!("{}: {}", reference, strip_markup(content).trim())
}
