//! System clipboard access
//!
//! Two transports are supported:
//! - an external copy tool (`pbcopy`, `clip`, `wl-copy`, `xclip`, `xsel`)
//!   fed through stdin
//! - an OSC 52 escape sequence written to the controlling terminal, which
//!   most modern terminal emulators forward to the system clipboard
//!
//! The terminal is owned by the render loop, so OSC 52 sequences are not
//! written here. They are queued on a [`TerminalOutput`] channel and the loop
//! writes them between frames.
//!
//! External tools are preferred when present because OSC 52 support cannot be
//! confirmed from inside the application.

use std::env;
use std::io::{IsTerminal, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common OSC 52 size limit (base64 payload bytes)
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// Sender half for escape sequences the terminal owner must write
pub type TerminalOutput = mpsc::Sender<String>;

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard not available")]
    NotAvailable,

    #[error("OSC 52 payload too large ({size} > {max})")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {status}")]
    ToolFailed { tool: &'static str, status: String },

    #[error("terminal output closed")]
    TerminalClosed,

    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a text block to the system clipboard
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Configured clipboard backend choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// External tool if one is installed, otherwise OSC 52 when attached to a terminal
    #[default]
    Auto,
    Osc52,
    External,
    None,
}

/// External copy tools, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    Pbcopy,
    Clip,
    WlCopy,
    Xclip,
    Xsel,
}

impl ExternalTool {
    pub fn program(&self) -> &'static str {
        match self {
            ExternalTool::Pbcopy => "pbcopy",
            ExternalTool::Clip => "clip",
            ExternalTool::WlCopy => "wl-copy",
            ExternalTool::Xclip => "xclip",
            ExternalTool::Xsel => "xsel",
        }
    }

    fn args(&self) -> &'static [&'static str] {
        match self {
            ExternalTool::Xclip => &["-selection", "clipboard"],
            ExternalTool::Xsel => &["--clipboard", "--input"],
            _ => &[],
        }
    }

    /// Whether this tool applies to the current platform/session
    fn applies(&self) -> bool {
        match self {
            ExternalTool::Pbcopy => cfg!(target_os = "macos"),
            ExternalTool::Clip => cfg!(target_os = "windows"),
            ExternalTool::WlCopy => env::var_os("WAYLAND_DISPLAY").is_some(),
            ExternalTool::Xclip | ExternalTool::Xsel => env::var_os("DISPLAY").is_some(),
        }
    }
}

const DETECTION_ORDER: [ExternalTool; 5] = [
    ExternalTool::Pbcopy,
    ExternalTool::Clip,
    ExternalTool::WlCopy,
    ExternalTool::Xclip,
    ExternalTool::Xsel,
];

/// Resolved clipboard transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    Osc52,
    External(ExternalTool),
    Unavailable,
}

/// Find the first applicable external copy tool on `PATH`
pub fn detect_external_tool() -> Option<ExternalTool> {
    DETECTION_ORDER
        .into_iter()
        .find(|tool| tool.applies() && which::which(tool.program()).is_ok())
}

/// Build the OSC 52 sequence that sets the clipboard selection to `text`
pub fn encode_osc52(text: &str) -> Result<String, ClipboardError> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return Err(ClipboardError::PayloadTooLarge {
            size: encoded.len(),
            max: MAX_OSC52_PAYLOAD,
        });
    }
    Ok(format!("\x1b]52;c;{encoded}\x07"))
}

/// Clipboard backed by the operating system
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backend: ClipboardBackend,
    terminal: Option<TerminalOutput>,
}

impl SystemClipboard {
    /// Resolve a backend for the given preference
    pub fn detect(preference: BackendPreference) -> Self {
        let on_terminal = std::io::stdout().is_terminal();
        let backend = match preference {
            BackendPreference::None => ClipboardBackend::Unavailable,
            BackendPreference::Osc52 => ClipboardBackend::Osc52,
            BackendPreference::External => detect_external_tool()
                .map(ClipboardBackend::External)
                .unwrap_or(ClipboardBackend::Unavailable),
            BackendPreference::Auto => match detect_external_tool() {
                Some(tool) => ClipboardBackend::External(tool),
                None if on_terminal => ClipboardBackend::Osc52,
                None => ClipboardBackend::Unavailable,
            },
        };

        tracing::info!(backend = ?backend, ?preference, "Clipboard backend detected");
        Self::with_backend(backend)
    }

    /// Use a specific backend without detection
    pub fn with_backend(backend: ClipboardBackend) -> Self {
        Self {
            backend,
            terminal: None,
        }
    }

    /// Route OSC 52 sequences to the terminal owner
    ///
    /// Without this the OSC 52 backend has nowhere to write and reports
    /// [`ClipboardError::NotAvailable`].
    pub fn with_terminal_output(mut self, terminal: TerminalOutput) -> Self {
        self.terminal = Some(terminal);
        self
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, ClipboardBackend::Unavailable)
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        tracing::debug!(backend = ?self.backend, bytes = text.len(), "Clipboard write");
        match self.backend {
            ClipboardBackend::Osc52 => {
                let terminal = self.terminal.as_ref().ok_or(ClipboardError::NotAvailable)?;
                let seq = encode_osc52(text)?;
                terminal
                    .send(seq)
                    .map_err(|_| ClipboardError::TerminalClosed)
            }
            ClipboardBackend::External(tool) => run_tool(tool, text),
            ClipboardBackend::Unavailable => Err(ClipboardError::NotAvailable),
        }
    }
}

fn run_tool(tool: ExternalTool, text: &str) -> Result<(), ClipboardError> {
    let program = tool.program();
    let mut child = Command::new(program)
        .args(tool.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            tool: program,
            source,
        })?;

    let status = feed_child(&mut child, text)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::ToolFailed {
            tool: program,
            status: status.to_string(),
        })
    }
}

/// Write `text` to the child's stdin and wait for it to exit
///
/// The child is always reaped, killing it first if the write fails.
fn feed_child(child: &mut Child, text: &str) -> Result<ExitStatus, ClipboardError> {
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
    }

    Ok(child.wait()?)
}
