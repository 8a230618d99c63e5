/// Clipboard writing via OSC 52.
use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Clipboard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteError(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can put text on the system clipboard.
///
/// The app only reacts to the outcome; a failure is shown to the user
/// transiently and never aborts anything else.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes the OSC 52 escape sequence to stdout.
///
/// Works through most modern terminal emulators, including over ssh.
/// OSC 52 carries the text as a base64 payload.
pub struct Osc52Clipboard;

impl ClipboardWriter for Osc52Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let payload = STANDARD.encode(text.as_bytes());
        let sequence = format!("\x1b]52;c;{payload}\x07");
        let mut stdout = io::stdout();
        stdout
            .write_all(sequence.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| ClipboardError::WriteError(err.to_string()))
    }
}
