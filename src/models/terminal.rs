//! Terminal-related data types for output rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual category of a console line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Regular output (dim)
    Info,
    /// Failure message (red)
    Error,
    /// Highlighted output (bright, glowing)
    Success,
    /// Echo of the user's own input
    Command,
}

impl LineKind {
    /// Lowercase name, as used for styling hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line produced by a command handler, not yet stamped into the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(LineKind::Info, s)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(LineKind::Error, s)
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(LineKind::Success, s)
    }

    pub fn command(s: impl Into<String>) -> Self {
        Self::new(LineKind::Command, s)
    }
}

/// A stamped, immutable entry of the console log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogLine {
    /// Unique (per log) ID for efficient keying in For loops
    pub id: usize,
    pub kind: LineKind,
    pub text: String,
    /// Wall-clock time of the append, `HH:MM:SS` (24-hour)
    pub timestamp: String,
}
