//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed console commands
//! - `CommandTable` mapping typed names to built-in commands
//! - `CommandResult` / `Effect` for command execution results
//!
//! # Architecture
//!
//! A submitted line is parsed into a `Command` using the configured
//! `CommandTable`, then executed via `execute_command`. Execution is pure:
//! it returns output lines plus at most one `Effect`, and the console
//! applies the effect (navigation, clearing, wizard start, async calls).

mod execute;
mod result;
mod table;

pub use execute::{ExecContext, execute_command};
pub use result::{CommandResult, Effect};
pub use table::CommandTable;

use crate::models::CommandKind;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// The path is stored as-is (not validated) since validation happens
/// during execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed console command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List a directory (current one when no path is given)
    Ls(Option<PathArg>),
    /// Change directory; no argument goes to the root
    Cd(Option<PathArg>),
    /// Print a file
    Cat(Option<PathArg>),
    Inquiry,
    About,
    Clear,
    Help,
    Admin,
    /// Unrecognized input, forwarded verbatim to the completion service
    Prompt(String),
}

impl Command {
    /// Parse a trimmed input line.
    ///
    /// The first whitespace-delimited token selects the command
    /// (case-insensitive); the rest are arguments.
    pub fn parse(input: &str, table: &CommandTable) -> Self {
        let mut tokens = input.split_whitespace();
        let Some(name) = tokens.next() else {
            return Self::Prompt(String::new());
        };
        let arg = tokens.next().map(PathArg::new);

        match table.lookup(name) {
            Some(CommandKind::Ls) => Self::Ls(arg),
            Some(CommandKind::Cd) => Self::Cd(arg),
            Some(CommandKind::Cat) => Self::Cat(arg),
            Some(CommandKind::Inquiry) => Self::Inquiry,
            Some(CommandKind::About) => Self::About,
            Some(CommandKind::Clear) => Self::Clear,
            Some(CommandKind::Help) => Self::Help,
            Some(CommandKind::Admin) => Self::Admin,
            None => Self::Prompt(input.trim().to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
