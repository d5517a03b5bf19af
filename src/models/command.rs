//! Built-in console commands, as named by configuration.

use serde::{Deserialize, Serialize};

/// A built-in console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Ls,
    Cd,
    Cat,
    Inquiry,
    About,
    Clear,
    Help,
    Admin,
}

impl CommandKind {
    /// Order in which commands are listed by `help`.
    pub const HELP_ORDER: [CommandKind; 6] = [
        Self::Ls,
        Self::Cd,
        Self::Cat,
        Self::Inquiry,
        Self::About,
        Self::Clear,
    ];

    /// Argument hint and description for `help`. Hidden commands return `None`.
    pub fn help_entry(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Ls => Some(("", "List data")),
            Self::Cd => Some((" [dir]", "Nav directory")),
            Self::Cat => Some((" [file]", "Read data")),
            Self::Inquiry => Some(("", "Start project consultation")),
            Self::About => Some(("", "System meta")),
            Self::Clear => Some(("", "Flush buffer")),
            Self::Help | Self::Admin => None,
        }
    }
}
