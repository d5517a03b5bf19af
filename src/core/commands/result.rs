//! Command execution result type.

use crate::models::{OutputLine, VirtualPath};

/// A state change requested by a command, applied by the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Change the working directory (already validated)
    Navigate(VirtualPath),
    /// Empty the output log
    ClearLog,
    /// Start the inquiry wizard
    StartInquiry,
    /// Ask the host for admin access (asynchronous)
    RequestAdmin,
    /// Forward the text to the completion service (asynchronous)
    Complete(String),
}

/// Result of executing a command.
///
/// Commands produce output and optionally request one state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Optional state change for the console to apply
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no state change.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result with an effect and no output.
    pub fn effect(effect: Effect) -> Self {
        Self {
            output: vec![],
            effect: Some(effect),
        }
    }

    /// Add an effect to a result.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}
