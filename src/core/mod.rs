//! Core console logic, independent of the browser.
//!
//! This module provides:
//! - [`Console`], the controller that routes input lines
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`VirtualFs`] read-only file tree
//! - [`InquiryWizard`] multi-step intake
//! - collaborator traits in [`services`]

mod commands;
mod console;
pub mod error;
mod filesystem;
mod history;
mod line_log;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod services;
mod wizard;

pub use commands::{
    Command, CommandResult, CommandTable, Effect, ExecContext, PathArg, execute_command,
};
pub use crate::models::CommandKind;
pub use console::{Console, ConsoleSignal, PendingTask, Submission, TaskOutcome};
pub use filesystem::{DirEntry, Directory, FsNode, VirtualFs};
pub use history::CommandHistory;
pub use line_log::LineLog;
pub use services::{AdminDecision, AdminGate, CompletionService, Delay, InquirySink, Services};
pub use wizard::{InquiryWizard, WizardState, WizardStep};
