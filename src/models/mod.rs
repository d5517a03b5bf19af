//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputLine`], [`LogLine`], [`LineKind`] - Console output
//! - [`VirtualPath`] - Working directory inside the virtual tree
//! - [`InquiryField`], [`InquiryRecord`] - Project inquiry intake
//! - [`CommandKind`] - Built-in commands named by the command table
//! - [`SiteConfig`] - Injected display strings and console switches

mod command;
mod config;
mod filesystem;
mod inquiry;
mod terminal;

pub use command::CommandKind;
pub use config::{ConfigEnvelope, ConsoleMessages, SiteConfig};
pub use filesystem::VirtualPath;
pub use inquiry::{InquiryAnswer, InquiryField, InquiryRecord, InquiryStatus};
pub use terminal::{LineKind, LogLine, OutputLine};
