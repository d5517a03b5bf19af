//! UI components built with Leptos.
//!
//! - [`terminal`] - Console window (output log and input line)

pub mod terminal;
