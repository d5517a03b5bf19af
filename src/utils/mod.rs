//! Utility modules for browser APIs and text formatting.
//!
//! Provides:
//! - [`net`] - JSON over HTTP with a timeout race
//! - [`storage`] - JSON values in localStorage
//! - [`dom`] - window, focus and dialog helpers
//! - [`format`] - console line formatting

pub mod dom;
pub mod format;
pub mod net;
pub mod storage;
