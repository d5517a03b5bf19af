//! Collaborators the console depends on.
//!
//! The console never reaches for a global client: every side effect goes
//! through one of these traits, injected at construction via [`Services`].
//! Browser implementations live in `crate::services`; fakes for tests live
//! in `crate::core::mock`.

use std::rc::Rc;

use async_trait::async_trait;

use crate::core::error::{CompletionError, StorageError};
use crate::models::InquiryRecord;

/// Generates free-text replies to input the console does not recognize.
#[async_trait(?Send)]
pub trait CompletionService {
    /// Answer `prompt`, following the `style` instructions.
    async fn generate(&self, prompt: &str, style: &str) -> Result<String, CompletionError>;
}

/// Persists finished inquiries.
#[async_trait(?Send)]
pub trait InquirySink {
    async fn store(&self, record: &InquiryRecord) -> Result<(), StorageError>;
}

/// Host answer to an elevation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminDecision {
    Granted,
    Denied,
}

/// Decides whether `admin`/`sudo` may elevate the session.
#[async_trait(?Send)]
pub trait AdminGate {
    async fn request_admin_access(&self) -> AdminDecision;
}

/// Waits for a number of milliseconds.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Handles to every collaborator, shared by reference count.
#[derive(Clone)]
pub struct Services {
    pub completion: Rc<dyn CompletionService>,
    pub sink: Rc<dyn InquirySink>,
    pub admin: Rc<dyn AdminGate>,
    pub delay: Rc<dyn Delay>,
}
