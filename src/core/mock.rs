//! In-memory collaborators for tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::core::error::{CompletionError, StorageError};
use crate::core::services::{AdminDecision, AdminGate, CompletionService, Delay, InquirySink, Services};
use crate::models::InquiryRecord;

/// Completion service that replays queued answers and records prompts.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: RefCell<VecDeque<Result<String, CompletionError>>>,
    prompts: RefCell<Vec<String>>,
    styles: RefCell<Vec<String>>,
}

impl ScriptedCompletion {
    /// Queue a successful reply.
    pub fn reply(&self, text: impl Into<String>) {
        self.replies.borrow_mut().push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub fn fail(&self, error: CompletionError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Style instructions received so far, in order.
    pub fn styles(&self) -> Vec<String> {
        self.styles.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CompletionService for ScriptedCompletion {
    async fn generate(&self, prompt: &str, style: &str) -> Result<String, CompletionError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.styles.borrow_mut().push(style.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Service("no scripted reply".to_string())))
    }
}

/// Sink that keeps stored records in memory, or refuses every write.
#[derive(Default)]
pub struct RecordingSink {
    records: RefCell<Vec<InquiryRecord>>,
    failing: Cell<bool>,
}

impl RecordingSink {
    /// Make every later `store` fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn records(&self) -> Vec<InquiryRecord> {
        self.records.borrow().clone()
    }
}

#[async_trait(?Send)]
impl InquirySink for RecordingSink {
    async fn store(&self, record: &InquiryRecord) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::WriteFailed);
        }
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }
}

/// Admin gate with a fixed answer.
pub struct FixedAdminGate {
    decision: Cell<AdminDecision>,
    requests: Cell<usize>,
}

impl FixedAdminGate {
    pub fn new(decision: AdminDecision) -> Self {
        Self {
            decision: Cell::new(decision),
            requests: Cell::new(0),
        }
    }

    pub fn set_decision(&self, decision: AdminDecision) {
        self.decision.set(decision);
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

#[async_trait(?Send)]
impl AdminGate for FixedAdminGate {
    async fn request_admin_access(&self) -> AdminDecision {
        self.requests.set(self.requests.get() + 1);
        self.decision.get()
    }
}

/// Delay that returns immediately and remembers what was asked for.
#[derive(Default)]
pub struct InstantDelay {
    slept: RefCell<Vec<u32>>,
}

impl InstantDelay {
    pub fn slept(&self) -> Vec<u32> {
        self.slept.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Delay for InstantDelay {
    async fn sleep(&self, ms: u32) {
        self.slept.borrow_mut().push(ms);
    }
}

/// A full set of fakes, with handles kept for inspection.
pub struct MockServices {
    pub completion: Rc<ScriptedCompletion>,
    pub sink: Rc<RecordingSink>,
    pub admin: Rc<FixedAdminGate>,
    pub delay: Rc<InstantDelay>,
}

impl MockServices {
    /// Fakes with admin access denied.
    pub fn new() -> Self {
        Self {
            completion: Rc::new(ScriptedCompletion::default()),
            sink: Rc::new(RecordingSink::default()),
            admin: Rc::new(FixedAdminGate::new(AdminDecision::Denied)),
            delay: Rc::new(InstantDelay::default()),
        }
    }

    /// Trait-object handles for the console.
    pub fn services(&self) -> Services {
        Services {
            completion: self.completion.clone(),
            sink: self.sink.clone(),
            admin: self.admin.clone(),
            delay: self.delay.clone(),
        }
    }
}

impl Default for MockServices {
    fn default() -> Self {
        Self::new()
    }
}
