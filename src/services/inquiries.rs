//! Inquiry persistence in localStorage.

use async_trait::async_trait;

use crate::config::INQUIRY_STORAGE_KEY;
use crate::core::InquirySink;
use crate::core::error::StorageError;
use crate::models::InquiryRecord;
use crate::utils::storage;

/// Appends each record to a JSON array under one localStorage key.
#[derive(Clone, Debug)]
pub struct LocalInquiryStore {
    key: String,
}

impl LocalInquiryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Records stored so far (empty when storage is unavailable).
    pub fn records(&self) -> Vec<InquiryRecord> {
        storage::load(&self.key).unwrap_or_default()
    }
}

impl Default for LocalInquiryStore {
    fn default() -> Self {
        Self::new(INQUIRY_STORAGE_KEY)
    }
}

#[async_trait(?Send)]
impl InquirySink for LocalInquiryStore {
    async fn store(&self, record: &InquiryRecord) -> Result<(), StorageError> {
        let count = storage::append(&self.key, record.clone())?;
        log::debug!("{} inquiries stored under {}", count, self.key);
        Ok(())
    }
}
