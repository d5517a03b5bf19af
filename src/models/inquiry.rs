//! Project inquiry types collected by the intake wizard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question asked by the wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryField {
    /// Stable key the answer is stored under (e.g. `"name"`)
    pub key: String,
    /// Text shown to the visitor when the field is requested
    pub prompt: String,
}

impl InquiryField {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}

/// Processing status of a stored inquiry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    #[default]
    New,
}

/// A single answered field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryAnswer {
    pub key: String,
    pub value: String,
}

/// A completed inquiry, ready for the persistence sink.
///
/// Answers keep the order in which the fields were asked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    pub id: String,
    pub answers: Vec<InquiryAnswer>,
    pub created_at: String,
    pub status: InquiryStatus,
}

impl InquiryRecord {
    /// Build a record stamped with `now`.
    ///
    /// The identifier is the creation time in milliseconds since the epoch.
    pub fn new(answers: Vec<InquiryAnswer>, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            answers,
            created_at: now.to_rfc3339(),
            status: InquiryStatus::New,
        }
    }

    /// Answer stored under `key`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Answer values in field order.
    pub fn values(&self) -> Vec<&str> {
        self.answers.iter().map(|a| a.value.as_str()).collect()
    }
}
