use serde::{Deserialize, Serialize};

/// Trigger payload: `{"id": "..."}`. A missing id becomes an empty string so
/// the handlers can reject it as invalid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryEvent {
    #[serde(default)]
    pub id: String,
}

/// One row of the inquiry table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryItem {
    pub id: String,
    pub review_text: String,
    pub category: Option<String>,
    pub answer: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Unprocessed,
    Categorized,
    Answered,
}

impl InquiryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unprocessed => "unprocessed",
            Self::Categorized => "categorized",
            Self::Answered => "answered",
        }
    }
}

/// Partial update written back by a handler. Each variant carries only the
/// attribute its handler owns; the status marker is implied by the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryUpdate {
    Categorized { category: String },
    Answered { answer: String },
}

impl InquiryUpdate {
    /// Attribute name and value of the owned field.
    #[must_use]
    pub fn field(&self) -> (&'static str, &str) {
        match self {
            Self::Categorized { category } => ("category", category),
            Self::Answered { answer } => ("answer", answer),
        }
    }

    #[must_use]
    pub fn status(&self) -> InquiryStatus {
        match self {
            Self::Categorized { .. } => InquiryStatus::Categorized,
            Self::Answered { .. } => InquiryStatus::Answered,
        }
    }
}

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyResponse {
    pub inquiry_id: String,
    pub category: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerResponse {
    pub inquiry_id: String,
    pub answer: String,
    pub status: String,
}
