use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inquiry not found: {0}")]
    NotFound(String),

    #[error("Inquiry has no review text: {0}")]
    EmptyContent(String),

    #[error("Failed to access Bedrock: {0}")]
    ModelError(String),

    #[error("Failed to access DynamoDB: {0}")]
    StoreError(String),

    #[error("Failed to (de)serialize payload: {0}")]
    SerializationError(String),

    #[error("Missing configuration: {0}")]
    ConfigError(String),
}

impl InquiryError {
    /// Whether a fresh invocation could plausibly succeed. Input and data
    /// problems are terminal; nothing in this crate retries either way.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelError(_) | Self::StoreError(_))
    }
}

impl From<serde_json::Error> for InquiryError {
    fn from(error: serde_json::Error) -> Self {
        InquiryError::SerializationError(error.to_string())
    }
}

/// Formats an AWS SDK error with its full source chain. The bare `Display`
/// of `SdkError` only says "service error".
pub(crate) fn sdk_error_message<E, R>(context: &str, error: &SdkError<E, R>) -> String
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    format!("{context}: {}", DisplayErrorContext(error))
}
