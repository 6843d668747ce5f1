//! Inquiry persistence

pub mod dynamo;

use async_trait::async_trait;

use crate::core::models::{InquiryItem, InquiryUpdate};
use crate::errors::InquiryError;

pub use dynamo::DynamoInquiryStore;

/// Keyed access to inquiry records.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Fetch one record; `Ok(None)` when the id is unknown.
    async fn get_inquiry(&self, id: &str) -> Result<Option<InquiryItem>, InquiryError>;

    /// Set the fields owned by `update` plus the status marker, leaving every
    /// other attribute untouched.
    async fn update_inquiry(&self, id: &str, update: &InquiryUpdate) -> Result<(), InquiryError>;
}

/// Reads the record both handlers start from, enforcing the preconditions
/// they share: a non-empty id, an existing record and non-empty review text.
pub async fn load_inquiry<S>(store: &S, id: &str) -> Result<InquiryItem, InquiryError>
where
    S: InquiryStore + ?Sized,
{
    if id.is_empty() {
        return Err(InquiryError::InvalidInput("missing inquiry id".to_string()));
    }

    let item = store
        .get_inquiry(id)
        .await?
        .ok_or_else(|| InquiryError::NotFound(id.to_string()))?;

    if item.review_text.is_empty() {
        return Err(InquiryError::EmptyContent(id.to_string()));
    }

    Ok(item)
}
