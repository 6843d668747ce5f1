use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use super::generate::answer_inquiry;
use crate::ai::KnowledgeBase;
use crate::core::models::{AnswerResponse, InquiryEvent};
use crate::store::InquiryStore;

pub use self::function_handler as handler;

/// Lambda handler for the create-answer entrypoint.
///
/// # Errors
///
/// Fails on invalid input, a missing or empty record, or a DynamoDB error.
/// Knowledge base failures are absorbed into the fallback answer.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(inquiry_id = %event.payload.id, request_id = %event.context.request_id)
)]
pub async fn function_handler<S, K>(
    store: &S,
    kb: &K,
    event: LambdaEvent<InquiryEvent>,
) -> Result<AnswerResponse, Error>
where
    S: InquiryStore + ?Sized,
    K: KnowledgeBase + ?Sized,
{
    info!("create-answer received inquiry");

    answer_inquiry(store, kb, &event.payload.id)
        .await
        .map_err(|e| {
            error!(retryable = e.is_retryable(), "Failed to answer inquiry: {}", e);
            Error::from(e)
        })
}
