use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use super::classify::classify_inquiry;
use crate::ai::TextModel;
use crate::core::models::{ClassifyResponse, InquiryEvent};
use crate::store::InquiryStore;

pub use self::function_handler as handler;

/// Lambda handler for the judge-category entrypoint.
///
/// # Errors
///
/// Every failure is terminal for the invocation: invalid input, a missing or
/// empty record, a Bedrock error or a DynamoDB error.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(inquiry_id = %event.payload.id, request_id = %event.context.request_id)
)]
pub async fn function_handler<S, M>(
    store: &S,
    model: &M,
    event: LambdaEvent<InquiryEvent>,
) -> Result<ClassifyResponse, Error>
where
    S: InquiryStore + ?Sized,
    M: TextModel + ?Sized,
{
    info!("judge-category received inquiry");

    classify_inquiry(store, model, &event.payload.id)
        .await
        .map_err(|e| {
            error!(retryable = e.is_retryable(), "Failed to classify inquiry: {}", e);
            Error::from(e)
        })
}
