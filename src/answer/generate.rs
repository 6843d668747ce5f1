use tracing::{error, info, warn};

use crate::ai::KnowledgeBase;
use crate::core::models::{AnswerResponse, InquiryUpdate, SUCCESS_STATUS};
use crate::errors::InquiryError;
use crate::prompt::{FALLBACK_ANSWER, build_answer_input};
use crate::store::{InquiryStore, load_inquiry};

/// Generates an answer for the inquiry text in the tone of its category.
///
/// Never fails: a service error, a missing output or blank text all yield
/// [`FALLBACK_ANSWER`].
pub async fn generate_answer<K>(kb: &K, category: Option<&str>, inquiry_text: &str) -> String
where
    K: KnowledgeBase + ?Sized,
{
    let input = build_answer_input(category, inquiry_text);

    match kb.retrieve_and_generate(&input).await {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Knowledge base returned no generated text; using fallback answer");
            FALLBACK_ANSWER.to_string()
        }
        Err(e) => {
            error!("Error generating answer with knowledge base: {}", e);
            FALLBACK_ANSWER.to_string()
        }
    }
}

/// Loads the inquiry, generates an answer and stores it with status
/// `answered`, even when the answer is the fallback. Only the read/write
/// path can fail.
pub async fn answer_inquiry<S, K>(
    store: &S,
    kb: &K,
    inquiry_id: &str,
) -> Result<AnswerResponse, InquiryError>
where
    S: InquiryStore + ?Sized,
    K: KnowledgeBase + ?Sized,
{
    let item = load_inquiry(store, inquiry_id).await?;

    let answer = generate_answer(kb, item.category.as_deref(), &item.review_text).await;

    store
        .update_inquiry(
            inquiry_id,
            &InquiryUpdate::Answered {
                answer: answer.clone(),
            },
        )
        .await?;

    let used_fallback = answer == FALLBACK_ANSWER;
    info!(inquiry_id, used_fallback, "Inquiry answered");

    Ok(AnswerResponse {
        inquiry_id: inquiry_id.to_string(),
        answer,
        status: SUCCESS_STATUS.to_string(),
    })
}
