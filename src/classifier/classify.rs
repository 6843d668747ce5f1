use tracing::{info, warn};

use crate::ai::{ModelRequest, TextModel};
use crate::core::categories::{Category, parse_category};
use crate::core::models::{ClassifyResponse, InquiryUpdate, SUCCESS_STATUS};
use crate::errors::InquiryError;
use crate::prompt::{CLASSIFY_MAX_TOKENS, CLASSIFY_TEMPERATURE, build_classification_prompt};
use crate::store::{InquiryStore, load_inquiry};

/// Asks the model for a category and maps its reply onto the closed set.
/// A reply without any text block counts as the catch-all.
pub async fn classify_text<M>(model: &M, inquiry_text: &str) -> Result<Category, InquiryError>
where
    M: TextModel + ?Sized,
{
    let request = ModelRequest {
        prompt: build_classification_prompt(inquiry_text),
        max_tokens: CLASSIFY_MAX_TOKENS,
        temperature: CLASSIFY_TEMPERATURE,
    };

    let reply = model.invoke(&request).await?;
    let Some(text) = reply.first_text() else {
        warn!("Model reply had no text; using catch-all category");
        return Ok(Category::CATCH_ALL);
    };

    let reply_text = text.trim();
    let category = parse_category(reply_text);
    if category.name() != reply_text {
        info!(reply = %reply_text, category = %category, "Model reply was not an exact category name");
    }
    Ok(category)
}

/// Loads the inquiry, classifies its review text and stores the result with
/// status `categorized`. Model and store failures are returned as-is.
pub async fn classify_inquiry<S, M>(
    store: &S,
    model: &M,
    inquiry_id: &str,
) -> Result<ClassifyResponse, InquiryError>
where
    S: InquiryStore + ?Sized,
    M: TextModel + ?Sized,
{
    let item = load_inquiry(store, inquiry_id).await?;

    let category = classify_text(model, &item.review_text).await?;

    store
        .update_inquiry(
            inquiry_id,
            &InquiryUpdate::Categorized {
                category: category.name().to_string(),
            },
        )
        .await?;

    info!(inquiry_id, category = %category, "Inquiry categorized");

    Ok(ClassifyResponse {
        inquiry_id: inquiry_id.to_string(),
        category: category.name().to_string(),
        status: SUCCESS_STATUS.to_string(),
    })
}
