use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::InquiryStore;
use crate::core::models::{InquiryItem, InquiryUpdate};
use crate::errors::{InquiryError, sdk_error_message};

const KEY_ATTR: &str = "id";
const REVIEW_TEXT_ATTR: &str = "reviewText";
const CATEGORY_ATTR: &str = "category";
const ANSWER_ATTR: &str = "answer";
const STATUS_ATTR: &str = "status";

/// `InquiryStore` backed by a single DynamoDB table keyed on the string `id`.
#[derive(Debug, Clone)]
pub struct DynamoInquiryStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoInquiryStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}

/// Decodes a raw attribute map. Missing or non-string attributes read as
/// absent; a missing review text becomes an empty string.
#[must_use]
pub fn item_from_attributes(item: &HashMap<String, AttributeValue>) -> InquiryItem {
    InquiryItem {
        id: string_attr(item, KEY_ATTR).unwrap_or_default(),
        review_text: string_attr(item, REVIEW_TEXT_ATTR).unwrap_or_default(),
        category: string_attr(item, CATEGORY_ATTR),
        answer: string_attr(item, ANSWER_ATTR),
        status: string_attr(item, STATUS_ATTR),
    }
}

/// `SET #<field> = :<field>, #status = :status`. Both names are aliased;
/// `status` is a DynamoDB reserved word.
#[must_use]
pub fn update_expression(field: &str) -> String {
    format!("SET #{field} = :{field}, #{STATUS_ATTR} = :{STATUS_ATTR}")
}

#[async_trait]
impl InquiryStore for DynamoInquiryStore {
    async fn get_inquiry(&self, id: &str) -> Result<Option<InquiryItem>, InquiryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTR, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| InquiryError::StoreError(sdk_error_message("dynamodb get_item", &e)))?;

        Ok(output.item().map(item_from_attributes))
    }

    async fn update_inquiry(&self, id: &str, update: &InquiryUpdate) -> Result<(), InquiryError> {
        let (field, value) = update.field();
        let status = update.status().as_str();
        debug!(inquiry_id = %id, field, status, "Updating inquiry");

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTR, AttributeValue::S(id.to_string()))
            .update_expression(update_expression(field))
            .expression_attribute_names(format!("#{field}"), field)
            .expression_attribute_names(format!("#{STATUS_ATTR}"), STATUS_ATTR)
            .expression_attribute_values(format!(":{field}"), AttributeValue::S(value.to_string()))
            .expression_attribute_values(
                format!(":{STATUS_ATTR}"),
                AttributeValue::S(status.to_string()),
            )
            .send()
            .await
            .map_err(|e| {
                InquiryError::StoreError(sdk_error_message("dynamodb update_item", &e))
            })?;

        Ok(())
    }
}
