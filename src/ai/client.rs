//! Bedrock `InvokeModel` client for Anthropic models
//!
//! Encodes the messages-API request body and decodes the text blocks out of
//! the response.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ModelReply, ModelRequest, TextModel};
use crate::errors::{InquiryError, sdk_error_message};

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Serialize)]
pub struct AnthropicRequestBody<'a> {
    pub anthropic_version: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage<'a>>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct AnthropicMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicResponseBody {
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicContentBlock {
    #[serde(default)]
    pub text: String,
}

/// Serializes a request into the JSON body Bedrock forwards to the model.
pub fn encode_request(request: &ModelRequest) -> Result<Vec<u8>, InquiryError> {
    let body = AnthropicRequestBody {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens: request.max_tokens,
        messages: vec![AnthropicMessage {
            role: "user",
            content: &request.prompt,
        }],
        temperature: request.temperature,
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn decode_response(bytes: &[u8]) -> Result<ModelReply, InquiryError> {
    let body: AnthropicResponseBody = serde_json::from_slice(bytes)?;
    Ok(ModelReply {
        texts: body.content.into_iter().map(|block| block.text).collect(),
    })
}

/// Text model reached through the Bedrock runtime.
#[derive(Debug, Clone)]
pub struct BedrockTextModel {
    client: BedrockRuntimeClient,
    model_id: String,
}

impl BedrockTextModel {
    #[must_use]
    pub fn new(client: BedrockRuntimeClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl TextModel for BedrockTextModel {
    async fn invoke(&self, request: &ModelRequest) -> Result<ModelReply, InquiryError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Bedrock prompt:\n{}", request.prompt);

        let body = encode_request(request)?;
        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| InquiryError::ModelError(sdk_error_message("invoke_model", &e)))?;

        let reply = decode_response(output.body().as_ref())?;
        let blocks = reply.texts.len();
        info!(model_id = %self.model_id, blocks, "Bedrock model replied");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn request_body_matches_messages_api() {
        let request = ModelRequest {
            prompt: "分類してください".to_string(),
            max_tokens: 50,
            temperature: 0.1,
        };
        let bytes = encode_request(&request).unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(json["max_tokens"], 50);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "分類してください");
        assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn decodes_text_blocks() {
        let raw = r#"{"id":"msg_1","content":[{"type":"text","text":" 質問 "}],"stop_reason":"end_turn"}"#;
        let reply = decode_response(raw.as_bytes()).unwrap();
        assert_eq!(reply.first_text(), Some(" 質問 "));
    }

    #[test]
    fn missing_content_is_an_empty_reply() {
        let reply = decode_response(br#"{"stop_reason":"max_tokens"}"#).unwrap();
        assert!(reply.first_text().is_none());
    }

    #[test]
    fn malformed_body_is_a_serialization_error() {
        let err = decode_response(b"not json").unwrap_err();
        assert!(matches!(err, InquiryError::SerializationError(_)));
    }
}
