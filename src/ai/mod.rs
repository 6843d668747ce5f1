//! Bedrock text generation and knowledge-base retrieval

pub mod client;
pub mod knowledge_base;

use async_trait::async_trait;

use crate::errors::InquiryError;

pub use client::BedrockTextModel;
pub use knowledge_base::BedrockKnowledgeBase;

/// A single-turn generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Text blocks returned by the model, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReply {
    pub texts: Vec<String>,
}

impl ModelReply {
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.texts.first().map(String::as_str)
    }
}

#[async_trait]
pub trait TextModel: Send + Sync {
    async fn invoke(&self, request: &ModelRequest) -> Result<ModelReply, InquiryError>;
}

#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Retrieve from the corpus and generate an answer for `input`.
    /// `Ok(None)` means the service answered without any generated text.
    async fn retrieve_and_generate(&self, input: &str) -> Result<Option<String>, InquiryError>;
}
