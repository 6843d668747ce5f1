use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::Client as BedrockAgentClient;
use aws_sdk_bedrockagentruntime::types::{
    KnowledgeBaseRetrieveAndGenerateConfiguration, RetrieveAndGenerateConfiguration,
    RetrieveAndGenerateInput, RetrieveAndGenerateType,
};
use tracing::info;

use super::KnowledgeBase;
use crate::errors::{InquiryError, sdk_error_message};

/// Retrieval-augmented generation scoped to one Bedrock knowledge base.
#[derive(Debug, Clone)]
pub struct BedrockKnowledgeBase {
    client: BedrockAgentClient,
    knowledge_base_id: String,
    model_arn: String,
}

impl BedrockKnowledgeBase {
    #[must_use]
    pub fn new(
        client: BedrockAgentClient,
        knowledge_base_id: impl Into<String>,
        model_arn: impl Into<String>,
    ) -> Self {
        Self {
            client,
            knowledge_base_id: knowledge_base_id.into(),
            model_arn: model_arn.into(),
        }
    }

    fn configuration(&self) -> Result<RetrieveAndGenerateConfiguration, InquiryError> {
        let kb = KnowledgeBaseRetrieveAndGenerateConfiguration::builder()
            .knowledge_base_id(&self.knowledge_base_id)
            .model_arn(&self.model_arn)
            .build()
            .map_err(|e| InquiryError::ModelError(format!("knowledge base config: {e}")))?;

        RetrieveAndGenerateConfiguration::builder()
            .r#type(RetrieveAndGenerateType::KnowledgeBase)
            .knowledge_base_configuration(kb)
            .build()
            .map_err(|e| InquiryError::ModelError(format!("retrieve config: {e}")))
    }
}

#[async_trait]
impl KnowledgeBase for BedrockKnowledgeBase {
    async fn retrieve_and_generate(&self, input: &str) -> Result<Option<String>, InquiryError> {
        #[cfg(feature = "debug-logs")]
        info!("Using knowledge base input:\n{}", input);

        let input = RetrieveAndGenerateInput::builder()
            .text(input)
            .build()
            .map_err(|e| InquiryError::ModelError(format!("retrieve input: {e}")))?;

        let output = self
            .client
            .retrieve_and_generate()
            .input(input)
            .retrieve_and_generate_configuration(self.configuration()?)
            .send()
            .await
            .map_err(|e| {
                InquiryError::ModelError(sdk_error_message("retrieve_and_generate", &e))
            })?;

        let citations = output.citations().len();
        info!(
            knowledge_base_id = %self.knowledge_base_id,
            citations,
            "Knowledge base replied"
        );

        Ok(output.output().map(|o| o.text().to_string()))
    }
}
