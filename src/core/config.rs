use std::env;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::errors::InquiryError;

/// Foundation model used by both handlers unless `BEDROCK_MODEL_ID` says otherwise.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inquiry_table_name: String,
    pub aws_region: String,
    pub knowledge_base_id: Option<String>,
    pub model_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InquiryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InquiryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| InquiryError::ConfigError(format!("{key} is not set")))
        };

        Ok(Self {
            inquiry_table_name: require("INQUIRY_TABLE_NAME")?,
            aws_region: require("AWS_REGION")?,
            knowledge_base_id: get("BEDROCK_KNOWLEDGE_BASE_ID"),
            model_id: get("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        })
    }

    /// Only the answer handler talks to the knowledge base, so the id is
    /// checked where it is needed rather than in `from_env`.
    pub fn require_knowledge_base_id(&self) -> Result<&str, InquiryError> {
        self.knowledge_base_id
            .as_deref()
            .ok_or_else(|| InquiryError::ConfigError("BEDROCK_KNOWLEDGE_BASE_ID is not set".into()))
    }

    /// ARN form of the model id, as `RetrieveAndGenerate` expects.
    #[must_use]
    pub fn model_arn(&self) -> String {
        format!(
            "arn:aws:bedrock:{}::foundation-model/{}",
            self.aws_region, self.model_id
        )
    }

    /// Shared AWS SDK configuration for the configured region. Loaded once at
    /// cold start; every client built from it is reused across invocations.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.aws_region.clone()))
            .load()
            .await
    }
}
