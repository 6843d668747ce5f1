// Lambda entry point for the create-answer function

use inquiry_triage::ai::BedrockKnowledgeBase;
use inquiry_triage::answer;
use inquiry_triage::core::config::AppConfig;
use inquiry_triage::store::DynamoInquiryStore;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    inquiry_triage::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let knowledge_base_id = config.require_knowledge_base_id().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        knowledge_base_id,
        model_arn = %config.model_arn(),
        "create-answer starting"
    );

    let sdk_config = config.load_sdk_config().await;
    let store = DynamoInquiryStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.inquiry_table_name.clone(),
    );
    let kb = BedrockKnowledgeBase::new(
        aws_sdk_bedrockagentruntime::Client::new(&sdk_config),
        knowledge_base_id,
        config.model_arn(),
    );

    run(service_fn(|event| answer::handler(&store, &kb, event))).await
}
