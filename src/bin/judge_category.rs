// Lambda entry point for the judge-category function

use inquiry_triage::ai::BedrockTextModel;
use inquiry_triage::classifier;
use inquiry_triage::core::config::AppConfig;
use inquiry_triage::store::DynamoInquiryStore;
use lambda_runtime::{Error, run, service_fn};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    inquiry_triage::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Clients are built once per container and shared by every invocation.
    let sdk_config = config.load_sdk_config().await;
    let store = DynamoInquiryStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.inquiry_table_name.clone(),
    );
    let model = BedrockTextModel::new(
        aws_sdk_bedrockruntime::Client::new(&sdk_config),
        config.model_id.clone(),
    );

    run(service_fn(|event| classifier::handler(&store, &model, event))).await
}
