/// Inquiry triage - two Lambdas that classify customer feedback and draft answers.
///
/// # Architecture
///
/// Each Lambda is triggered with a single inquiry id (`{"id": "..."}`):
/// 1. `judge-category` reads the inquiry from DynamoDB, asks a Bedrock model
///    to pick one of a fixed set of categories and writes back
///    `category` + `status = "categorized"`.
/// 2. `create-answer` reads the inquiry, asks a Bedrock knowledge base for a
///    grounded reply in a tone chosen by category and writes back
///    `answer` + `status = "answered"`. Generation failures degrade to a
///    canned apology instead of failing the invocation.
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB for inquiry records
/// - Bedrock `InvokeModel` and `RetrieveAndGenerate` for the AI calls
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use inquiry_triage::ai::BedrockTextModel;
/// use inquiry_triage::classifier::classify_inquiry;
/// use inquiry_triage::core::config::AppConfig;
/// use inquiry_triage::store::DynamoInquiryStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     inquiry_triage::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let sdk_config = config.load_sdk_config().await;
///     let store = DynamoInquiryStore::new(
///         aws_sdk_dynamodb::Client::new(&sdk_config),
///         config.inquiry_table_name.clone(),
///     );
///     let model = BedrockTextModel::new(
///         aws_sdk_bedrockruntime::Client::new(&sdk_config),
///         config.model_id.clone(),
///     );
///
///     let result = classify_inquiry(&store, &model, "inquiry-123").await?;
///     println!("{} -> {}", result.inquiry_id, result.category);
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod answer;
pub mod classifier;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod store;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. The level defaults to `info` and can be
/// changed with `RUST_LOG`. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// inquiry_triage::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
