mod common;

use common::{FakeKnowledgeBase, FakeTextModel, MemoryStore};
use inquiry_triage::core::models::InquiryEvent;
use inquiry_triage::{answer, classifier};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;

fn event(payload: serde_json::Value) -> LambdaEvent<InquiryEvent> {
    let payload: InquiryEvent = serde_json::from_value(payload).unwrap();
    LambdaEvent::new(payload, Context::default())
}

#[test]
fn test_event_without_id_deserializes_to_empty_id() {
    let payload: InquiryEvent = serde_json::from_value(json!({})).unwrap();
    assert!(payload.id.is_empty());
}

#[tokio::test]
async fn test_classifier_handler_response_shape() {
    let store = MemoryStore::new().with_inquiry("inq-1", "とても使いやすいです！");
    let model = FakeTextModel::replying("ポジティブな感想");

    let response = classifier::handler(&store, &model, event(json!({"id": "inq-1"})))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"inquiry_id": "inq-1", "category": "ポジティブな感想", "status": "success"})
    );
}

#[tokio::test]
async fn test_classifier_handler_rejects_missing_id() {
    let store = MemoryStore::new();
    let model = FakeTextModel::replying("質問");

    let err = classifier::handler(&store, &model, event(json!({})))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("missing inquiry id"));
}

#[tokio::test]
async fn test_answer_handler_response_shape() {
    let store = MemoryStore::new().with_inquiry("inq-1", "営業時間を教えてください");
    let kb = FakeKnowledgeBase::replying("平日9時から18時までです。");

    let response = answer::handler(&store, &kb, event(json!({"id": "inq-1"})))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"inquiry_id": "inq-1", "answer": "平日9時から18時までです。", "status": "success"})
    );
}

#[tokio::test]
async fn test_answer_handler_surfaces_not_found() {
    let store = MemoryStore::new();
    let kb = FakeKnowledgeBase::replying("unused");

    let err = answer::handler(&store, &kb, event(json!({"id": "nope"})))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Inquiry not found: nope");
    assert!(store.updates().is_empty());
}
