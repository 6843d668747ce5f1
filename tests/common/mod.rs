// In-memory stand-ins for DynamoDB and Bedrock used by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use inquiry_triage::ai::{KnowledgeBase, ModelReply, ModelRequest, TextModel};
use inquiry_triage::core::models::{InquiryItem, InquiryUpdate};
use inquiry_triage::errors::InquiryError;
use inquiry_triage::store::InquiryStore;

#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, InquiryItem>>,
    updates: Mutex<Vec<(String, InquiryUpdate)>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inquiry(self, id: &str, review_text: &str) -> Self {
        self.with_item(InquiryItem {
            id: id.to_string(),
            review_text: review_text.to_string(),
            status: Some("unprocessed".to_string()),
            ..InquiryItem::default()
        })
    }

    pub fn with_item(self, item: InquiryItem) -> Self {
        self.items.lock().unwrap().insert(item.id.clone(), item);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn item(&self, id: &str) -> Option<InquiryItem> {
        self.items.lock().unwrap().get(id).cloned()
    }

    pub fn updates(&self) -> Vec<(String, InquiryUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl InquiryStore for MemoryStore {
    async fn get_inquiry(&self, id: &str) -> Result<Option<InquiryItem>, InquiryError> {
        if self.fail_reads {
            return Err(InquiryError::StoreError("get_item: throttled".to_string()));
        }
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn update_inquiry(&self, id: &str, update: &InquiryUpdate) -> Result<(), InquiryError> {
        if self.fail_writes {
            return Err(InquiryError::StoreError(
                "update_item: ConditionalCheckFailed".to_string(),
            ));
        }
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));

        // Mirrors UpdateItem: creates the key if absent, touches only owned fields.
        let mut items = self.items.lock().unwrap();
        let item = items.entry(id.to_string()).or_insert_with(|| InquiryItem {
            id: id.to_string(),
            ..InquiryItem::default()
        });
        match update {
            InquiryUpdate::Categorized { category } => item.category = Some(category.clone()),
            InquiryUpdate::Answered { answer } => item.answer = Some(answer.clone()),
        }
        item.status = Some(update.status().as_str().to_string());
        Ok(())
    }
}

pub struct FakeTextModel {
    reply: Result<Vec<String>, String>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl FakeTextModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(vec![text.to_string()]),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            reply: Ok(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for FakeTextModel {
    async fn invoke(&self, request: &ModelRequest) -> Result<ModelReply, InquiryError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(texts) => Ok(ModelReply {
                texts: texts.clone(),
            }),
            Err(message) => Err(InquiryError::ModelError(message.clone())),
        }
    }
}

pub struct FakeKnowledgeBase {
    reply: Result<Option<String>, String>,
    inputs: Mutex<Vec<String>>,
}

impl FakeKnowledgeBase {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(Some(text.to_string())))
    }

    pub fn without_output() -> Self {
        Self::with_reply(Ok(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(message.to_string()))
    }

    fn with_reply(reply: Result<Option<String>, String>) -> Self {
        Self {
            reply,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeBase for FakeKnowledgeBase {
    async fn retrieve_and_generate(&self, input: &str) -> Result<Option<String>, InquiryError> {
        self.inputs.lock().unwrap().push(input.to_string());
        self.reply
            .clone()
            .map_err(InquiryError::ModelError)
    }
}
