#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use stocksage::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, LlmClient},
};
use tokio::sync::Notify;

use super::test_utils::create_mock_chat_response;

/// Mock LLM client that records requests and replays canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, text: &str) -> Self {
        self.add_response(create_mock_chat_response(text));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn add_response(&self, response: ChatCompletionResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::remote(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::remote("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// Client that parks every call until the test releases it.
#[derive(Debug, Clone, Default)]
pub struct GatedLlmClient {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    pub reply: String,
}

impl GatedLlmClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl LlmClient for GatedLlmClient {
    async fn create_chat_completion(
        &self,
        _request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(create_mock_chat_response(&self.reply))
    }
}
