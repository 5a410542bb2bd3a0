#![allow(dead_code)]

use serde_json::{Value, json};
use stocksage::{
    Result,
    chat::{ChatPipeline, ChatSession},
    config::{ChatConfig, LlmConfig},
    llm::{ChatCompletionResponse, LlmClient},
};
use tempfile::TempDir;
use tokio::fs;

pub const TEST_API_KEY: &str = "test-api-key";

/// LLM config pointed at `base_url` with sampling values that survive an
/// f32 -> JSON round trip exactly.
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        model: "test/model".to_string(),
        max_tokens: 256,
        temperature: 0.5,
        presence_penalty: 0.25,
        frequency_penalty: 0.125,
    }
}

pub fn create_test_chat_config() -> ChatConfig {
    ChatConfig {
        system_prompt: "You are a test assistant.".to_string(),
        ..ChatConfig::default()
    }
}

pub fn completion_body(text: &str) -> Value {
    json!({
        "id": "gen-123",
        "model": "test/model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

pub fn create_mock_chat_response(text: &str) -> ChatCompletionResponse {
    serde_json::from_value(completion_body(text)).expect("valid completion body")
}

pub fn create_test_session(client: impl LlmClient + 'static) -> ChatSession {
    let pipeline = ChatPipeline::with_client(
        Box::new(client),
        create_test_llm_config("http://unused.invalid"),
        create_test_chat_config(),
    );
    ChatSession::new(pipeline)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1"
  api_key: "file-api-key"
  model: "test/model"
  max_tokens: 512

chat:
  system_prompt: "Answer in one sentence."
  render_emphasis: false
  greeting: null
  suggestions: []
"#;
