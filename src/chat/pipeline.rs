use super::{
    format::render_emphasis,
    types::{Message, Role},
};
use crate::{
    Error, Result,
    config::{ChatConfig, LlmConfig},
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenRouterClient},
};
use tracing::{debug, info, warn};

/// Turns one user message plus the prior transcript into assistant text.
pub struct ChatPipeline {
    llm_client: Box<dyn LlmClient>,
    llm_config: LlmConfig,
    chat_config: ChatConfig,
}

impl ChatPipeline {
    pub fn new(llm_config: LlmConfig, chat_config: ChatConfig) -> Self {
        let llm_client = Box::new(OpenRouterClient::new(&llm_config));
        Self::with_client(llm_client, llm_config, chat_config)
    }

    pub fn with_client(
        llm_client: Box<dyn LlmClient>,
        llm_config: LlmConfig,
        chat_config: ChatConfig,
    ) -> Self {
        info!(
            "Chat pipeline ready (model: {}, {} creator phrases)",
            llm_config.model,
            chat_config.creator_phrases.len()
        );
        Self {
            llm_client,
            llm_config,
            chat_config,
        }
    }

    pub fn chat_config(&self) -> &ChatConfig {
        &self.chat_config
    }

    /// Produces the assistant reply for `user_text`.
    ///
    /// Creator questions are answered locally. Everything else costs exactly
    /// one call to the completion endpoint, which is never retried.
    pub async fn send_turn(&self, user_text: &str, prior: &[Message]) -> Result<String> {
        if user_text.trim().is_empty() {
            return Err(Error::InputRejected);
        }

        if self.is_creator_question(user_text) {
            debug!("Answering creator question locally");
            return Ok(self.chat_config.attribution.clone());
        }

        let request = self.build_request(user_text, prior);
        let response = self
            .llm_client
            .create_chat_completion(request)
            .await
            .inspect_err(|e| warn!("Completion request failed: {}", e))?;

        let content = response
            .first_content()
            .ok_or_else(|| Error::remote("response contained no completion text"))?;

        if self.chat_config.render_emphasis {
            Ok(render_emphasis(content))
        } else {
            Ok(content.to_string())
        }
    }

    pub fn is_creator_question(&self, user_text: &str) -> bool {
        let lowered = user_text.to_lowercase();
        self.chat_config
            .creator_phrases
            .iter()
            .any(|phrase| lowered.contains(&phrase.to_lowercase()))
    }

    /// System instruction first, then the prior turns in order, then the new user turn.
    pub fn build_request(&self, user_text: &str, prior: &[Message]) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(prior.len() + 2);
        messages.push(ChatMessage::system(&self.chat_config.system_prompt));
        messages.extend(prior.iter().map(|m| match m.role {
            Role::User => ChatMessage::user(&m.content),
            Role::Assistant => ChatMessage::assistant(&m.content),
        }));
        messages.push(ChatMessage::user(user_text));

        ChatCompletionRequest {
            model: self.llm_config.model.clone(),
            messages,
            max_tokens: self.llm_config.max_tokens,
            temperature: self.llm_config.temperature,
            presence_penalty: self.llm_config.presence_penalty,
            frequency_penalty: self.llm_config.frequency_penalty,
        }
    }
}
