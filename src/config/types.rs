use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Completion endpoint and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f32,
    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f32,
}

/// Prompting and conversation behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_creator_phrases")]
    pub creator_phrases: Vec<String>,
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    #[serde(default = "default_render_emphasis")]
    pub render_emphasis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            presence_penalty: default_presence_penalty(),
            frequency_penalty: default_frequency_penalty(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            attribution: default_attribution(),
            creator_phrases: default_creator_phrases(),
            fallback_message: default_fallback_message(),
            greeting: default_greeting(),
            suggestions: default_suggestions(),
            render_emphasis: default_render_emphasis(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "deepseek/deepseek-r1:free".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_presence_penalty() -> f32 {
    0.6
}

fn default_frequency_penalty() -> f32 {
    0.3
}

fn default_system_prompt() -> String {
    "You are StockSage AI, a friendly stock market prediction assistant.
Keep your responses simple and easy to understand, written as short plain paragraphs.
Use everyday language and avoid technical jargon.
For Indian stocks, use the ₹ symbol (e.g., ₹500).
For US stocks, use the $ symbol (e.g., $50).
Be concise and focus on practical advice.

Formatting rules:
- Do not use headings, tables or bullet lists.
- Use numbers with 2 decimal places for prices and percentages.
- Format large numbers with appropriate commas.
- Use **text** to highlight the most important figures.

Example: The stock price of **TCS** is ₹3,542.60, showing a change of **+1.23%** today."
        .to_string()
}

fn default_attribution() -> String {
    "I was created by Atharv Hatwar. I'm here to help you with stock market predictions and analysis."
        .to_string()
}

fn default_creator_phrases() -> Vec<String> {
    [
        "who created you",
        "who made you",
        "who built you",
        "who designed you",
        "who programmed you",
        "who owns you",
        "who developed you",
        "your creator",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_fallback_message() -> String {
    "I'm sorry, I encountered an error while processing your request. Please try again later."
        .to_string()
}

fn default_greeting() -> Option<String> {
    Some(
        "Hello! I'm StockSage AI, your personal stock market prediction assistant. \
         I can help you analyze stocks, predict market trends, and provide investment insights \
         for both Indian and global markets. How can I assist you today?"
            .to_string(),
    )
}

fn default_suggestions() -> Vec<String> {
    [
        "Predict RELIANCE stock for next week",
        "Should I invest in HDFC Bank?",
        "Compare TCS and Infosys",
        "What's your outlook on NIFTY for next month?",
        "Who created you?",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_render_emphasis() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
