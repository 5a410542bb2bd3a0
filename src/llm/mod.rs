mod client;
mod types;

pub use client::{LlmClient, OpenRouterClient};
pub use types::*;
