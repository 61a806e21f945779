pub mod ollama;
pub mod openai;
pub mod responder;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::ConversationMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl From<&ConversationMessage> for Message {
    fn from(m: &ConversationMessage) -> Self {
        Self {
            role: m.role.clone(),
            content: m.content.clone(),
        }
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}
