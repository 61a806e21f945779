use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LlmProvider, Message};

/// Local Ollama server, non-streaming `/api/chat`.
pub struct OllamaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<Message>,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let mut all = Vec::with_capacity(messages.len() + 1);
        all.push(Message {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        all.extend(messages.iter().cloned());

        let request = ChatRequest {
            model: &self.model,
            messages: all,
            stream: false,
        };

        let data: ChatResponse = self
            .client
            .post(format!("{}/api/chat", self.url))
            .json(&request)
            .send()
            .await
            .context("failed to call Ollama chat API")?
            .error_for_status()
            .context("Ollama returned an error status")?
            .json()
            .await
            .context("failed to parse Ollama response")?;

        data.message
            .map(|m| m.content)
            .ok_or_else(|| anyhow::anyhow!("missing message in Ollama response"))
    }
}
