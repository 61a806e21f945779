use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LlmProvider, Message};

/// Any endpoint speaking the OpenAI chat completions protocol (Gemini's included).
pub struct OpenAiCompatibleProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

impl OpenAiCompatibleProvider {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    fn request<'a>(&'a self, system_prompt: &str, messages: &[Message]) -> CompletionRequest<'a> {
        let mut all = Vec::with_capacity(messages.len() + 1);
        all.push(Message {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        all.extend(messages.iter().cloned());

        CompletionRequest {
            model: &self.model,
            messages: all,
            temperature: 0.7,
        }
    }
}

/// First choice's content, or an error when the body carries none.
fn parse_completion(body: &str) -> anyhow::Result<String> {
    let response: CompletionResponse =
        serde_json::from_str(body).context("failed to parse chat completions response")?;

    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| anyhow::anyhow!("no choices in chat completions response"))
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request(system_prompt, messages))
            .send()
            .await
            .context("failed to call chat completions API")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read chat completions response")?;

        if !status.is_success() {
            anyhow::bail!("chat completions API returned {status}: {body}");
        }

        parse_completion(&body)
    }
}
