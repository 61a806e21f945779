use std::env;

use crate::errors::AppError;

pub const GEMINI_OPENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Clone, Debug, PartialEq)]
pub enum LlmBackend {
    OpenAiCompatible,
    Ollama,
    Disabled,
}

impl LlmBackend {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "gemini" => Ok(LlmBackend::OpenAiCompatible),
            "ollama" => Ok(LlmBackend::Ollama),
            "none" | "" => Ok(LlmBackend::Disabled),
            other => Err(AppError::Config(format!("unknown LLM_PROVIDER: {other}"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub llm_provider: String,
    pub gemini_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub simulated_balance: u64,
    pub history_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| GEMINI_OPENAI_BASE_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            simulated_balance: env::var("SIMULATED_BALANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            history_limit: env::var("HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }

    pub fn backend(&self) -> Result<LlmBackend, AppError> {
        LlmBackend::parse(&self.llm_provider)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_provider: "none".to_string(),
            gemini_api_key: String::new(),
            llm_base_url: GEMINI_OPENAI_BASE_URL.to_string(),
            llm_model: "gemini-2.0-flash".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            simulated_balance: 1000,
            history_limit: 20,
        }
    }
}
