use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use bank_assistant::config::{AppConfig, LlmBackend};
use bank_assistant::handlers::console;
use bank_assistant::services::ai::ollama::OllamaProvider;
use bank_assistant::services::ai::openai::OpenAiCompatibleProvider;
use bank_assistant::services::ai::LlmProvider;
use bank_assistant::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries the conversation, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();

    let llm: Option<Box<dyn LlmProvider>> = match config.backend()? {
        LlmBackend::OpenAiCompatible if config.gemini_api_key.is_empty() => {
            tracing::warn!("GEMINI_API_KEY not set, general questions get the built-in reply");
            None
        }
        LlmBackend::OpenAiCompatible => {
            tracing::info!(
                "using OpenAI-compatible LLM provider (model: {}, url: {})",
                config.llm_model,
                config.llm_base_url
            );
            Some(Box::new(OpenAiCompatibleProvider::new(
                config.llm_base_url.clone(),
                config.gemini_api_key.clone(),
                config.llm_model.clone(),
            )))
        }
        LlmBackend::Ollama => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Some(Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )))
        }
        LlmBackend::Disabled => {
            tracing::info!("LLM provider disabled");
            None
        }
    };

    let state = Arc::new(AppState { config, llm });

    console::run(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    Ok(())
}
