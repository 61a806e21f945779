use crate::config::AppConfig;
use crate::services::ai::LlmProvider;

pub struct AppState {
    pub config: AppConfig,
    /// `None` when no responder is configured; general questions then get the capability listing.
    pub llm: Option<Box<dyn LlmProvider>>,
}
