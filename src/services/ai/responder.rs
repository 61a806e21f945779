use crate::errors::AppError;
use crate::models::{ConversationMessage, SessionIdentity};
use crate::services::ai::{LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You are the Banking Agent of a simulated bank assistant. Handle balances, transfers, and general questions safely.

Rules:
- Never ask for or repeat a PIN, password, card number or SSN.
- Refunds and appointment bookings are handled by dedicated flows. If the customer wants one, tell them to mention "refund" or "book".
- Balances are simulated. Do not invent account figures.
- Keep replies short, friendly and plain text (no markdown).
"#;

pub fn build_system_prompt(identity: &SessionIdentity) -> String {
    format!(
        "{SYSTEM_PROMPT}\nCustomer name: {}\nAccount ID: {}",
        identity.customer_name, identity.account_id
    )
}

/// Asks the provider for a reply to the latest turn in `history`.
pub async fn generate_reply(
    llm: &dyn LlmProvider,
    history: &[ConversationMessage],
    identity: &SessionIdentity,
) -> Result<String, AppError> {
    let messages: Vec<Message> = history.iter().map(Message::from).collect();
    let system = build_system_prompt(identity);

    let response = llm
        .chat(&system, &messages)
        .await
        .map_err(|e| AppError::Ai(format!("{e:#}")))?;

    let reply = clean_reply(&response);
    if reply.is_empty() {
        return Err(AppError::Ai("empty reply from provider".to_string()));
    }
    Ok(reply)
}

fn clean_reply(response: &str) -> String {
    let trimmed = response.trim();
    let unfenced = trimmed
        .strip_prefix("```text")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);
    unfenced.trim().to_string()
}
