use serde::{Deserialize, Serialize};

pub const REASON_VALID: &str = "Valid input";
pub const REASON_EMPTY: &str = "Input cannot be empty";
pub const REASON_SENSITIVE: &str = "Sensitive information is not allowed";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardrailVerdict {
    Validation { valid: bool, reason: String },
    Redaction { redacted_text: String },
}

impl GuardrailVerdict {
    pub fn valid() -> Self {
        GuardrailVerdict::Validation {
            valid: true,
            reason: REASON_VALID.to_string(),
        }
    }

    pub fn rejected(reason: &str) -> Self {
        GuardrailVerdict::Validation {
            valid: false,
            reason: reason.to_string(),
        }
    }

    /// Redaction verdicts never block.
    pub fn is_valid(&self) -> bool {
        match self {
            GuardrailVerdict::Validation { valid, .. } => *valid,
            GuardrailVerdict::Redaction { .. } => true,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            GuardrailVerdict::Validation { reason, .. } => Some(reason.as_str()),
            GuardrailVerdict::Redaction { .. } => None,
        }
    }

    pub fn redacted_text(&self) -> Option<&str> {
        match self {
            GuardrailVerdict::Redaction { redacted_text } => Some(redacted_text.as_str()),
            GuardrailVerdict::Validation { .. } => None,
        }
    }
}
