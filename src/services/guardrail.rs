use std::sync::LazyLock;

use regex::Regex;

use crate::models::guardrail::{REASON_EMPTY, REASON_SENSITIVE};
use crate::models::GuardrailVerdict;

pub const REDACTION_TOKEN: &str = "[REDACTED]";

/// Whole-word, case-insensitive match on terms that must never cross the boundary.
static SENSITIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(pin|password|card|ssn)\b").unwrap());

pub fn validate_input(text: &str) -> GuardrailVerdict {
    if text.trim().is_empty() {
        return GuardrailVerdict::rejected(REASON_EMPTY);
    }
    if SENSITIVE_RE.is_match(text) {
        return GuardrailVerdict::rejected(REASON_SENSITIVE);
    }
    GuardrailVerdict::valid()
}

pub fn redact_output(text: &str) -> String {
    SENSITIVE_RE.replace_all(text, REDACTION_TOKEN).into_owned()
}

pub trait Guardrail: Send + Sync {
    fn name(&self) -> &str;

    /// `None` stands for an absent reply and is checked as empty text.
    fn check(&self, text: Option<&str>) -> GuardrailVerdict;
}

pub struct InputGuard;

impl Guardrail for InputGuard {
    fn name(&self) -> &str {
        "UserInputGuard"
    }

    fn check(&self, text: Option<&str>) -> GuardrailVerdict {
        validate_input(text.unwrap_or_default())
    }
}

pub struct OutputGuard;

impl Guardrail for OutputGuard {
    fn name(&self) -> &str {
        "OutputGuard"
    }

    fn check(&self, text: Option<&str>) -> GuardrailVerdict {
        GuardrailVerdict::Redaction {
            redacted_text: redact_output(text.unwrap_or_default()),
        }
    }
}
