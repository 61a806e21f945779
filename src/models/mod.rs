pub mod booking;
pub mod conversation;
pub mod guardrail;
pub mod intent;
pub mod refund;

pub use booking::{day_name, BookingRecord, WEEKDAYS};
pub use conversation::{ConversationMessage, ConversationState, SessionIdentity};
pub use guardrail::GuardrailVerdict;
pub use intent::Intent;
pub use refund::{RefundField, RefundReason, RefundRecord};
