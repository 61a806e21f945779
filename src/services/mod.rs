pub mod ai;
pub mod banking;
pub mod conversation;
pub mod extraction;
pub mod guardrail;
pub mod tracker;
