use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Quit,
    Refund,
    Booking,
    Balance,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Quit => "quit",
            Intent::Refund => "refund",
            Intent::Booking => "booking",
            Intent::Balance => "balance",
            Intent::General => "general",
        }
    }
}
