use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    ItemNotReceived,
    DuplicateCharge,
    WrongItemDelivered,
    ChangedMind,
    Other,
}

impl RefundReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundReason::ItemNotReceived => "Item not received",
            RefundReason::DuplicateCharge => "Duplicate charge",
            RefundReason::WrongItemDelivered => "Wrong item delivered",
            RefundReason::ChangedMind => "Changed my mind",
            RefundReason::Other => "Other",
        }
    }

    /// Numbered menu entries, in the order they are offered to the customer.
    pub const MENU: [(&'static str, RefundReason); 5] = [
        ("1", RefundReason::ItemNotReceived),
        ("2", RefundReason::DuplicateCharge),
        ("3", RefundReason::WrongItemDelivered),
        ("4", RefundReason::ChangedMind),
        ("5", RefundReason::Other),
    ];

    /// Free-text phrases accepted in place of a menu number, lowercase.
    pub const PHRASES: [(&'static str, RefundReason); 7] = [
        ("item not received", RefundReason::ItemNotReceived),
        ("duplicate charge", RefundReason::DuplicateCharge),
        ("wrong item delivered", RefundReason::WrongItemDelivered),
        ("changed my mind", RefundReason::ChangedMind),
        ("other", RefundReason::Other),
        ("something else", RefundReason::Other),
        ("difficult reason", RefundReason::Other),
    ];
}

impl fmt::Display for RefundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundField {
    TransactionId,
    Date,
    Amount,
    Reason,
}

impl RefundField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundField::TransactionId => "transaction_id",
            RefundField::Date => "date",
            RefundField::Amount => "amount",
            RefundField::Reason => "reason",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RefundRecord {
    pub transaction_id: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
    pub reason: Option<RefundReason>,
}

impl RefundRecord {
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<RefundField> {
        let mut missing = Vec::new();
        if self.transaction_id.is_none() {
            missing.push(RefundField::TransactionId);
        }
        if self.date.is_none() {
            missing.push(RefundField::Date);
        }
        if self.amount.is_none() {
            missing.push(RefundField::Amount);
        }
        if self.reason.is_none() {
            missing.push(RefundField::Reason);
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        *self == RefundRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_incomplete() {
        let record = RefundRecord::default();
        assert!(!record.is_complete());
        assert!(record.is_empty());
        assert_eq!(
            record.missing_fields(),
            vec![
                RefundField::TransactionId,
                RefundField::Date,
                RefundField::Amount,
                RefundField::Reason
            ]
        );
    }

    #[test]
    fn test_complete_requires_every_field() {
        let mut record = RefundRecord {
            transaction_id: Some("55".to_string()),
            date: Some("12 May".to_string()),
            amount: Some("40".to_string()),
            reason: None,
        };
        assert!(!record.is_complete());
        assert_eq!(record.missing_fields(), vec![RefundField::Reason]);

        record.reason = Some(RefundReason::Other);
        assert!(record.is_complete());
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(RefundReason::ChangedMind.to_string(), "Changed my mind");
        assert_eq!(RefundReason::DuplicateCharge.as_str(), "Duplicate charge");
    }
}
