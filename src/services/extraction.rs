//! Slot extraction strategies.
//!
//! Each extractor looks at one utterance in isolation and returns the value it
//! found for a single slot, if any. Trackers decide what to do with the result.

use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;

use crate::models::{RefundReason, WEEKDAYS};

static TRANSACTION_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2,}\b").unwrap());

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}\s?(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b",
    )
    .unwrap()
});

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\$)?(\d+)").unwrap());

pub trait FieldExtractor<T>: Send + Sync {
    fn extract(&self, text: &str) -> Option<T>;
}

/// First run of two or more digits.
pub struct TransactionIdExtractor;

impl FieldExtractor<String> for TransactionIdExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        TRANSACTION_ID_RE
            .find(text)
            .map(|m| m.as_str().to_string())
    }
}

/// Day of month followed by a month name, captured as written ("12 May", "5June").
pub struct DateExtractor;

impl FieldExtractor<String> for DateExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        DATE_RE.find(text).map(|m| m.as_str().to_string())
    }
}

/// Last digit run in the text. A `$`-prefixed run beats any bare one.
pub struct AmountExtractor;

impl FieldExtractor<String> for AmountExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        let mut last_bare = None;
        let mut last_dollar = None;

        for caps in AMOUNT_RE.captures_iter(text) {
            let digits = caps.get(2).map(|m| m.as_str());
            if caps.get(1).is_some() {
                last_dollar = digits;
            } else {
                last_bare = digits;
            }
        }

        last_dollar.or(last_bare).map(str::to_string)
    }
}

/// Menu number as a standalone token first, then a known phrase.
pub struct ReasonExtractor;

impl FieldExtractor<RefundReason> for ReasonExtractor {
    fn extract(&self, text: &str) -> Option<RefundReason> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if let Some((_, reason)) = RefundReason::MENU
            .iter()
            .find(|(key, _)| tokens.contains(key))
        {
            return Some(*reason);
        }

        let lowered = text.to_lowercase();
        RefundReason::PHRASES
            .iter()
            .find(|(phrase, _)| lowered.contains(phrase))
            .map(|(_, reason)| *reason)
    }
}

pub struct WeekdayExtractor;

impl FieldExtractor<Weekday> for WeekdayExtractor {
    fn extract(&self, text: &str) -> Option<Weekday> {
        let lowered = text.to_lowercase();
        WEEKDAYS
            .iter()
            .find(|(name, _)| lowered.contains(name))
            .map(|(_, day)| *day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_first_match() {
        assert_eq!(TransactionIdExtractor.extract("tx 55 then 66"), Some("55".to_string()));
        assert_eq!(TransactionIdExtractor.extract("reason 2"), None);
        assert_eq!(TransactionIdExtractor.extract("txn 2021 cost $40"), Some("2021".to_string()));
    }

    #[test]
    fn test_date_needs_month_word() {
        assert_eq!(DateExtractor.extract("bought on 12 May"), Some("12 May".to_string()));
        assert_eq!(DateExtractor.extract("it was 5June"), Some("5June".to_string()));
        assert_eq!(DateExtractor.extract("3 sept please"), Some("3 sept".to_string()));
        assert_eq!(
            DateExtractor.extract("tx 55 on 12 May $40"),
            Some("12 May".to_string())
        );
        assert_eq!(DateExtractor.extract("2021 cost"), None);
        assert_eq!(DateExtractor.extract("12 mayonnaise"), None);
    }

    #[test]
    fn test_amount_last_match_wins() {
        assert_eq!(AmountExtractor.extract("txn 2021 cost $40"), Some("40".to_string()));
        assert_eq!(AmountExtractor.extract("40 then 75"), Some("75".to_string()));
        assert_eq!(AmountExtractor.extract("no digits here"), None);
    }

    #[test]
    fn test_amount_prefers_dollar_prefix() {
        assert_eq!(
            AmountExtractor.extract("tx 55 on 12 May $40 reason 2"),
            Some("40".to_string())
        );
        assert_eq!(AmountExtractor.extract("$10 or $25 for order 9"), Some("25".to_string()));
    }

    #[test]
    fn test_reason_numeric_pass_first() {
        assert_eq!(
            ReasonExtractor.extract("2 because I changed my mind"),
            Some(RefundReason::DuplicateCharge)
        );
        assert_eq!(ReasonExtractor.extract("option 3"), Some(RefundReason::WrongItemDelivered));
        // menu order decides between two numeric tokens
        assert_eq!(ReasonExtractor.extract("5 or 1"), Some(RefundReason::ItemNotReceived));
    }

    #[test]
    fn test_reason_numeric_needs_whole_token() {
        assert_eq!(ReasonExtractor.extract("$40"), None);
        assert_eq!(ReasonExtractor.extract("tx 12"), None);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(
            ReasonExtractor.extract("The ITEM NOT RECEIVED yet"),
            Some(RefundReason::ItemNotReceived)
        );
        assert_eq!(
            ReasonExtractor.extract("I changed my mind"),
            Some(RefundReason::ChangedMind)
        );
        assert_eq!(
            ReasonExtractor.extract("something else entirely"),
            Some(RefundReason::Other)
        );
        assert_eq!(ReasonExtractor.extract("hello"), None);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(WeekdayExtractor.extract("Tuesday works"), Some(Weekday::Tue));
        assert_eq!(WeekdayExtractor.extract("how about FRIDAY?"), Some(Weekday::Fri));
        assert_eq!(WeekdayExtractor.extract("monday or sunday"), Some(Weekday::Mon));
        assert_eq!(WeekdayExtractor.extract("tomorrow"), None);
    }
}
