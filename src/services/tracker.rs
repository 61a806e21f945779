use chrono::Weekday;

use crate::models::{BookingRecord, RefundReason, RefundRecord};
use crate::services::extraction::{
    AmountExtractor, DateExtractor, FieldExtractor, ReasonExtractor, TransactionIdExtractor,
    WeekdayExtractor,
};

/// Accumulates refund details across turns.
pub struct RefundTracker {
    record: RefundRecord,
    transaction_id: Box<dyn FieldExtractor<String>>,
    date: Box<dyn FieldExtractor<String>>,
    amount: Box<dyn FieldExtractor<String>>,
    reason: Box<dyn FieldExtractor<RefundReason>>,
}

impl Default for RefundTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RefundTracker {
    pub fn new() -> Self {
        Self {
            record: RefundRecord::default(),
            transaction_id: Box::new(TransactionIdExtractor),
            date: Box::new(DateExtractor),
            amount: Box::new(AmountExtractor),
            reason: Box::new(ReasonExtractor),
        }
    }

    pub fn with_transaction_id_extractor(mut self, e: impl FieldExtractor<String> + 'static) -> Self {
        self.transaction_id = Box::new(e);
        self
    }

    pub fn with_date_extractor(mut self, e: impl FieldExtractor<String> + 'static) -> Self {
        self.date = Box::new(e);
        self
    }

    pub fn with_amount_extractor(mut self, e: impl FieldExtractor<String> + 'static) -> Self {
        self.amount = Box::new(e);
        self
    }

    pub fn with_reason_extractor(mut self, e: impl FieldExtractor<RefundReason> + 'static) -> Self {
        self.reason = Box::new(e);
        self
    }

    /// Fills whatever the text mentions. Fields the text says nothing about keep their value.
    pub fn parse_input(&mut self, text: &str) {
        if let Some(tid) = self.transaction_id.extract(text) {
            self.record.transaction_id = Some(tid);
        }
        if let Some(date) = self.date.extract(text) {
            self.record.date = Some(date);
        }
        if let Some(amount) = self.amount.extract(text) {
            self.record.amount = Some(amount);
        }
        if let Some(reason) = self.reason.extract(text) {
            self.record.reason = Some(reason);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.record.is_complete()
    }

    pub fn record(&self) -> &RefundRecord {
        &self.record
    }

    /// Hands back the accumulated record and starts over with an empty one.
    pub fn take(&mut self) -> RefundRecord {
        std::mem::take(&mut self.record)
    }

    pub fn reset(&mut self) {
        self.record = RefundRecord::default();
    }
}

pub struct BookingTracker {
    record: BookingRecord,
    day: Box<dyn FieldExtractor<Weekday>>,
}

impl Default for BookingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingTracker {
    pub fn new() -> Self {
        Self {
            record: BookingRecord::default(),
            day: Box::new(WeekdayExtractor),
        }
    }

    pub fn with_day_extractor(mut self, e: impl FieldExtractor<Weekday> + 'static) -> Self {
        self.day = Box::new(e);
        self
    }

    pub fn parse_input(&mut self, text: &str) -> bool {
        match self.day.extract(text) {
            Some(day) => {
                self.record.day = Some(day);
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.record.is_complete()
    }

    pub fn record(&self) -> &BookingRecord {
        &self.record
    }

    pub fn take(&mut self) -> BookingRecord {
        std::mem::take(&mut self.record)
    }

    pub fn reset(&mut self) {
        self.record = BookingRecord::default();
    }
}
