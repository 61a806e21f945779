use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::guardrail::REASON_EMPTY;
use crate::models::{
    day_name, ConversationMessage, ConversationState, Intent, RefundField, RefundRecord,
    SessionIdentity,
};
use crate::services::ai::responder::generate_reply;
use crate::services::banking;
use crate::services::guardrail::{Guardrail, InputGuard, OutputGuard};
use crate::services::tracker::{BookingTracker, RefundTracker};
use crate::state::AppState;

const REFUND_REASON_MENU: [&str; 5] = [
    " 1. Items not received",
    " 2. Duplicate charge",
    " 3. Wrong item delivered",
    " 4. Changed my mind",
    " 5. Other",
];

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Reply(String),
    Rejected(String),
    Goodbye(String),
}

impl TurnOutcome {
    pub fn text(&self) -> &str {
        match self {
            TurnOutcome::Reply(s) | TurnOutcome::Rejected(s) | TurnOutcome::Goodbye(s) => s,
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, TurnOutcome::Goodbye(_))
    }
}

/// Picks the intent for a turn. An unfinished refund or booking keeps the turn
/// on its flow; a refund in progress outranks a new booking request.
pub fn classify(text: &str, state: ConversationState) -> Intent {
    let lowered = text.trim().to_lowercase();
    if lowered == "quit" {
        Intent::Quit
    } else if lowered.contains("refund") || state == ConversationState::AwaitingRefund {
        Intent::Refund
    } else if lowered.contains("book") || state == ConversationState::AwaitingBooking {
        Intent::Booking
    } else if lowered.contains("balance") {
        Intent::Balance
    } else {
        Intent::General
    }
}

/// One customer's conversation: the turn router plus everything it owns.
pub struct Session {
    id: Uuid,
    app: Arc<AppState>,
    identity: SessionIdentity,
    state: ConversationState,
    refund: RefundTracker,
    booking: BookingTracker,
    history: Vec<ConversationMessage>,
    input_guard: Box<dyn Guardrail>,
    output_guard: Box<dyn Guardrail>,
    started_at: DateTime<Utc>,
    turns: u32,
}

impl Session {
    pub fn new(app: Arc<AppState>, identity: SessionIdentity) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, customer = %identity.customer_name, "session started");
        Self {
            id,
            app,
            identity,
            state: ConversationState::Idle,
            refund: RefundTracker::new(),
            booking: BookingTracker::new(),
            history: Vec::new(),
            input_guard: Box::new(InputGuard),
            output_guard: Box::new(OutputGuard),
            started_at: Utc::now(),
            turns: 0,
        }
    }

    pub fn with_refund_tracker(mut self, tracker: RefundTracker) -> Self {
        self.refund = tracker;
        self
    }

    pub fn with_booking_tracker(mut self, tracker: BookingTracker) -> Self {
        self.booking = tracker;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn refund_record(&self) -> &RefundRecord {
        self.refund.record()
    }

    pub fn history(&self) -> &[ConversationMessage] {
        &self.history
    }

    pub async fn handle_turn(&mut self, input: &str) -> TurnOutcome {
        let verdict = self.input_guard.check(Some(input));
        if !verdict.is_valid() {
            let reason = verdict.reason().unwrap_or(REASON_EMPTY);
            tracing::info!(
                session = %self.id,
                guard = self.input_guard.name(),
                reason,
                "input rejected"
            );
            return TurnOutcome::Rejected(format!("Invalid input: {reason}"));
        }

        let text = input.trim();
        let intent = classify(text, self.state);
        self.turns += 1;

        tracing::info!(
            session = %self.id,
            intent = intent.as_str(),
            state = self.state.as_str(),
            turn = self.turns,
            "processing turn"
        );

        self.history.push(ConversationMessage::user(text));

        let reply = match intent {
            Intent::Quit => {
                let farewell =
                    self.guard_output(&format!("Goodbye, {}!", self.identity.customer_name));
                self.end();
                return TurnOutcome::Goodbye(farewell);
            }
            Intent::Refund => self.handle_refund(text),
            Intent::Booking => self.handle_booking(text),
            Intent::Balance => {
                banking::check_balance(&self.identity, self.app.config.simulated_balance)
            }
            Intent::General => self.handle_general().await,
        };
        let reply = self.guard_output(&reply);

        self.history.push(ConversationMessage::assistant(&reply));
        self.trim_history();

        TurnOutcome::Reply(reply)
    }

    /// Clears all task state. Called on quit; safe to call more than once.
    pub fn end(&mut self) {
        self.refund.reset();
        self.booking.reset();
        self.history.clear();
        self.state = ConversationState::Idle;

        let elapsed = Utc::now() - self.started_at;
        tracing::info!(
            session = %self.id,
            turns = self.turns,
            duration_secs = elapsed.num_seconds(),
            "session ended"
        );
    }

    fn handle_refund(&mut self, text: &str) -> String {
        if self.state == ConversationState::AwaitingBooking {
            tracing::info!(session = %self.id, "refund requested, discarding pending booking");
            self.booking.reset();
        }
        self.state = ConversationState::AwaitingRefund;
        self.refund.parse_input(text);

        let missing = self.refund.record().missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(RefundField::as_str).collect();
            tracing::debug!(session = %self.id, missing = ?names, "refund incomplete");
            return refund_prompt(&self.identity.customer_name, &missing);
        }

        let record = self.refund.take();
        self.state = ConversationState::Idle;
        tracing::info!(
            session = %self.id,
            transaction_id = record.transaction_id.as_deref().unwrap_or_default(),
            "refund completed"
        );
        refund_confirmation(&record)
    }

    fn handle_booking(&mut self, text: &str) -> String {
        self.state = ConversationState::AwaitingBooking;

        if self.booking.parse_input(text) {
            if let Some(day) = self.booking.take().day {
                self.state = ConversationState::Idle;
                tracing::info!(session = %self.id, day = day_name(day), "appointment booked");
                return format!(
                    "Appointment booked on {} for {}!",
                    day_name(day),
                    self.identity.customer_name
                );
            }
        }

        format!(
            "Hello {}, which day would you like to book your appointment? (e.g. Monday, Tuesday..)",
            self.identity.customer_name
        )
    }

    async fn handle_general(&self) -> String {
        let name = &self.identity.customer_name;
        let Some(llm) = self.app.llm.as_deref() else {
            return format!(
                "Hello {name}, I can help you with balance inquiries, refunds, or bookings. \
                 Please mention what you would like to do?"
            );
        };

        match generate_reply(llm, &self.history, &self.identity).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "responder failed");
                format!(
                    "Sorry {name}, I couldn't answer that right now. \
                     You can still ask about your balance, refunds, or bookings."
                )
            }
        }
    }

    fn guard_output(&self, text: &str) -> String {
        let verdict = self.output_guard.check(Some(text));
        verdict.redacted_text().unwrap_or(text).to_string()
    }

    fn trim_history(&mut self) {
        let limit = self.app.config.history_limit;
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }
}

fn refund_prompt(name: &str, missing: &[RefundField]) -> String {
    let mut lines = vec![format!(
        "Hello {name}, to process your refund, please provide:"
    )];
    for field in missing {
        match field {
            RefundField::TransactionId => lines.push("*Transaction ID*".to_string()),
            RefundField::Date => lines.push("*Date of purchase*".to_string()),
            RefundField::Amount => lines.push("*Amount of the purchase*".to_string()),
            RefundField::Reason => {
                lines.push("*Reason for refund (choose one or type your reason):*".to_string());
                lines.extend(REFUND_REASON_MENU.iter().map(|s| s.to_string()));
            }
        }
    }
    lines.join("\n")
}

fn refund_confirmation(record: &RefundRecord) -> String {
    format!(
        "Refund successful for Transaction ID {}, Date {}, Amount ${}, Reason: {}.",
        record.transaction_id.as_deref().unwrap_or_default(),
        record.date.as_deref().unwrap_or_default(),
        record.amount.as_deref().unwrap_or_default(),
        record.reason.map(|r| r.as_str()).unwrap_or_default(),
    )
}
