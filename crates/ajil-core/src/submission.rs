//! Contact form submission state machine.
//!
//! ```text
//! idle ──submit──▶ submitting ──2xx──▶ success ──reset──▶ idle
//!   ▲                   │
//!   │                   └──failure──▶ error ──submit──▶ submitting
//! ```
//!
//! A submission is split into [`ContactSession::begin`] (take a ticket, enter
//! `submitting`) and [`ContactSession::resolve`] (apply the relay outcome).
//! The caller awaits the relay between the two without holding any lock.
//! Outcomes carrying an outdated ticket are dropped.

use crate::error::{RelayError, TransitionError};
use crate::form::{ContactForm, ContactPayload, FormState};

/// Identifies one submission within one activation of the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub activation: u64,
    pub sequence: u64,
}

/// What [`ContactSession::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied and the form is now in this state.
    Applied(FormState),
    /// A newer submission or page activation superseded the ticket.
    Stale,
}

/// Form state for one activation of the contact page.
#[derive(Debug, Clone)]
pub struct ContactSession {
    activation: u64,
    sequence: u64,
    state: FormState,
    fields: ContactForm,
}

impl ContactSession {
    /// A fresh idle session for the given page activation.
    #[must_use]
    pub fn new(activation: u64) -> Self {
        Self {
            activation,
            sequence: 0,
            state: FormState::Idle,
            fields: ContactForm::default(),
        }
    }

    pub fn activation(&self) -> u64 {
        self.activation
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Field values as last submitted. Blank after a success.
    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    /// Enter `submitting` with the given values and return the ticket plus
    /// the payload to send.
    ///
    /// Allowed from every state; a submit while another is in flight
    /// supersedes it.
    pub fn begin(&mut self, fields: ContactForm) -> (Ticket, ContactPayload) {
        self.sequence = self.sequence.saturating_add(1);
        self.state = FormState::Submitting;
        self.fields = fields;
        let ticket = Ticket {
            activation: self.activation,
            sequence: self.sequence,
        };
        (ticket, self.fields.payload())
    }

    /// Apply the relay outcome for `ticket`.
    ///
    /// Success clears every field. Any failure moves to `error` and keeps the
    /// fields so the visitor does not lose their message.
    pub fn resolve(&mut self, ticket: Ticket, outcome: &Result<(), RelayError>) -> Resolution {
        if !self.accepts(ticket) {
            return Resolution::Stale;
        }
        match outcome {
            Ok(()) => {
                self.state = FormState::Success;
                self.fields.clear();
            }
            Err(_) => self.state = FormState::Error,
        }
        Resolution::Applied(self.state)
    }

    /// "Send another message": return from `success` to `idle`.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        if self.state != FormState::Success {
            return Err(TransitionError::Invalid {
                action: "reset",
                state: self.state.as_str(),
            });
        }
        self.state = FormState::Idle;
        Ok(())
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        self.state == FormState::Submitting
            && ticket.activation == self.activation
            && ticket.sequence == self.sequence
    }
}
