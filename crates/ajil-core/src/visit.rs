//! Per-visitor state: the view router plus the contact form session.
//!
//! The contact session exists only while the contact page is the active
//! route. Leaving the page drops it; coming back starts a new activation, so
//! a result still in flight for the old one is discarded on arrival.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{RelayError, TransitionError};
use crate::form::{ContactForm, ContactPayload, FormState};
use crate::relay::FormRelay;
use crate::route::{Route, ViewRouter};
use crate::submission::{ContactSession, Resolution, Ticket};

/// One visitor's view of the site.
#[derive(Debug, Clone)]
pub struct Visit {
    id: Uuid,
    router: ViewRouter,
    contact: Option<ContactSession>,
    activations: u64,
}

impl Visit {
    /// A visit on the home page.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            router: ViewRouter::new(),
            contact: None,
            activations: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// The contact session, present only while the contact page is active.
    pub fn contact(&self) -> Option<&ContactSession> {
        self.contact.as_ref()
    }

    /// Show `target`, activating or discarding the contact session as the
    /// contact page comes into or goes out of view.
    pub fn navigate(&mut self, target: Route) {
        let previous = self.router.navigate(target);
        match (previous == Route::Contact, target == Route::Contact) {
            (false, true) => {
                self.activations = self.activations.saturating_add(1);
                self.contact = Some(ContactSession::new(self.activations));
            }
            (true, false) => self.contact = None,
            _ => {}
        }
    }

    /// Start a submission on the active contact session.
    ///
    /// Navigates to the contact page first if it is not already showing;
    /// a form post can only come from that page.
    pub fn begin_submit(&mut self, fields: ContactForm) -> (Ticket, ContactPayload) {
        self.navigate(Route::Contact);
        let activations = self.activations;
        self.contact
            .get_or_insert_with(|| ContactSession::new(activations))
            .begin(fields)
    }

    /// Apply a relay outcome. Stale when the contact page was left or
    /// re-activated since the ticket was issued.
    pub fn resolve(&mut self, ticket: Ticket, outcome: &Result<(), RelayError>) -> Resolution {
        match self.contact.as_mut() {
            Some(session) => session.resolve(ticket, outcome),
            None => Resolution::Stale,
        }
    }

    /// "Send another message".
    pub fn reset_contact(&mut self) -> Result<(), TransitionError> {
        self.contact
            .as_mut()
            .ok_or(TransitionError::Inactive)?
            .reset()
    }
}

/// Run one full submission against a shared visit.
///
/// The visit lock is released while the relay is awaited so the visitor can
/// keep navigating. Returns the form state after the outcome was applied, or
/// `None` when the outcome was stale and dropped.
pub async fn submit_contact(
    visit: &Mutex<Visit>,
    relay: &dyn FormRelay,
    fields: ContactForm,
) -> Option<FormState> {
    let (visit_id, ticket, payload) = {
        let mut guard = visit.lock().await;
        let (ticket, payload) = guard.begin_submit(fields);
        (guard.id(), ticket, payload)
    };
    debug!(visit = %visit_id, sequence = ticket.sequence, "contact submission started");

    let outcome = relay.send(&payload).await;
    drop(payload);

    if let Err(ref e) = outcome {
        warn!(visit = %visit_id, error = %e, "contact submission failed");
    }

    let resolution = visit.lock().await.resolve(ticket, &outcome);
    match resolution {
        Resolution::Applied(state) => {
            info!(visit = %visit_id, state = %state, "contact submission resolved");
            Some(state)
        }
        Resolution::Stale => {
            debug!(visit = %visit_id, sequence = ticket.sequence, "dropping stale submission result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit() -> Visit {
        Visit::new(Uuid::new_v4())
    }

    #[test]
    fn contact_session_exists_only_on_contact_page() {
        let mut v = visit();
        assert!(v.contact().is_none());

        v.navigate(Route::Contact);
        assert_eq!(v.contact().map(ContactSession::state), Some(FormState::Idle));

        v.navigate(Route::Services);
        assert!(v.contact().is_none());
    }

    #[test]
    fn renavigating_to_contact_keeps_session() {
        let mut v = visit();
        v.navigate(Route::Contact);
        let first = v.contact().map(ContactSession::activation);
        v.navigate(Route::Contact);
        assert_eq!(v.contact().map(ContactSession::activation), first);
    }

    #[test]
    fn each_activation_is_distinct() {
        let mut v = visit();
        v.navigate(Route::Contact);
        let first = v.contact().map(ContactSession::activation);
        v.navigate(Route::Home);
        v.navigate(Route::Contact);
        assert_ne!(v.contact().map(ContactSession::activation), first);
    }

    #[test]
    fn result_after_leaving_page_is_stale() {
        let mut v = visit();
        let (ticket, _) = v.begin_submit(ContactForm::default());
        v.navigate(Route::FreshOil);
        assert_eq!(v.resolve(ticket, &Ok(())), Resolution::Stale);
    }

    #[test]
    fn result_after_returning_to_page_is_stale() {
        let mut v = visit();
        let (ticket, _) = v.begin_submit(ContactForm::default());
        v.navigate(Route::Home);
        v.navigate(Route::Contact);
        assert_eq!(v.resolve(ticket, &Ok(())), Resolution::Stale);
        assert_eq!(v.contact().map(ContactSession::state), Some(FormState::Idle));
    }

    #[test]
    fn begin_submit_moves_to_contact() {
        let mut v = visit();
        v.begin_submit(ContactForm::default());
        assert_eq!(v.route(), Route::Contact);
        assert_eq!(
            v.contact().map(ContactSession::state),
            Some(FormState::Submitting)
        );
    }

    #[test]
    fn reset_without_contact_page_is_inactive() {
        let mut v = visit();
        assert_eq!(v.reset_contact(), Err(TransitionError::Inactive));
    }
}
