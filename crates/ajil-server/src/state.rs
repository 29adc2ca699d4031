//! Shared application state for the site server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It holds the visit store and the outbound form
//! relay.

use std::sync::Arc;

use ajil_core::relay::FormRelay;
use ajil_core::store::VisitStore;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Live visits keyed by visitor cookie.
    pub visits: VisitStore,
    /// Delivers contact form submissions.
    pub relay: Arc<dyn FormRelay>,
}

impl AppState {
    #[must_use]
    pub fn new(visits: VisitStore, relay: Arc<dyn FormRelay>) -> Self {
        Self { visits, relay }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
