//! Contact form routes.
//!
//! - `GET  /contact` — render the contact page
//! - `POST /contact` — submit the form, then redirect back (post/redirect/get)
//! - `POST /contact/reset` — "send another message"
//!
//! The submit handler waits for the relay before redirecting, so the page the
//! browser lands on already shows `success` or `error`. Submissions share one
//! concurrency cap and carry a small body limit; page views are not limited.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::{Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use tower::limit::GlobalConcurrencyLimitLayer;
use tracing::debug;

use ajil_core::form::ContactForm;
use ajil_core::route::Route;
use ajil_core::visit::submit_contact;

use crate::error::AppError;
use crate::routes::pages;
use crate::state::AppState;
use crate::visitor::{VisitorId, with_visit_cookie};

/// Cap on contact submissions relayed at once, across all visitors.
pub const MAX_INFLIGHT_SUBMISSIONS: usize = 32;

/// Largest accepted contact form body.
pub const MAX_FORM_BYTES: usize = 16 * 1024;

pub fn router() -> Router<Arc<AppState>> {
    let submissions = post(submit)
        .layer::<_, Infallible>(GlobalConcurrencyLimitLayer::new(MAX_INFLIGHT_SUBMISSIONS))
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES));

    Router::new()
        .route("/contact", get(show_contact).merge(submissions))
        .route("/contact/reset", post(reset))
}

async fn show_contact(State(state): State<Arc<AppState>>, visitor: VisitorId) -> Response {
    pages::show(&state, visitor, Route::Contact).await
}

async fn submit(
    State(state): State<Arc<AppState>>,
    visitor: VisitorId,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(fields) = form?;
    let (visit, created) = state.visits.checkout(visitor.0).await;
    let id = visit.lock().await.id();

    submit_contact(&visit, state.relay.as_ref(), fields).await;

    Ok(with_visit_cookie(Redirect::to("/contact"), id, created))
}

async fn reset(State(state): State<Arc<AppState>>, visitor: VisitorId) -> Response {
    let (visit, created) = state.visits.checkout(visitor.0).await;
    let id = {
        let mut visit = visit.lock().await;
        if let Err(e) = visit.reset_contact() {
            debug!(visit = %visit.id(), error = %e, "ignoring reset");
        }
        visit.id()
    };
    with_visit_cookie(Redirect::to("/contact"), id, created)
}
