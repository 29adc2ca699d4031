//! Integration tests for the HTTP form relay and the full submission flow.
//!
//! A throwaway Axum app on `127.0.0.1:0` stands in for the third-party form
//! service. It records what it received and answers with a fixed status.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Form, Router};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use uuid::Uuid;

use ajil_core::error::RelayError;
use ajil_core::form::{ContactForm, FormState};
use ajil_core::relay::{FormRelay, HttpFormRelay, RelayConfig};
use ajil_core::route::Route;
use ajil_core::visit::{Visit, submit_contact};

#[derive(Default)]
struct Received {
    accept: Option<String>,
    fields: HashMap<String, String>,
    hits: usize,
}

/// Start a fake form endpoint answering `status`. Returns its URL and the
/// record of what it received.
async fn fake_endpoint(status: StatusCode) -> (String, Arc<Mutex<Received>>) {
    let received = Arc::new(Mutex::new(Received::default()));

    async fn handle(
        State((status, received)): State<(StatusCode, Arc<Mutex<Received>>)>,
        headers: HeaderMap,
        Form(fields): Form<HashMap<String, String>>,
    ) -> (StatusCode, &'static str) {
        let mut rec = received.lock().await;
        rec.accept = headers
            .get("accept")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        rec.fields = fields;
        rec.hits += 1;
        (status, "{}")
    }

    let app = Router::new()
        .route("/f/test", post(handle))
        .with_state((status, Arc::clone(&received)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/f/test"), received)
}

/// A URL on a port nothing is listening on.
async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/f/test")
}

fn relay(endpoint: String) -> HttpFormRelay {
    HttpFormRelay::new(RelayConfig {
        endpoint,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn jane() -> ContactForm {
    ContactForm {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        service: "used-oil-collection".to_owned(),
        message: "Need weekly collection".to_owned(),
        ..ContactForm::default()
    }
}

// ── Relay ────────────────────────────────────────────────────────────

#[tokio::test]
async fn relay_posts_form_fields_with_json_accept() {
    let (url, received) = fake_endpoint(StatusCode::OK).await;
    relay(url).send(&jane().payload()).await.unwrap();

    let rec = received.lock().await;
    assert_eq!(rec.hits, 1);
    assert_eq!(rec.accept.as_deref(), Some("application/json"));
    assert_eq!(rec.fields.len(), 6);
    assert_eq!(rec.fields["name"], "Jane Doe");
    assert_eq!(rec.fields["email"], "jane@example.com");
    assert_eq!(rec.fields["service"], "used-oil-collection");
    assert_eq!(rec.fields["message"], "Need weekly collection");
    assert_eq!(rec.fields["phone"], "");
    assert_eq!(rec.fields["business"], "");
}

#[tokio::test]
async fn relay_reports_rejection_status() {
    let (url, received) = fake_endpoint(StatusCode::UNPROCESSABLE_ENTITY).await;
    let err = relay(url).send(&jane().payload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected { status: 422 }));
    assert_eq!(received.lock().await.hits, 1, "no retry on rejection");
}

#[tokio::test]
async fn relay_does_not_retry_server_errors() {
    let (url, received) = fake_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let err = relay(url).send(&jane().payload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected { status: 500 }));
    assert_eq!(received.lock().await.hits, 1);
}

#[tokio::test]
async fn relay_reports_connection_refused_as_network_error() {
    let err = relay(closed_endpoint().await)
        .send(&jane().payload())
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Network(_)));
}

// ── Full submission ──────────────────────────────────────────────────

async fn contact_visit() -> Mutex<Visit> {
    let mut visit = Visit::new(Uuid::new_v4());
    visit.navigate(Route::Contact);
    Mutex::new(visit)
}

#[tokio::test]
async fn accepted_submission_succeeds_and_clears_fields() {
    let (url, _) = fake_endpoint(StatusCode::OK).await;
    let visit = contact_visit().await;

    let state = submit_contact(&visit, &relay(url), jane()).await;
    assert_eq!(state, Some(FormState::Success));

    let guard = visit.lock().await;
    let session = guard.contact().unwrap();
    assert_eq!(session.state(), FormState::Success);
    assert!(session.fields().is_empty());
}

#[tokio::test]
async fn rejected_submission_errors_and_keeps_fields() {
    let (url, _) = fake_endpoint(StatusCode::UNPROCESSABLE_ENTITY).await;
    let visit = contact_visit().await;

    let state = submit_contact(&visit, &relay(url), jane()).await;
    assert_eq!(state, Some(FormState::Error));

    let guard = visit.lock().await;
    let session = guard.contact().unwrap();
    assert_eq!(session.fields(), &jane());
}

#[tokio::test]
async fn unreachable_endpoint_looks_like_rejection() {
    let visit = contact_visit().await;

    let state = submit_contact(&visit, &relay(closed_endpoint().await), jane()).await;
    assert_eq!(state, Some(FormState::Error));
    assert_eq!(visit.lock().await.contact().unwrap().fields(), &jane());
}

#[tokio::test]
async fn send_another_message_after_success() {
    let (url, _) = fake_endpoint(StatusCode::OK).await;
    let visit = contact_visit().await;
    submit_contact(&visit, &relay(url), jane()).await;

    let mut guard = visit.lock().await;
    guard.reset_contact().unwrap();
    assert_eq!(guard.contact().unwrap().state(), FormState::Idle);
}

// ── In-flight races ──────────────────────────────────────────────────

/// Relay that holds every submission until the gate is opened.
struct GatedRelay {
    gate: Arc<tokio::sync::Notify>,
}

#[async_trait::async_trait]
impl FormRelay for GatedRelay {
    async fn send(&self, _payload: &ajil_core::form::ContactPayload) -> Result<(), RelayError> {
        self.gate.notified().await;
        Ok(())
    }
}

async fn wait_for_submitting(visit: &Mutex<Visit>) {
    for _ in 0..100 {
        let state = visit.lock().await.contact().map(|c| c.state());
        if state == Some(FormState::Submitting) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("submission never started");
}

#[tokio::test]
async fn result_landing_after_navigation_is_dropped() {
    let gate = Arc::new(tokio::sync::Notify::new());
    let relay = Arc::new(GatedRelay {
        gate: Arc::clone(&gate),
    });
    let visit = Arc::new(contact_visit().await);

    let task = {
        let visit = Arc::clone(&visit);
        let relay = Arc::clone(&relay);
        tokio::spawn(async move { submit_contact(&visit, relay.as_ref(), jane()).await })
    };

    wait_for_submitting(&visit).await;
    visit.lock().await.navigate(Route::Services);
    gate.notify_one();

    assert_eq!(task.await.unwrap(), None);
    let guard = visit.lock().await;
    assert_eq!(guard.route(), Route::Services);
    assert!(guard.contact().is_none());
}
