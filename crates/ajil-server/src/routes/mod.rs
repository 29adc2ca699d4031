//! HTTP routes for the site.
//!
//! - `GET  /`, `GET /{slug}` — render a page ([`pages`])
//! - `POST /contact`, `POST /contact/reset` — contact form ([`contact`])
//! - `GET  /healthz` — liveness probe ([`health`])
//! - `GET  /assets/*` — static files from the assets directory

pub mod contact;
pub mod health;
pub mod pages;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with all routes and middleware.
pub fn app(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .merge(health::router())
        .merge(contact::router())
        .merge(pages::router())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
