//! Page routes: `GET /` and `GET /{slug}`.
//!
//! Every page request navigates the visitor's router to the requested route
//! and renders the shell around that route's block. Unknown slugs are a 404
//! and leave the router where it was.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use maud::Markup;

use ajil_core::route::Route;

use crate::error::AppError;
use crate::state::AppState;
use crate::views;
use crate::visitor::{VisitorId, with_visit_cookie};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/{slug}", get(page))
}

async fn home(State(state): State<Arc<AppState>>, visitor: VisitorId) -> Response {
    show(&state, visitor, Route::Home).await
}

async fn page(
    State(state): State<Arc<AppState>>,
    visitor: VisitorId,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let route: Route = slug.parse()?;
    Ok(show(&state, visitor, route).await)
}

/// Navigate the visit to `route` and render it.
pub(crate) async fn show(state: &AppState, visitor: VisitorId, route: Route) -> Response {
    let (visit, created) = state.visits.checkout(visitor.0).await;
    let (id, html) = {
        let mut visit = visit.lock().await;
        visit.navigate(route);
        (visit.id(), views::render(route, visit.contact()))
    };
    tracing::debug!(visit = %id, route = %route, "render page");
    with_visit_cookie(page_response(html), id, created)
}

fn page_response(html: Markup) -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], html)
}
