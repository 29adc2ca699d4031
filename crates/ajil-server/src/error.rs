//! HTTP error types for the site server.
//!
//! Handlers return [`AppError`] for anything that is not a page render.
//! Every variant produces a small HTML page inside the site chrome, so a
//! visitor who mistypes a URL still has the navigation bar to get back.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ajil_core::error::RouteError;

use crate::views;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested page not found.
    NotFound(String),
    /// Client sent invalid input.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "Page not found", msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "Please try again in a moment.".to_owned(),
                )
            }
        };

        (status, views::error_page(status, title, &message)).into_response()
    }
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::Unknown { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        if rejection.status().is_server_error() {
            Self::Internal(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}
