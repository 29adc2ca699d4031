//! Visitor identification by cookie.
//!
//! Each browser carries an opaque `ajil_visit` cookie holding a UUID. The id
//! selects the visitor's [`Visit`](ajil_core::visit::Visit) in the store; a
//! missing, malformed, or expired id gets a fresh visit and a new cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Name of the visit cookie.
pub const VISIT_COOKIE: &str = "ajil_visit";

/// The visit id the browser sent, if any parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorId(pub Option<Uuid>);

impl<S: Send + Sync> FromRequestParts<S> for VisitorId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(parse_visit_cookie);
        Ok(Self(id))
    }
}

/// Find the visit id in a `Cookie` header value.
pub fn parse_visit_cookie(header: &str) -> Option<Uuid> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == VISIT_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

/// `Set-Cookie` value for a visit id.
pub fn visit_cookie(id: Uuid) -> HeaderValue {
    let cookie = format!("{VISIT_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    // A hyphenated UUID and the fixed attributes are always valid header bytes.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Attach the visit cookie to `resp` when the visit was just created.
pub fn with_visit_cookie(resp: impl IntoResponse, id: Uuid, created: bool) -> Response {
    let mut resp = resp.into_response();
    if created {
        resp.headers_mut().append(SET_COOKIE, visit_cookie(id));
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let id = Uuid::new_v4();
        let header = format!("theme=dark; {VISIT_COOKIE}={id}; lang=en");
        assert_eq!(parse_visit_cookie(&header), Some(id));
    }

    #[test]
    fn ignores_malformed_id() {
        assert_eq!(parse_visit_cookie("ajil_visit=not-a-uuid"), None);
        assert_eq!(parse_visit_cookie("other=1"), None);
        assert_eq!(parse_visit_cookie(""), None);
    }

    #[test]
    fn cookie_value_is_http_only() {
        let id = Uuid::new_v4();
        let value = visit_cookie(id);
        let text = value.to_str().unwrap_or_default();
        assert!(text.starts_with(&format!("{VISIT_COOKIE}={id}")));
        assert!(text.contains("HttpOnly"));
    }
}
