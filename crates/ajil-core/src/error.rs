//! Error types for `ajil-core`.
//!
//! Relay errors keep enough detail for logs. The contact form itself never
//! shows them to a visitor; every variant collapses to one generic message.

/// Errors from the outbound form relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The form service answered with a non-success status.
    #[error("form endpoint rejected submission with HTTP {status}")]
    Rejected { status: u16 },

    /// The request did not complete before the client timeout.
    #[error("form endpoint timed out")]
    Timeout,

    /// Connection, DNS, TLS, or other transport failure.
    #[error("form endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// The relay could not be constructed from its configuration.
    #[error("form relay config error: {0}")]
    Config(String),
}

/// Errors from parsing a route slug.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    /// The slug does not name one of the site's pages.
    #[error("unknown route '{slug}'")]
    Unknown { slug: String },
}

/// Errors from contact form state transitions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested action is not valid from the current state.
    #[error("cannot {action} while form is {state}")]
    Invalid {
        action: &'static str,
        state: &'static str,
    },

    /// The contact page is not active for this visit.
    #[error("contact page is not active")]
    Inactive,
}
