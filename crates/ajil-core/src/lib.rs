//! Core library for the Ajil's Oils site.
//!
//! Holds everything with behavior behind the pages: the closed set of routes
//! and the router that selects one, the contact form state machine, the
//! per-visitor state that ties them together, and the relay that posts form
//! submissions to the third-party form service. Rendering lives in
//! `ajil-server`.

pub mod error;
pub mod form;
pub mod relay;
pub mod route;
pub mod store;
pub mod submission;
pub mod visit;
