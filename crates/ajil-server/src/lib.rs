//! Ajil's Oils HTTP server.
//!
//! Renders the site's pages, keeps each visitor's route and contact form
//! state in memory, and relays contact form submissions to the configured
//! form service. Everything with behavior lives in `ajil-core`; this crate
//! is routing, rendering, and process wiring.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;
pub mod visitor;
