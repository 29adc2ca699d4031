//! Server configuration for the Ajil's Oils site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `AJIL_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ajil_core::relay::{DEFAULT_FORM_ENDPOINT, DEFAULT_RELAY_TIMEOUT, RelayConfig};
use ajil_core::store::DEFAULT_MAX_VISITS;

/// Default bind address when neither `AJIL_BIND_ADDR` nor `PORT` is set.
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);

/// Server configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Outbound contact form relay settings.
    pub relay: RelayConfig,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Visits idle for longer than this are forgotten.
    pub visit_idle: Duration,
    /// How often the idle-visit sweeper runs.
    pub visit_sweep_interval: Duration,
    /// Cap on live visits; the least recently seen is evicted past it.
    pub max_visits: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND),
            log_level: "info".to_owned(),
            relay: RelayConfig::default(),
            assets_dir: PathBuf::from("./public"),
            visit_idle: Duration::from_secs(1800),
            visit_sweep_interval: Duration::from_secs(60),
            max_visits: DEFAULT_MAX_VISITS,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (PaaS convention, binds to `0.0.0.0`)
    /// - `AJIL_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `AJIL_LOG_LEVEL` — log filter (default: `info`)
    /// - `AJIL_FORM_ENDPOINT` — URL the contact form is posted to
    /// - `AJIL_RELAY_TIMEOUT_SECS` — outbound request timeout (default: `15`)
    /// - `AJIL_ASSETS_DIR` — static asset directory (default: `./public`)
    /// - `AJIL_VISIT_IDLE_SECS` — idle visit lifetime (default: `1800`)
    /// - `AJIL_VISIT_SWEEP_SECS` — sweeper interval (default: `60`)
    /// - `AJIL_MAX_VISITS` — cap on live visits (default: `10000`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Priority: AJIL_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = lookup("AJIL_BIND_ADDR") {
            addr.parse().unwrap_or(defaults.bind_addr)
        } else if let Some(port) = lookup("PORT") {
            let port: u16 = port.parse().unwrap_or(DEFAULT_BIND.1);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            defaults.bind_addr
        };

        let log_level = lookup("AJIL_LOG_LEVEL").unwrap_or(defaults.log_level);

        let endpoint = lookup("AJIL_FORM_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORM_ENDPOINT.to_owned());

        let secs = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&v| v > 0)
                .map_or(default, Duration::from_secs)
        };

        let max_visits = lookup("AJIL_MAX_VISITS")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.max_visits);

        let assets_dir = lookup("AJIL_ASSETS_DIR").map_or(defaults.assets_dir, PathBuf::from);

        Self {
            bind_addr,
            log_level,
            relay: RelayConfig {
                endpoint,
                timeout: secs("AJIL_RELAY_TIMEOUT_SECS", DEFAULT_RELAY_TIMEOUT),
            },
            assets_dir,
            visit_idle: secs("AJIL_VISIT_IDLE_SECS", defaults.visit_idle),
            visit_sweep_interval: secs("AJIL_VISIT_SWEEP_SECS", defaults.visit_sweep_interval),
            max_visits,
        }
    }
}
