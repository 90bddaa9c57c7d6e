//! Agent logging configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use strum::{Display, EnumString};

/// Console log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Multi-line human readable output
    Pretty,
    /// One line per event, no colours
    Compact,
    /// One JSON object per event
    Json,
}

/// Logging and metrics settings for one agent process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Agent name attached to every log line
    pub agent: String,

    /// `origin->destination` the agent serves, once known
    pub route: Option<String>,

    /// `EnvFilter` directive, e.g. `info` or `xd_06_relayer=debug`
    pub log_filter: String,

    /// Console output format
    pub log_format: LogFormat,

    /// Print the Prometheus exposition when the agent exits
    pub dump_metrics: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            agent: "xd-relayer".to_string(),
            route: None,
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
            dump_metrics: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XD_AGENT`: Agent name (default: xd-relayer)
    /// - `XD_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `XD_LOG_FORMAT`: `pretty`, `compact` or `json` (default: json in
    ///   containers, pretty otherwise)
    /// - `XD_DUMP_METRICS`: Print metrics on exit (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();
        let default_format = if is_container {
            LogFormat::Json
        } else {
            defaults.log_format
        };

        Self {
            agent: env::var("XD_AGENT").unwrap_or(defaults.agent),
            route: None,
            log_filter: env::var("XD_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
            log_format: env::var("XD_LOG_FORMAT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default_format),
            dump_metrics: env::var("XD_DUMP_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.dump_metrics),
        }
    }

    /// Label the agent with the route it relays.
    pub fn with_route(mut self, origin: &str, destination: &str) -> Self {
        self.route = Some(format!("{origin}->{destination}"));
        self
    }

    /// Agent name plus route, as shown at startup.
    pub fn display_name(&self) -> String {
        match &self.route {
            Some(route) => format!("{} [{}]", self.agent, route),
            None => self.agent.clone(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value == "true" || value == "1" || value == "yes"
}
