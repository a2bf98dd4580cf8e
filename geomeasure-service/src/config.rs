//! Service configuration.
//!
//! Built once at startup and handed to the router and server; nothing reads
//! the environment after that.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEO_API_HOST` | Listen address | `0.0.0.0:3000` |
//! | `GEO_API_REQUEST_TIMEOUT` | Per-request timeout | `5s` |
//! | `GEO_API_SHUTDOWN_TIMEOUT` | Time allowed to drain connections on shutdown | `5s` |
//!
//! Durations accept `ms`, `s` and `m` suffixes (`500ms`, `5s`, `2m`) or a bare
//! number of seconds.

use std::time::Duration;

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0:3000";

/// Default request and shutdown timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the API listens on.
    pub host: String,
    /// Upper bound on the time spent handling a single request.
    pub request_timeout: Duration,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            shutdown_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration from environment variables.
    ///
    /// Unset variables use their defaults; unparsable values are logged and
    /// replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("GEO_API_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            request_timeout: duration_var(
                &lookup,
                "GEO_API_REQUEST_TIMEOUT",
                defaults.request_timeout,
            ),
            shutdown_timeout: duration_var(
                &lookup,
                "GEO_API_SHUTDOWN_TIMEOUT",
                defaults.shutdown_timeout,
            ),
        }
    }
}

fn duration_var<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(value) => parse_duration(&value).unwrap_or_else(|| {
            tracing::warn!(
                variable = key,
                value = %value,
                default_ms = default.as_millis() as u64,
                "Invalid duration, using default"
            );
            default
        }),
    }
}

/// Parse a duration such as `500ms`, `5s`, `2m` or `10` (seconds).
///
/// Returns `None` for empty, negative or malformed input.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let (number, scale_ms) = if let Some(ms) = value.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(s) = value.strip_suffix('s') {
        (s, 1_000.0)
    } else if let Some(m) = value.strip_suffix('m') {
        (m, 60_000.0)
    } else {
        (value, 1_000.0)
    };

    let amount: f64 = number.trim().parse().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some(Duration::from_millis((amount * scale_ms).round() as u64))
}
