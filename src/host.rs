//! Host facts reported by the probe and status endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use sysinfo::System;

/// Reported when the operating system does not expose a hostname.
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// Current machine hostname. Inside a pod this is the pod name.
pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| FALLBACK_HOSTNAME.to_string())
}

/// Current time as an RFC 3339 (ISO-8601) string with microsecond precision.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
