//! Target host value object
//!
//! Identifies the install a run is acting on. Only used in prompts and
//! reports; it never influences where commands are sent.

use serde::Serialize;
use url::Url;

use crate::error::{TasksError, TasksResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetHost(String);

impl TargetHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    /// Parse the host out of a site URL (`https://example.com/blog` -> `example.com`).
    ///
    /// A bare domain without a scheme is accepted as well, with or without a
    /// port (`localhost:8080`). Without `://`, `Url` would read `localhost:` as
    /// a scheme, so such input is parsed as `https://` first.
    pub fn from_url(raw: &str) -> TasksResult<Self> {
        let raw = raw.trim();
        let parsed = if raw.contains("://") {
            Url::parse(raw)
        } else {
            Url::parse(&format!("https://{}", raw))
        }
        .map_err(|e| invalid_url(raw, &e.to_string()))?;

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(Self(host.to_string())),
            _ => Err(invalid_url(raw, "URL has no host")),
        }
    }

    /// Host part of an ssh destination (`deploy@example.com:2222` -> `example.com`).
    pub fn from_ssh_destination(destination: &str) -> Self {
        let without_user = destination
            .rsplit_once('@')
            .map(|(_, host)| host)
            .unwrap_or(destination);
        let host = without_user
            .split_once(':')
            .map(|(host, _)| host)
            .unwrap_or(without_user);
        Self(host.to_string())
    }

    pub fn localhost() -> Self {
        Self("localhost".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_url(raw: &str, reason: &str) -> TasksError {
    TasksError::configuration(format!("invalid site URL '{}': {}", raw, reason))
}

impl std::fmt::Display for TargetHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
