use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong during a single probe.
///
/// Every variant travels together with a sentinel delay inside a
/// [`Measurement`](crate::Measurement), so callers never have to inspect
/// the error to tell a timeout from a failure.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("proxy address cannot be empty")]
    MissingAddress,

    #[error("invalid proxy address {proxy}: {reason}")]
    InvalidProxy { proxy: String, reason: String },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dial {addr} failed: {source}")]
    Dial {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dial {addr} timed out after {timeout:?}")]
    DialTimeout { addr: String, timeout: Duration },

    #[error("failed to build probe runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("proxy engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProbeError {
    pub(crate) fn invalid_proxy(proxy: &str, reason: impl ToString) -> Self {
        ProbeError::InvalidProxy {
            proxy: proxy.to_string(),
            reason: reason.to_string(),
        }
    }
}
