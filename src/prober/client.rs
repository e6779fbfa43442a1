use reqwest::{Client, Proxy, RequestBuilder};
use tokio::time::Duration;
use url::Url;

use crate::error::ProbeError;

/// HTTP client for a single probe.
///
/// Idle connections are never pooled, so every request pays the full
/// connect (and TLS) handshake. The client-level timeout is an absolute
/// deadline covering DNS, connect, TLS and the wait for response headers.
pub struct TimedHttpClient {
    client: Client,
    // A proxy string that failed to parse. Reported by each request rather
    // than at construction.
    bad_proxy: Option<(String, String)>,
}

impl TimedHttpClient {
    pub fn new(timeout: Duration, proxy: &str) -> Result<Self, ProbeError> {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0);

        let (builder, bad_proxy) = if proxy.is_empty() {
            (builder.no_proxy(), None)
        } else {
            match parse_proxy(proxy) {
                Ok(p) => (builder.proxy(p), None),
                Err(reason) => (builder.no_proxy(), Some((proxy.to_string(), reason))),
            }
        };

        Ok(Self {
            client: builder.build()?,
            bad_proxy,
        })
    }

    pub fn head(&self, url: &str) -> Result<RequestBuilder, ProbeError> {
        if let Some((proxy, reason)) = &self.bad_proxy {
            return Err(ProbeError::invalid_proxy(proxy, reason));
        }
        Ok(self.client.head(url))
    }
}

fn parse_proxy(proxy: &str) -> Result<Proxy, String> {
    let url = Url::parse(proxy).map_err(|e| e.to_string())?;
    Proxy::all(url).map_err(|e| e.to_string())
}
