use tokio::time::{Duration, Instant};
use tracing::debug;

use super::client::TimedHttpClient;
use crate::delay::{classify, Measurement};
use crate::error::ProbeError;
use crate::util::join_host_port;

/// Time for a plain-HTTP `HEAD` to `target_host:target_port` through the
/// local `proxy` (e.g. `socks5://127.0.0.1:1080`), which includes the
/// proxy's own handshake with the target.
///
/// Meant to approximate the "connect" latency shown by proxy clients, but a
/// full request/response still crosses the proxy: it is not a bare
/// handshake measurement.
pub async fn measure_proxy_connect_delay(
    timeout_secs: u64,
    target_host: &str,
    target_port: u16,
    proxy: &str,
) -> Measurement {
    if proxy.is_empty() {
        return Measurement::failed(ProbeError::MissingAddress);
    }

    let timeout = Duration::from_secs(timeout_secs);
    let client = match TimedHttpClient::new(timeout, proxy) {
        Ok(c) => c,
        Err(e) => return Measurement::failed(e),
    };
    let url = format!("http://{}", join_host_port(target_host, target_port));

    let start = Instant::now();
    let result = match client.head(&url) {
        Ok(req) => req.timeout(timeout).send().await.map(drop).map_err(ProbeError::from),
        Err(e) => Err(e),
    };
    let measurement = classify(start.elapsed(), timeout_secs, result);
    debug!(%url, proxy, delay = measurement.delay, ok = measurement.is_ok(), "proxy connect probe finished");
    measurement
}
