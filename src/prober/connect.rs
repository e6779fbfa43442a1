use tokio::time::{Duration, Instant};
use tracing::debug;

use super::dialer::TimedDialer;
use crate::delay::{classify, Measurement};
use crate::error::ProbeError;

/// TCP handshake time to the proxy server itself, `proxy_addr` being a bare
/// `host:port` such as `proxy.example.com:1080`.
///
/// This only shows whether the server is reachable; it says nothing about
/// the proxy protocol. Use
/// [`measure_proxy_connect_delay`](super::proxy_connect::measure_proxy_connect_delay)
/// for that.
pub async fn measure_connect_delay(timeout_secs: u64, proxy_addr: &str) -> Measurement {
    if proxy_addr.is_empty() {
        return Measurement::failed(ProbeError::MissingAddress);
    }

    let dialer = TimedDialer::direct(Duration::from_secs(timeout_secs));
    let start = Instant::now();
    let result = dialer.dial(proxy_addr).await.map(drop);
    let measurement = classify(start.elapsed(), timeout_secs, result);
    debug!(proxy_addr, delay = measurement.delay, ok = measurement.is_ok(), "connect probe finished");
    measurement
}
