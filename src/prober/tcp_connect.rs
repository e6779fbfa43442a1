use tokio::time::{Duration, Instant};
use tracing::debug;

use super::dialer::TimedDialer;
use crate::delay::{classify, Measurement};
use crate::util::join_host_port;

/// TCP handshake time to `host:port`; no data is exchanged.
///
/// A non-empty `proxy` (e.g. `socks5://127.0.0.1:1080`) must parse as a
/// URL, but the handshake is still made directly to the target.
pub async fn measure_tcp_delay(timeout_secs: u64, host: &str, port: u16, proxy: &str) -> Measurement {
    let addr = join_host_port(host, port);
    let dialer = match TimedDialer::new(Duration::from_secs(timeout_secs), proxy) {
        Ok(d) => d,
        Err(e) => return Measurement::failed(e),
    };

    let start = Instant::now();
    let result = dialer.dial(&addr).await.map(drop);
    let measurement = classify(start.elapsed(), timeout_secs, result);
    debug!(%addr, delay = measurement.delay, ok = measurement.is_ok(), "tcp probe finished");
    measurement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::{DELAY_ERROR, Outcome};
    use crate::error::ProbeError;
    use crate::prober::fixtures;

    #[tokio::test]
    async fn handshake_with_local_listener() {
        let addr = fixtures::silent_server().await;
        let m = measure_tcp_delay(5, "127.0.0.1", addr.port(), "").await;
        assert!(m.is_ok(), "{:?}", m.error);
        assert!(m.delay < DELAY_ERROR);
    }

    #[tokio::test]
    async fn closed_port_is_refused_quickly() {
        let port = fixtures::closed_port().await;
        let start = Instant::now();
        let m = measure_tcp_delay(5, "127.0.0.1", port, "").await;
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(m.delay, DELAY_ERROR);
        assert_eq!(m.outcome(), Outcome::Failed);
        assert!(matches!(m.error, Some(ProbeError::Dial { .. })));
    }

    #[tokio::test]
    async fn malformed_proxy_fails_before_dialing() {
        let addr = fixtures::silent_server().await;
        let m = measure_tcp_delay(5, "127.0.0.1", addr.port(), "no scheme here").await;
        assert_eq!(m.delay, DELAY_ERROR);
        assert!(matches!(m.error, Some(ProbeError::InvalidProxy { .. })));
    }

    #[tokio::test]
    async fn valid_proxy_still_dials_target() {
        let addr = fixtures::silent_server().await;
        let m = measure_tcp_delay(5, "127.0.0.1", addr.port(), "socks5://127.0.0.1:1").await;
        assert!(m.is_ok(), "{:?}", m.error);
    }
}
