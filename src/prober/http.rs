use tokio::time::{Duration, Instant};
use tracing::debug;

use super::client::TimedHttpClient;
use crate::delay::{classify, Measurement};
use crate::error::ProbeError;

/// Delay of a `HEAD` request to `url`, optionally routed through a local
/// http/socks5 `proxy` such as `socks5://[::1]:1080` (empty for direct).
///
/// `timeout_secs` bounds the whole request.
pub async fn measure_delay(timeout_secs: u64, url: &str, proxy: &str) -> Measurement {
    let client = match TimedHttpClient::new(Duration::from_secs(timeout_secs), proxy) {
        Ok(c) => c,
        Err(e) => return Measurement::failed(e),
    };
    ping_http_request(&client, url, timeout_secs).await
}

/// Time one `HEAD` request issued through `client`.
pub async fn ping_http_request(client: &TimedHttpClient, url: &str, timeout_secs: u64) -> Measurement {
    let start = Instant::now();
    let result = match client.head(url) {
        Ok(req) => req.send().await.map(drop).map_err(ProbeError::from),
        Err(e) => Err(e),
    };
    let measurement = classify(start.elapsed(), timeout_secs, result);
    debug!(url, delay = measurement.delay, ok = measurement.is_ok(), "http probe finished");
    measurement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::{Outcome, DELAY_ERROR, DELAY_TIMEOUT};
    use crate::prober::fixtures;

    #[tokio::test]
    async fn head_against_local_server() {
        let (addr, mut heads) = fixtures::http_server().await;
        let m = measure_delay(5, &format!("http://{addr}/"), "").await;
        assert!(m.is_ok(), "{:?}", m.error);
        assert!(m.delay >= 0 && m.delay < DELAY_ERROR);
        let head = heads.recv().await.unwrap();
        assert!(head.starts_with("HEAD / HTTP/1.1"), "{head}");
    }

    #[tokio::test]
    async fn refused_connection_is_error() {
        let port = fixtures::closed_port().await;
        let m = measure_delay(5, &format!("http://127.0.0.1:{port}/"), "").await;
        assert_eq!(m.delay, DELAY_ERROR);
        assert!(matches!(m.error, Some(ProbeError::Http(_))));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let addr = fixtures::silent_server().await;
        let start = Instant::now();
        let m = measure_delay(1, &format!("http://{addr}/"), "").await;
        let elapsed = start.elapsed().as_millis() as i64;
        assert!((elapsed - 1000).abs() < 200, "elapsed {elapsed}ms");
        assert_eq!(m.delay, DELAY_TIMEOUT);
        assert_eq!(m.outcome(), Outcome::TimedOut);
    }

    #[tokio::test]
    async fn malformed_proxy_surfaces_at_request_time() {
        let (addr, _heads) = fixtures::http_server().await;
        let m = measure_delay(5, &format!("http://{addr}/"), "::not-a-url").await;
        assert_eq!(m.delay, DELAY_ERROR);
        assert!(matches!(m.error, Some(ProbeError::InvalidProxy { .. })));
    }

    #[tokio::test]
    async fn routes_through_http_proxy() {
        let (proxy, mut heads) = fixtures::http_server().await;
        let m = measure_delay(5, "http://probe.invalid/", &format!("http://{proxy}")).await;
        assert!(m.is_ok(), "{:?}", m.error);
        let head = heads.recv().await.unwrap();
        assert!(head.starts_with("HEAD http://probe.invalid/ HTTP/1.1"), "{head}");
    }

    #[tokio::test]
    async fn classifications_are_stable() {
        let port = fixtures::closed_port().await;
        for _ in 0..3 {
            let m = measure_delay(5, &format!("http://127.0.0.1:{port}/"), "").await;
            assert_eq!(m.outcome(), Outcome::Failed);
        }
    }
}
