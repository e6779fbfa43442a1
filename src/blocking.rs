//! Blocking versions of the probes.
//!
//! Each call builds a current-thread runtime, runs one probe on it and
//! returns. Do not call these from inside a tokio runtime; use the async
//! functions in [`crate::prober`] there instead.

use std::future::Future;

use crate::delay::Measurement;
use crate::error::ProbeError;
use crate::prober;

fn block_on<F>(probe: F) -> Measurement
where
    F: Future<Output = Measurement>,
{
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt.block_on(probe),
        Err(e) => Measurement::failed(ProbeError::Runtime(e)),
    }
}

pub fn measure_delay(timeout_secs: u64, url: &str, proxy: &str) -> Measurement {
    block_on(prober::measure_delay(timeout_secs, url, proxy))
}

pub fn measure_tcp_delay(timeout_secs: u64, host: &str, port: u16, proxy: &str) -> Measurement {
    block_on(prober::measure_tcp_delay(timeout_secs, host, port, proxy))
}

pub fn measure_connect_delay(timeout_secs: u64, proxy_addr: &str) -> Measurement {
    block_on(prober::measure_connect_delay(timeout_secs, proxy_addr))
}

pub fn measure_proxy_connect_delay(
    timeout_secs: u64,
    target_host: &str,
    target_port: u16,
    proxy: &str,
) -> Measurement {
    block_on(prober::measure_proxy_connect_delay(timeout_secs, target_host, target_port, proxy))
}
