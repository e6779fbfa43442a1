//! Measuring a locally started proxy engine instance.
//!
//! The engine itself (config parsing, outbound selection, geo data) lives
//! outside this crate. These helpers only bracket a probe with the engine's
//! start and stop.

use std::path::Path;

use tracing::{debug, error};

use crate::delay::Measurement;
use crate::error::ProbeError;
use crate::prober;

pub trait ProxyEngine {
    type Handle;
    type Error: std::error::Error + Send + Sync + 'static;

    fn start(&self, config: &Path) -> Result<Self::Handle, Self::Error>;
    fn stop(&self, handle: Self::Handle);
}

/// Stops the engine when dropped, so every exit path releases it.
struct Running<'a, E: ProxyEngine> {
    engine: &'a E,
    handle: Option<E::Handle>,
}

impl<E: ProxyEngine> Drop for Running<'_, E> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.engine.stop(handle);
            debug!("proxy engine stopped");
        }
    }
}

fn start<'a, E: ProxyEngine>(engine: &'a E, config: &Path) -> Result<Running<'a, E>, ProbeError> {
    match engine.start(config) {
        Ok(handle) => {
            debug!(config = %config.display(), "proxy engine started");
            Ok(Running {
                engine,
                handle: Some(handle),
            })
        }
        Err(e) => {
            error!(config = %config.display(), "failed to start proxy engine: {}", e);
            Err(ProbeError::Engine(Box::new(e)))
        }
    }
}

/// Start the engine from `config`, measure `url` through `proxy`, stop the engine.
pub async fn ping<E: ProxyEngine>(
    engine: &E,
    config: &Path,
    timeout_secs: u64,
    url: &str,
    proxy: &str,
) -> Measurement {
    let _running = match start(engine, config) {
        Ok(r) => r,
        Err(e) => return Measurement::failed(e),
    };
    prober::measure_delay(timeout_secs, url, proxy).await
}

/// Same as [`ping`] with a TCP handshake to `host:port` as the probe.
pub async fn ping_tcp<E: ProxyEngine>(
    engine: &E,
    config: &Path,
    timeout_secs: u64,
    host: &str,
    port: u16,
    proxy: &str,
) -> Measurement {
    let _running = match start(engine, config) {
        Ok(r) => r,
        Err(e) => return Measurement::failed(e),
    };
    prober::measure_tcp_delay(timeout_secs, host, port, proxy).await
}

/// Handshake time to the proxy server named in the engine config. No engine
/// instance is started for this.
pub async fn connect(timeout_secs: u64, proxy_addr: &str) -> Measurement {
    prober::measure_connect_delay(timeout_secs, proxy_addr).await
}
