use std::future::Future;

use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};
use tracing::warn;
use url::Url;

use crate::error::ProbeError;

/// Raw TCP dialer bounded by a connect timeout.
#[derive(Debug, Clone, Copy)]
pub struct TimedDialer {
    timeout: Duration,
}

impl TimedDialer {
    pub fn direct(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Dialer for an optional proxy address.
    ///
    /// The proxy string is only validated: dialing through a proxy is not
    /// supported, so a valid proxy yields the same dialer as `direct`.
    pub fn new(timeout: Duration, proxy: &str) -> Result<Self, ProbeError> {
        if !proxy.is_empty() {
            Url::parse(proxy).map_err(|e| ProbeError::invalid_proxy(proxy, e))?;
            warn!(proxy, "tcp dialing through a proxy is unsupported, dialing directly");
        }
        Ok(Self::direct(timeout))
    }

    pub async fn dial(&self, addr: &str) -> Result<TcpStream, ProbeError> {
        self.bounded(addr, TcpStream::connect(addr)).await
    }

    async fn bounded<T, F>(&self, addr: &str, connect: F) -> Result<T, ProbeError>
    where
        F: Future<Output = std::io::Result<T>>,
    {
        match timeout(self.timeout, connect).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(source)) => Err(ProbeError::Dial {
                addr: addr.to_string(),
                source,
            }),
            Err(_) => Err(ProbeError::DialTimeout {
                addr: addr.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}
