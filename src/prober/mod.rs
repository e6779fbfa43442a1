use serde::{Deserialize, Serialize};

use crate::config::TargetConfig;
use crate::delay::Measurement;

pub mod client;
pub mod connect;
pub mod dialer;
pub mod http;
pub mod proxy_connect;
pub mod tcp_connect;

#[cfg(test)]
pub(crate) mod fixtures;

pub use connect::measure_connect_delay;
pub use http::measure_delay;
pub use proxy_connect::measure_proxy_connect_delay;
pub use tcp_connect::measure_tcp_delay;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Http,
    TcpConnect,
    Connect,
    ProxyConnect,
}

impl ProbeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Http => "http",
            ProbeKind::TcpConnect => "tcp_connect",
            ProbeKind::Connect => "connect",
            ProbeKind::ProxyConnect => "proxy_connect",
        }
    }
}

/// Run the probe a configured target asks for.
pub async fn run(target: &TargetConfig, default_timeout_secs: u64) -> Measurement {
    let timeout = target.timeout_secs.unwrap_or(default_timeout_secs);
    match target.kind {
        ProbeKind::Http => measure_delay(timeout, &target.get_http_url(), &target.proxy).await,
        ProbeKind::TcpConnect => {
            let (host, port) = target.get_host_port(80);
            measure_tcp_delay(timeout, &host, port, &target.proxy).await
        }
        ProbeKind::Connect => measure_connect_delay(timeout, &target.get_connect_address()).await,
        ProbeKind::ProxyConnect => {
            let (host, port) = target.get_host_port(80);
            measure_proxy_connect_delay(timeout, &host, port, &target.proxy).await
        }
    }
}
