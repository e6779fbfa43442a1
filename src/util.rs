// Host/port helpers shared by the dialers and the config layer.

/// Split `host:port`, falling back to `default_port` when no port is present.
/// Brackets around IPv6 literals are removed.
pub fn parse_host_port(s: &str, default_port: u16) -> (String, u16) {
    if let Some(rest) = s.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            let port = tail
                .strip_prefix(':')
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(default_port);
            return (host.to_string(), port);
        }
    }
    if let Some(idx) = s.rfind(':') {
        // a bare IPv6 literal has more than one colon and no port
        if s[..idx].contains(':') {
            return (s.to_string(), default_port);
        }
        if let Ok(port) = s[idx + 1..].parse::<u16>() {
            return (s[..idx].to_string(), port);
        }
    }
    (s.to_string(), default_port)
}

/// Join host and port into a dialable address, bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
