//! Host/port splitting for the combined `host` field.

/// Splits a `host` field into hostname and port.
///
/// Understands bracketed IPv6 literals: a colon inside `[...]` never starts
/// the port. An empty port (`"example.com:"`) is reported as `None`.
///
/// - `"localhost:8080"` → `("localhost", Some("8080"))`
/// - `"[::1]:8080"` → `("[::1]", Some("8080"))`
/// - `"[::1]"` → `("[::1]", None)`
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    let search_from = if host.starts_with('[') {
        match host.find(']') {
            Some(end) => end + 1,
            None => return (host, None),
        }
    } else {
        0
    };

    match host[search_from..].rfind(':') {
        Some(idx) => {
            let colon = search_from + idx;
            let port = &host[colon + 1..];
            let port = if port.is_empty() { None } else { Some(port) };
            (&host[..colon], port)
        }
        None => (host, None),
    }
}

/// Joins a hostname and port back into a `host` field.
pub fn join_host_port(hostname: &str, port: &str) -> String {
    format!("{hostname}:{port}")
}
