//! Field-by-field merge of a primary URL over a defaults URL.

use url::Url;

use super::error::{InputRole, ParseError};
use super::host::{join_host_port, split_host_port};
use super::parts::UrlParts;

/// Scheme injected in front of scheme-less input so the parser reads
/// `host:port/path` as an authority instead of `scheme:opaque`.
/// It is stripped again during decomposition.
const PLACEHOLDER_SCHEME: &str = "urldefault-placeholder";

/// An input is considered to carry its own scheme only if it contains `://`.
fn has_explicit_scheme(input: &str) -> bool {
    input.contains("://")
}

/// Parses the primary input. Scheme-less input is parsed under `steer_scheme`,
/// which is dropped again from the result.
fn parse_primary(primary: &str, steer_scheme: &str) -> Result<UrlParts, ParseError> {
    let has_scheme = has_explicit_scheme(primary);
    let parsed = if has_scheme {
        Url::parse(primary)
    } else {
        tracing::trace!(primary, steer_scheme, "no scheme in primary, parsing as authority");
        Url::parse(&format!("{steer_scheme}://{primary}"))
    };
    let url = parsed.map_err(|e| ParseError::new(InputRole::Primary, primary, e))?;
    Ok(UrlParts::from_parsed(&url, has_scheme))
}

fn parse_defaults(defaults: &str) -> Result<UrlParts, ParseError> {
    let url = Url::parse(defaults).map_err(|e| ParseError::new(InputRole::Defaults, defaults, e))?;
    Ok(UrlParts::from_parsed(&url, true))
}

/// Parses `primary` and fills its missing parts from `defaults`.
///
/// Both inputs are parsed before anything is merged; the first parse
/// failure is returned as is and no partial value is produced. Without
/// `defaults` the parsed primary is returned unchanged, with `scheme` set to
/// `None` if the input had none.
///
/// A scheme-less primary with a host is normalised under the scheme it
/// takes from `defaults` (default port elided, host lowercased, `\` read as
/// `/` for special schemes), so the result renders to a string that merges
/// back to the same value. Such a primary fails if it is not valid under
/// that scheme.
///
/// # Examples
///
/// - `merge("https://localhost/newpath", Some("http://example.com:8888/oldpath"))`
///   → `https://localhost:8888/newpath`
/// - `merge("localhost:9999/newpath", Some("http://example.com:8888/oldpath"))`
///   → `http://localhost:9999/newpath`
pub fn merge(primary: &str, defaults: Option<&str>) -> Result<UrlParts, ParseError> {
    let mut merged = parse_primary(primary, PLACEHOLDER_SCHEME)?;

    let Some(defaults) = defaults else {
        return Ok(merged);
    };
    let defaults = parse_defaults(defaults)?;

    if merged.scheme.is_none() && !merged.host.is_empty() {
        if let Some(scheme) = defaults.scheme.as_deref() {
            merged = parse_primary(primary, scheme)?;
        }
    }

    merged.backfill(&defaults);
    Ok(merged)
}

/// Parses a single URL. Scheme-less input is read as `host[:port]/path`.
pub fn parse(input: &str) -> Result<UrlParts, ParseError> {
    merge(input, None)
}

/// Shorthand for `merge(primary, Some(defaults))`.
pub fn parse_with_defaults(primary: &str, defaults: &str) -> Result<UrlParts, ParseError> {
    merge(primary, Some(defaults))
}

impl UrlParts {
    /// Copies every part of `defaults` that is missing here.
    ///
    /// A path of `/` counts as missing. A host without a port picks up the
    /// port of the defaults host when the two hosts differ.
    pub fn backfill(&mut self, defaults: &UrlParts) {
        if self.scheme.as_deref().map_or(true, str::is_empty) {
            self.scheme = defaults.scheme.clone();
        }
        if self.opaque.is_none() {
            self.opaque = defaults.opaque.clone();
        }
        if self.user.is_none() {
            self.user = defaults.user.clone();
        }
        if self.host.is_empty() {
            tracing::trace!(host = %defaults.host, "host taken from defaults");
            self.host = defaults.host.clone();
        }
        self.backfill_port(defaults);
        if self.path.is_empty() || self.path == "/" {
            self.path = defaults.path.clone();
            self.raw_path = defaults.raw_path.clone();
        }
        if self.fragment.is_none() {
            self.fragment = defaults.fragment.clone();
        }

        tracing::debug!(merged = %self, "backfilled from defaults");
    }

    fn backfill_port(&mut self, defaults: &UrlParts) {
        if self.host.is_empty() || self.host == defaults.host {
            return;
        }
        let (hostname, own_port) = split_host_port(&self.host);
        if own_port.is_some() || self.host.ends_with(':') {
            return;
        }
        if let Some(port) = defaults.port() {
            tracing::trace!(port, "port taken from defaults");
            self.host = join_host_port(hostname, port);
        }
    }
}
