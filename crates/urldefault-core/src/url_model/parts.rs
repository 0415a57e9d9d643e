//! Structured URL value with independently settable parts.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use url::Url;

use super::error::ParseError;
use super::host::{join_host_port, split_host_port};

/// Characters escaped when rendering decoded credentials back into an authority.
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Decoded `user[:password]` credentials of an authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserInfo {
    pub username: String,
    /// `None` when the authority had no password field at all.
    pub password: Option<String>,
}

impl UserInfo {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// A URL split into the parts a merge works on.
///
/// Unlike [`url::Url`], every part can be absent or set on its own, which is
/// what backfilling needs: a scheme-less `localhost:9999/path` is a valid
/// value here with `scheme == None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct UrlParts {
    pub scheme: Option<String>,
    /// Path of a non-hierarchical URL such as `mailto:user@example.com`.
    pub opaque: Option<String>,
    pub user: Option<UserInfo>,
    /// `hostname` or `hostname:port`; IPv6 literals keep their brackets.
    pub host: String,
    /// Percent-decoded path.
    pub path: String,
    /// Path exactly as it appears in the serialized URL.
    pub raw_path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Decomposes a parsed URL.
    ///
    /// `has_scheme` is false when the scheme was injected only to steer the
    /// parser; it is dropped here and never reaches the caller.
    pub(crate) fn from_parsed(url: &Url, has_scheme: bool) -> Self {
        let scheme = has_scheme.then(|| url.scheme().to_string());

        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(port)) => join_host_port(h, &port.to_string()),
            (Some(h), None) => h.to_string(),
            (None, _) => String::new(),
        };

        let (opaque, raw_path) = if url.cannot_be_a_base() {
            let opaque = Some(url.path().to_string()).filter(|p| !p.is_empty());
            (opaque, String::new())
        } else {
            (None, url.path().to_string())
        };

        Self {
            scheme,
            opaque,
            user: user_info(url),
            host,
            path: decode(&raw_path),
            raw_path,
            query: url.query().map(str::to_string),
            fragment: url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }

    /// Hostname without the port.
    pub fn hostname(&self) -> &str {
        split_host_port(&self.host).0
    }

    /// Port as written in the `host` part, if any.
    pub fn port(&self) -> Option<&str> {
        split_host_port(&self.host).1
    }

    /// Converts to a [`url::Url`]. Fails when the value has no scheme or is
    /// otherwise not an absolute URL.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

fn user_info(url: &Url) -> Option<UserInfo> {
    let username = url.username();
    let password = url.password();
    if username.is_empty() && password.is_none() {
        return None;
    }
    Some(UserInfo::new(decode(username), password.map(decode)))
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Renders the value back to a string.
///
/// A value without a scheme is rendered as a bare authority and path
/// (`localhost:9999/path`), the same shape [`super::merge`] accepts as a
/// primary input.
impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }

        if let Some(opaque) = &self.opaque {
            write!(f, "{opaque}")?;
        } else {
            if self.scheme.is_some() {
                write!(f, "//")?;
            }
            if let Some(user) = &self.user {
                write!(f, "{}", utf8_percent_encode(&user.username, USERINFO))?;
                if let Some(password) = &user.password {
                    write!(f, ":{}", utf8_percent_encode(password, USERINFO))?;
                }
                write!(f, "@")?;
            }
            write!(f, "{}{}", self.host, self.raw_path)?;
        }

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for UrlParts {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}
