//! `urldefault split <url>` – show the parts of a single URL.

use anyhow::Result;
use urldefault_core::parse;

pub fn run_split(url: &str, json: bool) -> Result<()> {
    let parts = parse(url)?;
    if json {
        return super::print_parts(&parts, true);
    }
    let row = |name: &str, value: Option<&str>| println!("{:<10} {}", name, value.unwrap_or("-"));
    row("scheme", parts.scheme.as_deref());
    row("opaque", parts.opaque.as_deref());
    row("username", parts.user.as_ref().map(|u| u.username.as_str()));
    row("password", parts.user.as_ref().and_then(|u| u.password.as_deref()));
    row("hostname", Some(parts.hostname()).filter(|h| !h.is_empty()));
    row("port", parts.port());
    row("path", Some(parts.path.as_str()).filter(|p| !p.is_empty()));
    row("query", parts.query.as_deref());
    row("fragment", parts.fragment.as_deref());
    Ok(())
}
