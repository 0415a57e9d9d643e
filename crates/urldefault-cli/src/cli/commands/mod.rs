//! CLI command handlers, one per file.

mod completions;
mod merge;
mod profiles;
mod split;

pub use completions::run_completions;
pub use merge::run_merge;
pub use profiles::run_profiles;
pub use split::run_split;

use urldefault_core::UrlParts;

/// JSON view of a URL: its serialized parts plus the rendered URL and the
/// derived hostname and port.
pub(crate) fn parts_json(parts: &UrlParts) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(parts)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("url".to_string(), parts.to_string().into());
        obj.insert("hostname".to_string(), parts.hostname().into());
        obj.insert("port".to_string(), parts.port().into());
    }
    Ok(value)
}

/// Print a URL either as one line or as pretty JSON.
pub(crate) fn print_parts(parts: &UrlParts, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&parts_json(parts)?)?);
    } else {
        println!("{parts}");
    }
    Ok(())
}
