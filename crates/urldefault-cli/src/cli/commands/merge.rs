//! `urldefault merge <primary> [defaults]` – fill missing parts from defaults.

use anyhow::Result;
use urldefault_core::merge;

pub fn run_merge(primary: &str, defaults: Option<&str>, json: bool) -> Result<()> {
    tracing::debug!(primary, ?defaults, "merge");
    let merged = merge(primary, defaults)?;
    super::print_parts(&merged, json)
}
